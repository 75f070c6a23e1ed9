use gp_knapsack::gp::{GpConfig, GpRunner};
use gp_knapsack::knapsack::Knapsack;
use std::process;

fn main() {
    env_logger::init();

    let mut config = GpConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(e) => {
                log::error!("Invalid seed '{}': {}", arg, e);
                process::exit(2);
            }
        }
    }

    let knapsack = Knapsack::classic();
    let runner = match GpRunner::new(&knapsack, config) {
        Ok(r) => r,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    let result = runner.run_with_observer(|stats| {
        println!(
            "Generation {}: Best Fitness = {}",
            stats.generation, stats.best_fitness
        );
    });

    println!("\nBest Solution Expression:");
    println!("{}", result.best);

    println!("\nSelected Items:");
    for &i in &result.packing.indices {
        let item = &knapsack.items[i];
        println!(
            "Weight: {}, Value: {}, Time: {}",
            item.weight, item.value, item.time
        );
    }
    println!(
        "\nTotal Weight: {}, Total Time: {}",
        result.packing.total_weight, result.packing.total_time
    );
}
