//! GP generational loop.
//!
//! [`GpRunner`] orchestrates the complete evolutionary process:
//! generation → evaluation → elitism → selection → crossover → mutation → repeat.

use super::config::GpConfig;
use super::expr::Expr;
use super::generator::generate;
use super::operators::{crossover, mutate};
use super::selection::mating_pool;
use crate::error::Result;
use crate::knapsack::{decode, fitness, Knapsack, Packing};
use crate::random::rng_from_seed;
use log::{debug, info, trace};
use rand::Rng;

/// Per-generation summary handed to the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Highest fitness in the new population.
    pub best_fitness: f64,

    /// Mean fitness of the new population.
    pub mean_fitness: f64,

    /// Mean node count of the new population.
    pub mean_size: f64,
}

/// Result of a GP run.
#[derive(Debug, Clone)]
pub struct GpResult {
    /// Highest-fitness expression of the final population.
    pub best: Expr,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Items selected by `best`, with totals.
    pub packing: Packing,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of each generation, in order.
    pub fitness_history: Vec<f64>,

    /// The last population, unsorted.
    pub final_population: Vec<Expr>,
}

/// Executes the GP loop against one knapsack instance.
///
/// # Usage
///
/// ```
/// use gp_knapsack::gp::{GpConfig, GpRunner};
/// use gp_knapsack::knapsack::Knapsack;
///
/// let knapsack = Knapsack::classic();
/// let runner = GpRunner::new(&knapsack, GpConfig::default().with_seed(1)).unwrap();
/// let result = runner.run_with_observer(|stats| {
///     println!("Generation {}: Best Fitness = {}", stats.generation, stats.best_fitness);
/// });
/// println!("{}", result.best);
/// ```
#[derive(Debug, Clone)]
pub struct GpRunner<'a> {
    knapsack: &'a Knapsack,
    config: GpConfig,
}

impl<'a> GpRunner<'a> {
    /// Creates a runner, rejecting an invalid configuration.
    pub fn new(knapsack: &'a Knapsack, config: GpConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { knapsack, config })
    }

    pub fn config(&self) -> &GpConfig {
        &self.config
    }

    pub fn knapsack(&self) -> &Knapsack {
        self.knapsack
    }

    /// Runs with an RNG seeded from the config.
    pub fn run(&self) -> GpResult {
        self.run_with_observer(|_| {})
    }

    /// Runs with an RNG seeded from the config, reporting every generation.
    pub fn run_with_observer<F>(&self, on_generation: F) -> GpResult
    where
        F: FnMut(&GenerationStats),
    {
        let mut rng = rng_from_seed(self.config.seed);
        self.run_with_rng(&mut rng, on_generation)
    }

    /// Runs with a caller-supplied RNG, reporting every generation.
    ///
    /// The same RNG state and config always produce the same result.
    pub fn run_with_rng<R, F>(&self, rng: &mut R, mut on_generation: F) -> GpResult
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        let config = &self.config;
        info!(
            "Starting GP run: population {}, generations {}, {} items",
            config.population_size,
            config.generations,
            self.knapsack.len()
        );

        let mut population = self.initial_population(rng);
        let mut fitnesses = self.score(&population);
        let mut fitness_history = Vec::with_capacity(config.generations);

        for gen in 0..config.generations {
            population = self.step(&population, &fitnesses, rng);
            fitnesses = self.score(&population);

            let stats = summarize(gen + 1, &population, &fitnesses);
            debug!(
                "Generation {}: best {} mean {:.3} mean size {:.1}",
                stats.generation, stats.best_fitness, stats.mean_fitness, stats.mean_size
            );
            fitness_history.push(stats.best_fitness);
            on_generation(&stats);
        }

        let best_idx = find_best(&fitnesses);
        let best = population[best_idx].clone();
        let best_fitness = fitnesses[best_idx];
        let packing = decode(&best, self.knapsack);
        info!("GP run finished: best fitness {best_fitness}, expression {best}");

        GpResult {
            best,
            best_fitness,
            packing,
            generations: config.generations,
            fitness_history,
            final_population: population,
        }
    }

    /// Generates `population_size` random trees.
    pub fn initial_population<R: Rng>(&self, rng: &mut R) -> Vec<Expr> {
        (0..self.config.population_size)
            .map(|_| generate(self.config.max_depth, self.config.terminal_probability, rng))
            .collect()
    }

    /// Produces the next generation from `population`.
    pub fn evolve<R: Rng>(&self, population: &[Expr], rng: &mut R) -> Vec<Expr> {
        let fitnesses = self.score(population);
        self.step(population, &fitnesses, rng)
    }

    /// Fitness of every individual, in population order.
    pub fn score(&self, population: &[Expr]) -> Vec<f64> {
        population
            .iter()
            .map(|ind| fitness(ind, self.knapsack))
            .collect()
    }

    fn step<R: Rng>(&self, population: &[Expr], fitnesses: &[f64], rng: &mut R) -> Vec<Expr> {
        let config = &self.config;

        // Stable sort, best first
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by(|&a, &b| {
            fitnesses[b]
                .partial_cmp(&fitnesses[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut next_gen: Vec<Expr> = Vec::with_capacity(config.population_size);
        for &idx in order.iter().take(config.elitism_count) {
            trace!("Elite {} (fitness {}): {}", idx, fitnesses[idx], population[idx]);
            next_gen.push(population[idx].clone());
        }

        let pool = mating_pool(fitnesses, config.population_size, rng);
        while next_gen.len() < config.population_size {
            let p1 = &population[pool[rng.random_range(0..pool.len())]];
            let p2 = &population[pool[rng.random_range(0..pool.len())]];
            let child = crossover(p1, p2, config.crossover_rate, config.max_depth, rng);
            next_gen.push(mutate(&child, config.mutation_rate, rng));
        }

        next_gen
    }
}

fn summarize(generation: usize, population: &[Expr], fitnesses: &[f64]) -> GenerationStats {
    let n = population.len() as f64;
    GenerationStats {
        generation,
        best_fitness: fitnesses[find_best(fitnesses)],
        mean_fitness: fitnesses.iter().sum::<f64>() / n,
        mean_size: population.iter().map(Expr::size).sum::<usize>() as f64 / n,
    }
}

/// Index of the first individual with the highest fitness.
fn find_best(fitnesses: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        if f > fitnesses[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
