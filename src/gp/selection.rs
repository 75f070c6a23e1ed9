//! Mating-pool selection.
//!
//! Fitness-proportionate (roulette wheel) sampling with replacement. Higher
//! fitness is better. When no individual has positive fitness the wheel is
//! degenerate and sampling falls back to uniform.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use rand::Rng;

/// Draws `size` population indices with replacement.
///
/// Index `i` is drawn with probability `fitnesses[i] / sum(fitnesses)`.
/// Negative fitness counts as 0. If the total is 0 every index is equally
/// likely.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn mating_pool<R: Rng>(fitnesses: &[f64], size: usize, rng: &mut R) -> Vec<usize> {
    assert!(
        !fitnesses.is_empty(),
        "cannot select from empty population"
    );

    let weights: Vec<f64> = fitnesses.iter().map(|&f| f.max(0.0)).collect();
    let total: f64 = weights.iter().sum();

    if total > 0.0 && total.is_finite() {
        (0..size).map(|_| roulette(&weights, total, rng)).collect()
    } else {
        let n = fitnesses.len();
        (0..size).map(|_| rng.random_range(0..n)).collect()
    }
}

/// One spin of the wheel over non-negative `weights` summing to `total`.
fn roulette<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last index with nonzero weight
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}
