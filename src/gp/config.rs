//! GP configuration.
//!
//! [`GpConfig`] holds all parameters that control the generational loop.

use crate::error::{GpError, Result};

/// Configuration for the genetic-programming run.
///
/// # Defaults
///
/// ```
/// use gp_knapsack::gp::GpConfig;
///
/// let config = GpConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.elitism_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gp_knapsack::gp::GpConfig;
///
/// let config = GpConfig::default()
///     .with_population_size(100)
///     .with_max_depth(4)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Soft depth bound for freshly generated trees. Also the depth below
    /// which crossover may replace whole subtrees.
    pub max_depth: usize,

    /// Number of generations to run. There is no early stop.
    pub generations: usize,

    /// Per-node probability of redrawing a symbol during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Per-step probability of subtree replacement during crossover (0.0–1.0).
    pub crossover_rate: f64,

    /// Number of top individuals copied unchanged into the next generation.
    pub elitism_count: usize,

    /// Probability that a non-root position becomes a terminal during
    /// generation (0.0–1.0).
    pub terminal_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GpConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            max_depth: 5,
            generations: 50,
            mutation_rate: 0.1,
            crossover_rate: 0.9,
            elitism_count: 2,
            terminal_probability: 0.3,
            seed: None,
        }
    }
}

impl GpConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation depth bound.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite count.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the early-terminal probability used by the generator.
    pub fn with_terminal_probability(mut self, p: f64) -> Self {
        self.terminal_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GpError::InvalidConfig`] describing the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GpError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_depth == 0 {
            return Err(GpError::InvalidConfig("max_depth must be at least 1".into()));
        }
        if self.generations == 0 {
            return Err(GpError::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if self.elitism_count > self.population_size {
            return Err(GpError::InvalidConfig(
                "elitism_count must not exceed population_size".into(),
            ));
        }
        for (name, p) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
            ("terminal_probability", self.terminal_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GpError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }
}
