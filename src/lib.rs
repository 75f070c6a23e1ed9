//! Genetic programming of item-selection rules for a constrained knapsack.
//!
//! Candidate solutions are small expression trees over an item's weight,
//! value, and time. A tree selects every item for which it evaluates to
//! boolean `true`; the selection is feasible only if the summed weight and
//! time stay within the knapsack's capacity and time limit.
//!
//! - [`gp`]: expression trees, evaluation, genetic operators, selection,
//!   and the generational loop ([`gp::GpRunner`]).
//! - [`knapsack`]: the problem instance and the decoder/fitness that map a
//!   tree to a packing.
//!
//! # Example
//!
//! ```
//! use gp_knapsack::gp::{GpConfig, GpRunner};
//! use gp_knapsack::knapsack::Knapsack;
//!
//! let knapsack = Knapsack::classic();
//! let config = GpConfig::default().with_generations(10).with_seed(42);
//! let runner = GpRunner::new(&knapsack, config).unwrap();
//! let result = runner.run();
//! assert_eq!(result.fitness_history.len(), 10);
//! assert!(result.packing.total_weight <= knapsack.capacity);
//! ```

pub mod error;
pub mod gp;
pub mod knapsack;
pub mod random;

pub use error::{GpError, Result};
