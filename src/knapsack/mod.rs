//! Capacity- and time-constrained knapsack.
//!
//! - [`Knapsack`]: ordered items plus the two hard limits
//! - [`decode`]: expression → [`Packing`] (all-or-nothing feasibility)
//! - [`fitness`]: total value of the decoded packing

mod decoder;
mod types;

pub use decoder::{decode, fitness, Packing};
pub use types::{Item, Knapsack};
