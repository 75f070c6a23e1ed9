//! Genetic programming engine.
//!
//! Individuals are expression trees ([`Expr`]) over an item's weight (`w`),
//! value (`v`), and time (`t`) plus small integer literals, combined by
//! eight binary operators. A tree is its own genotype; evaluating it against
//! each item yields the phenotype, an item selection.
//!
//! # Key Types
//!
//! - [`GpConfig`]: Run parameters (population, depth, rates, elitism, seed)
//! - [`GpRunner`]: Executes the generational loop
//! - [`GpResult`]: Best expression, its packing, and per-generation history
//!
//! # Submodules
//!
//! - [`generator`]: Random tree growth
//! - [`operators`]: Point mutation and positional subtree crossover
//! - [`selection`]: Roulette-wheel mating pool
//!
//! # References
//!
//! - Koza (1992), *Genetic Programming: On the Programming of Computers by
//!   Means of Natural Selection*
//! - Poli, Langdon & McPhee (2008), *A Field Guide to Genetic Programming*

mod config;
mod eval;
mod expr;
pub mod generator;
pub mod operators;
mod runner;
pub mod selection;
mod value;

pub use config::GpConfig;
pub use eval::{apply, evaluate};
pub use expr::{Expr, Op, Terminal, LITERAL_MAX, LITERAL_MIN, TERMINAL_COUNT};
pub use generator::generate;
pub use operators::{crossover, mutate};
pub use runner::{GenerationStats, GpResult, GpRunner};
pub use selection::mating_pool;
pub use value::Value;
