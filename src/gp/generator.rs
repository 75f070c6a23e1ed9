//! Random expression generation.

use super::expr::{Expr, Op, Terminal};
use rand::Rng;

/// Grows a random tree.
///
/// The root is always an operator. Below the root, each position becomes a
/// terminal with probability `terminal_probability`; past `max_depth` every
/// position is a terminal. Operator nodes therefore sit at depths
/// `0..=max_depth`, and the tree has at most `max_depth + 2` levels.
pub fn generate<R: Rng>(max_depth: usize, terminal_probability: f64, rng: &mut R) -> Expr {
    grow(0, max_depth, terminal_probability, rng)
}

fn grow<R: Rng>(depth: usize, max_depth: usize, terminal_probability: f64, rng: &mut R) -> Expr {
    if depth > max_depth || (depth > 0 && rng.random::<f64>() < terminal_probability) {
        return Expr::Terminal(Terminal::random(rng));
    }
    let op = Op::random(rng);
    let left = grow(depth + 1, max_depth, terminal_probability, rng);
    let right = grow(depth + 1, max_depth, terminal_probability, rng);
    Expr::op(op, left, right)
}
