//! Tree mutation and crossover.
//!
//! Both operators build new nodes and never modify their inputs. Crossover
//! may return a subtree of the second parent as-is, so offspring can share
//! structure with their parents.
//!
//! # Mutation
//!
//! - [`mutate`]: point mutation. Every operator symbol and every terminal is
//!   independently redrawn with probability `rate`; tree shape is preserved.
//!
//! # Crossover
//!
//! - [`crossover`]: positional subtree replacement. Walking both parents in
//!   lockstep from the root, each step either takes the second parent's whole
//!   subtree (when the coin lands and both nodes are operators) or keeps the
//!   first parent's operator and recurses into the child pairs. Terminals on
//!   either side stop the walk and keep the first parent's subtree.

use super::expr::{Expr, Op, Terminal};
use rand::Rng;
use std::sync::Arc;

/// Point mutation with per-node probability `rate`.
///
/// Children of an operator node are always visited, whether or not the
/// node's own symbol was replaced.
pub fn mutate<R: Rng>(expr: &Expr, rate: f64, rng: &mut R) -> Expr {
    match expr {
        Expr::Operator(op, left, right) => {
            let op = if rng.random::<f64>() < rate {
                Op::random(rng)
            } else {
                *op
            };
            let left = mutate(left, rate, rng);
            let right = mutate(right, rate, rng);
            Expr::op(op, left, right)
        }
        Expr::Terminal(t) => {
            if rng.random::<f64>() < rate {
                Expr::Terminal(Terminal::random(rng))
            } else {
                Expr::Terminal(*t)
            }
        }
    }
}

/// Combines two parents into one offspring.
///
/// At each step a coin with probability `rate` is drawn. Replacement only
/// happens at depths shallower than `max_depth`; deeper, the walk always
/// recurses.
pub fn crossover<R: Rng>(a: &Expr, b: &Expr, rate: f64, max_depth: usize, rng: &mut R) -> Expr {
    cross(a, b, 0, rate, max_depth, rng)
}

fn cross<R: Rng>(a: &Expr, b: &Expr, depth: usize, rate: f64, max_depth: usize, rng: &mut R) -> Expr {
    let replace = rng.random::<f64>() < rate && depth < max_depth;
    match (a, b) {
        (Expr::Operator(..), Expr::Operator(..)) if replace => b.clone(),
        (Expr::Operator(op, a_left, a_right), Expr::Operator(_, b_left, b_right)) => {
            let left = cross(a_left, b_left, depth + 1, rate, max_depth, rng);
            let right = cross(a_right, b_right, depth + 1, rate, max_depth, rng);
            Expr::Operator(*op, Arc::new(left), Arc::new(right))
        }
        _ => a.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::generator::generate;
    use crate::random::create_rng;

    fn same_shape(a: &Expr, b: &Expr) -> bool {
        match (a, b) {
            (Expr::Terminal(_), Expr::Terminal(_)) => true,
            (Expr::Operator(_, al, ar), Expr::Operator(_, bl, br)) => {
                same_shape(al, bl) && same_shape(ar, br)
            }
            _ => false,
        }
    }

    fn sample() -> Expr {
        Expr::op(
            Op::And,
            Expr::op(Op::Gt, Terminal::Value.into(), Expr::literal(3)),
            Expr::op(Op::Lt, Terminal::Weight.into(), Expr::literal(5)),
        )
    }

    fn other() -> Expr {
        Expr::op(
            Op::Or,
            Expr::op(Op::Add, Terminal::Time.into(), Expr::literal(-1)),
            Terminal::Weight.into(),
        )
    }

    // ---- Mutation ----

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let e = sample();
        assert_eq!(mutate(&e, 0.0, &mut rng), e);
    }

    #[test]
    fn test_mutate_preserves_shape() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let e = generate(5, 0.3, &mut rng);
            let m = mutate(&e, 0.5, &mut rng);
            assert!(same_shape(&e, &m), "{e} vs {m}");
        }
    }

    #[test]
    fn test_mutate_rate_one_changes_something() {
        let mut rng = create_rng(42);
        let e = sample();
        let changed = (0..50).any(|_| mutate(&e, 1.0, &mut rng) != e);
        assert!(changed);
    }

    #[test]
    fn test_mutate_does_not_touch_input() {
        let mut rng = create_rng(5);
        let e = sample();
        let before = e.to_string();
        let _ = mutate(&e, 1.0, &mut rng);
        assert_eq!(e.to_string(), before);
    }

    #[test]
    fn test_mutate_terminals_well_formed() {
        let mut rng = create_rng(11);
        for _ in 0..200 {
            let e = generate(4, 0.3, &mut rng);
            let m = mutate(&e, 0.8, &mut rng);
            assert!(m.terminals().iter().all(Terminal::is_well_formed));
        }
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_rate_one_replaces_root() {
        let mut rng = create_rng(42);
        let a = sample();
        let b = other();
        assert_eq!(crossover(&a, &b, 1.0, 5, &mut rng), b);
    }

    #[test]
    fn test_crossover_rate_zero_keeps_first_parent() {
        let mut rng = create_rng(42);
        let a = sample();
        let b = other();
        assert_eq!(crossover(&a, &b, 0.0, 5, &mut rng), a);
    }

    #[test]
    fn test_crossover_max_depth_zero_never_replaces() {
        let mut rng = create_rng(42);
        let a = sample();
        let b = other();
        assert_eq!(crossover(&a, &b, 1.0, 0, &mut rng), a);
    }

    #[test]
    fn test_crossover_terminal_first_parent_is_kept() {
        let mut rng = create_rng(42);
        let a = Expr::terminal(Terminal::Weight);
        let b = other();
        assert_eq!(crossover(&a, &b, 1.0, 5, &mut rng), a);
        assert_eq!(crossover(&a, &b, 0.0, 5, &mut rng), a);
    }

    #[test]
    fn test_crossover_shares_second_parent_subtree() {
        let mut rng = create_rng(42);
        let a = sample();
        let b = other();
        let child = crossover(&a, &b, 1.0, 5, &mut rng);
        match (&child, &b) {
            (Expr::Operator(_, cl, _), Expr::Operator(_, bl, _)) => {
                assert!(Arc::ptr_eq(cl, bl));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_crossover_depth_bounded_by_parents() {
        let mut rng = create_rng(8);
        for _ in 0..200 {
            let a = generate(5, 0.3, &mut rng);
            let b = generate(5, 0.3, &mut rng);
            let c = crossover(&a, &b, 0.9, 5, &mut rng);
            assert!(c.depth() <= a.depth().max(b.depth()));
        }
    }
}
