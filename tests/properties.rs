//! Property tests over arbitrary trees and knapsack instances.

use gp_knapsack::gp::{crossover, evaluate, generate, mutate, Expr, Op, Terminal, Value};
use gp_knapsack::knapsack::{decode, fitness, Item, Knapsack};
use gp_knapsack::random::create_rng;
use proptest::collection::vec;
use proptest::prelude::*;

fn terminal() -> impl Strategy<Value = Terminal> {
    prop_oneof![
        Just(Terminal::Weight),
        Just(Terminal::Value),
        Just(Terminal::Time),
        (3usize..23).prop_map(Terminal::from_index),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    (0usize..Op::ALL.len()).prop_map(|i| Op::ALL[i])
}

fn expr() -> impl Strategy<Value = Expr> {
    terminal()
        .prop_map(Expr::Terminal)
        .prop_recursive(7, 128, 2, |inner| {
            (op(), inner.clone(), inner).prop_map(|(op, l, r)| Expr::op(op, l, r))
        })
}

fn item() -> impl Strategy<Value = Item> {
    (0.0f64..20.0, -5.0f64..20.0, 0.0f64..20.0).prop_map(|(w, v, t)| Item::new(w, v, t))
}

fn knapsack() -> impl Strategy<Value = Knapsack> {
    (vec(item(), 0..12), 0.0f64..40.0, 0.0f64..40.0)
        .prop_map(|(items, capacity, time_limit)| Knapsack::new(items, capacity, time_limit))
}

proptest! {
    #[test]
    fn decode_never_violates_limits(e in expr(), k in knapsack()) {
        let packing = decode(&e, &k);
        if packing.is_empty() {
            prop_assert_eq!(packing.total_weight, 0.0);
            prop_assert_eq!(packing.total_time, 0.0);
        } else {
            prop_assert!(packing.total_weight <= k.capacity);
            prop_assert!(packing.total_time <= k.time_limit);
            prop_assert!(packing.indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(packing.indices.iter().all(|&i| i < k.len()));
        }
    }

    #[test]
    fn fitness_matches_packing_value(e in expr(), k in knapsack()) {
        let packing = decode(&e, &k);
        let f = fitness(&e, &k);
        if packing.is_empty() {
            prop_assert_eq!(f, 0.0);
        } else {
            let expected: f64 = packing.indices.iter().map(|&i| k.items[i].value).sum();
            prop_assert_eq!(f, expected);
        }
    }

    #[test]
    fn decode_selects_exactly_boolean_true(e in expr(), k in knapsack()) {
        let selected: Vec<usize> = k
            .items
            .iter()
            .enumerate()
            .filter(|(_, it)| evaluate(&e, it) == Value::Bool(true))
            .map(|(i, _)| i)
            .collect();
        let packing = decode(&e, &k);
        prop_assert!(packing.is_empty() || packing.indices == selected);
    }

    #[test]
    fn evaluation_is_total_and_finite(e in expr(), it in item()) {
        if let Value::Number(x) = evaluate(&e, &it) {
            prop_assert!(x.is_finite());
        }
    }

    #[test]
    fn generated_and_mutated_terminals_well_formed(seed in any::<u64>(), rate in 0.0f64..=1.0) {
        let mut rng = create_rng(seed);
        let e = generate(5, 0.3, &mut rng);
        let m = mutate(&e, rate, &mut rng);
        prop_assert!(e.terminals().iter().all(Terminal::is_well_formed));
        prop_assert!(m.terminals().iter().all(Terminal::is_well_formed));
        prop_assert_eq!(e.size(), m.size());
    }

    #[test]
    fn operators_leave_parents_untouched(a in expr(), b in expr(), seed in any::<u64>()) {
        let (a0, b0) = (a.clone(), b.clone());
        let mut rng = create_rng(seed);
        let child = crossover(&a, &b, 0.9, 5, &mut rng);
        let _ = mutate(&child, 0.5, &mut rng);
        prop_assert_eq!(&a, &a0);
        prop_assert_eq!(&b, &b0);
        prop_assert!(child.depth() <= a.depth().max(b.depth()));
    }
}

#[test]
fn worked_example_rejects_over_capacity_selection() {
    let k = Knapsack::classic();
    let e = Expr::op(Op::Gt, Terminal::Value.into(), Expr::literal(3));

    let picks: Vec<usize> = k
        .items
        .iter()
        .enumerate()
        .filter(|(_, it)| evaluate(&e, it).is_true())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(picks, vec![1, 2, 3, 4, 5, 6]);
    let weight: f64 = picks.iter().map(|&i| k.items[i].weight).sum();
    assert_eq!(weight, 26.0);

    let packing = decode(&e, &k);
    assert!(packing.is_empty());
    assert_eq!(packing.total_weight, 0.0);
    assert_eq!(packing.total_time, 0.0);
    assert_eq!(fitness(&e, &k), 0.0);
    assert_eq!(e.to_string(), "(v > 3)");
}
