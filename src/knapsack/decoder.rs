//! Mapping an expression to a packing, and packings to fitness.
//!
//! Feasibility is all-or-nothing: if the items an expression selects exceed
//! either the weight capacity or the time limit, the whole selection is
//! dropped rather than repaired.

use super::types::Knapsack;
use crate::gp::{evaluate, Expr};

/// The items an expression selects, with their summed weight and time.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packing {
    /// Indices into [`Knapsack::items`], ascending.
    pub indices: Vec<usize>,
    pub total_weight: f64,
    pub total_time: f64,
}

impl Packing {
    /// The rejected (or empty) selection.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sum of item values over the packing.
    pub fn total_value(&self, knapsack: &Knapsack) -> f64 {
        self.indices.iter().map(|&i| knapsack.items[i].value).sum()
    }
}

/// Selects every item for which `expr` evaluates to boolean `true`.
///
/// Truthy numbers do not select. Returns [`Packing::empty`] when the
/// selection breaks the capacity or the time limit.
pub fn decode(expr: &Expr, knapsack: &Knapsack) -> Packing {
    let mut packing = Packing::empty();
    for (index, item) in knapsack.items.iter().enumerate() {
        if evaluate(expr, item).is_true() {
            packing.indices.push(index);
            packing.total_weight += item.weight;
            packing.total_time += item.time;
        }
    }

    if packing.total_weight > knapsack.capacity || packing.total_time > knapsack.time_limit {
        return Packing::empty();
    }
    packing
}

/// Total value of the decoded packing; 0 when infeasible or empty.
pub fn fitness(expr: &Expr, knapsack: &Knapsack) -> f64 {
    decode(expr, knapsack).total_value(knapsack)
}
