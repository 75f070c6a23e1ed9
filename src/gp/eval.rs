//! Expression interpreter.
//!
//! [`evaluate`] is total: it never panics and never returns an error.
//! Division by zero yields 1 and any non-finite arithmetic result yields 0.

use super::expr::{Expr, Op, Terminal};
use super::value::Value;
use crate::knapsack::Item;

/// Evaluates `expr` against one item's properties.
///
/// Both children are always evaluated; `and`/`or` do not short-circuit.
pub fn evaluate(expr: &Expr, item: &Item) -> Value {
    match expr {
        Expr::Terminal(t) => resolve(*t, item),
        Expr::Operator(op, left, right) => {
            let a = evaluate(left, item);
            let b = evaluate(right, item);
            apply(*op, a, b)
        }
    }
}

fn resolve(terminal: Terminal, item: &Item) -> Value {
    match terminal {
        Terminal::Weight => Value::Number(item.weight),
        Terminal::Value => Value::Number(item.value),
        Terminal::Time => Value::Number(item.time),
        Terminal::Literal(n) => Value::Number(f64::from(n)),
    }
}

/// Applies a binary operator to two already-evaluated operands.
pub fn apply(op: Op, a: Value, b: Value) -> Value {
    match op {
        Op::Add => arithmetic(a.as_number() + b.as_number()),
        Op::Sub => arithmetic(a.as_number() - b.as_number()),
        Op::Mul => arithmetic(a.as_number() * b.as_number()),
        Op::Div => {
            let divisor = b.as_number();
            if divisor == 0.0 {
                Value::Number(1.0)
            } else {
                arithmetic(a.as_number() / divisor)
            }
        }
        Op::Gt => Value::Bool(a.as_number() > b.as_number()),
        Op::Lt => Value::Bool(a.as_number() < b.as_number()),
        // Logical operators select one of their operands.
        Op::And => {
            if a.is_truthy() {
                b
            } else {
                a
            }
        }
        Op::Or => {
            if a.is_truthy() {
                a
            } else {
                b
            }
        }
    }
}

fn arithmetic(x: f64) -> Value {
    if x.is_finite() {
        Value::Number(x)
    } else {
        Value::Number(0.0)
    }
}
