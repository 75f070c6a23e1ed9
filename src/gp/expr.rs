//! Expression trees.
//!
//! An [`Expr`] is either a [`Terminal`] leaf or a binary [`Op`] node. Child
//! pointers are reference-counted so that crossover can hand back a parent's
//! subtree without copying it. Nothing in the crate mutates a node after
//! construction, which is what makes that sharing safe.

use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Smallest and largest integer literal a terminal may carry (zero excluded).
pub const LITERAL_MIN: i8 = -10;
pub const LITERAL_MAX: i8 = 10;

/// Size of the terminal set: three property references plus 20 literals.
pub const TERMINAL_COUNT: usize = 23;

/// A leaf: an item property reference or a nonzero integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terminal {
    /// `w`
    Weight,
    /// `v`
    Value,
    /// `t`
    Time,
    /// Integer in `[-10, 10]`, never 0.
    Literal(i8),
}

impl Terminal {
    /// Builds a literal terminal, rejecting 0 and values outside `[-10, 10]`.
    pub fn literal(n: i8) -> Option<Self> {
        if n != 0 && (LITERAL_MIN..=LITERAL_MAX).contains(&n) {
            Some(Terminal::Literal(n))
        } else {
            None
        }
    }

    /// Returns the `index`-th entry of the terminal set.
    ///
    /// Order is `w, v, t, -10, ..., -1, 1, ..., 10`.
    ///
    /// # Panics
    /// Panics if `index >= TERMINAL_COUNT`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < TERMINAL_COUNT, "terminal index out of range");
        match index {
            0 => Terminal::Weight,
            1 => Terminal::Value,
            2 => Terminal::Time,
            i => {
                // 3..=12 -> -10..=-1, 13..=22 -> 1..=10
                let k = i as i8 - 3;
                let n = if k < 10 { k - 10 } else { k - 9 };
                Terminal::Literal(n)
            }
        }
    }

    /// Draws a terminal uniformly from the terminal set.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_index(rng.random_range(0..TERMINAL_COUNT))
    }

    /// True for the three property references and in-range nonzero literals.
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Terminal::Literal(n) => Terminal::literal(n).is_some(),
            _ => true,
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Weight => f.write_str("w"),
            Terminal::Value => f.write_str("v"),
            Terminal::Time => f.write_str("t"),
            Terminal::Literal(n) => write!(f, "{n}"),
        }
    }
}

/// Binary operator. Logical operators are binary as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Gt,
    Lt,
    And,
    Or,
}

impl Op {
    /// The full operator set, in drawing order.
    pub const ALL: [Op; 8] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Gt,
        Op::Lt,
        Op::And,
        Op::Or,
    ];

    /// Draws an operator uniformly from [`Op::ALL`].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::And => "and",
            Op::Or => "or",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression tree. Cloning is shallow: children are shared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Terminal(Terminal),
    Operator(Op, Arc<Expr>, Arc<Expr>),
}

impl Expr {
    pub fn terminal(terminal: Terminal) -> Self {
        Expr::Terminal(terminal)
    }

    /// Builds an operator node over two owned children.
    pub fn op(op: Op, left: Expr, right: Expr) -> Self {
        Expr::Operator(op, Arc::new(left), Arc::new(right))
    }

    /// Literal terminal shorthand.
    ///
    /// # Panics
    /// Panics if `n` is 0 or outside `[-10, 10]`.
    pub fn literal(n: i8) -> Self {
        Expr::Terminal(Terminal::literal(n).expect("literal must be in [-10, 10] and nonzero"))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Expr::Terminal(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Expr::Operator(..))
    }

    /// Number of levels; a lone terminal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Terminal(_) => 1,
            Expr::Operator(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Total node count.
    pub fn size(&self) -> usize {
        match self {
            Expr::Terminal(_) => 1,
            Expr::Operator(_, l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Visits every terminal, left to right.
    pub fn terminals(&self) -> Vec<Terminal> {
        let mut out = Vec::new();
        self.collect_terminals(&mut out);
        out
    }

    fn collect_terminals(&self, out: &mut Vec<Terminal>) {
        match self {
            Expr::Terminal(t) => out.push(*t),
            Expr::Operator(_, l, r) => {
                l.collect_terminals(out);
                r.collect_terminals(out);
            }
        }
    }
}

impl From<Terminal> for Expr {
    fn from(t: Terminal) -> Self {
        Expr::Terminal(t)
    }
}

/// Parenthesized infix: `(<left> <op> <right>)`, terminals as plain text.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Terminal(t) => write!(f, "{t}"),
            Expr::Operator(op, l, r) => write!(f, "({l} {op} {r})"),
        }
    }
}
