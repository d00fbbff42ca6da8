//! The expression AST.
//!
//! [`Expr`] is an immutable tree over single-character variables and the five
//! connectives of the notation: `~` (NOT), `y` (AND), `v` (OR), `-->`
//! (implication), `<-->` (biconditional).
//!
//! Trees are usually produced by [`crate::parser::parse`], but can also be
//! built directly via the smart constructors or the `!`, `&`, `|` operator
//! overloads:
//!
//! ```rust
//! use kmap_rs::expr::Expr;
//!
//! let f = Expr::var('P') & !Expr::var('Q');
//! assert_eq!(f.to_string(), "P y ~Q");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A propositional-logic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single-character variable.
    Var(char),
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction (`y`).
    And(Box<Expr>, Box<Expr>),
    /// Disjunction (`v`).
    Or(Box<Expr>, Box<Expr>),
    /// Implication (`-->`): false only when the antecedent holds and the consequent does not.
    Imply(Box<Expr>, Box<Expr>),
    /// Biconditional (`<-->`): true exactly when both sides share a truth value.
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: char) -> Self {
        Expr::Var(name)
    }

    /// Negation; collapses an immediate double negation.
    pub fn not(value: Self) -> Self {
        match value {
            Expr::Not(inner) => *inner,
            _ => Expr::Not(Box::new(value)),
        }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn imply(lhs: Self, rhs: Self) -> Self {
        Expr::Imply(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// Returns the variables of the expression, sorted and deduplicated.
    pub fn variables(&self) -> Vec<char> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars.into_iter().collect()
    }

    fn collect_variables(&self, vars: &mut BTreeSet<char>) {
        match self {
            Expr::Var(name) => {
                vars.insert(*name);
            }
            Expr::Not(a) => a.collect_variables(vars),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Imply(a, b) | Expr::Iff(a, b) => {
                a.collect_variables(vars);
                b.collect_variables(vars);
            }
        }
    }

    /// Binding strength of the topmost connective, tightest = highest.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Var(_) => 5,
            Expr::Not(_) => 4,
            Expr::And(_, _) => 3,
            Expr::Or(_, _) => 2,
            Expr::Imply(_, _) => 1,
            Expr::Iff(_, _) => 0,
        }
    }

    /// Writes `self`, parenthesizing when its connective binds looser than `parent`.
    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, parent: u8) -> fmt::Result {
        let prec = self.precedence();
        if prec < parent {
            write!(f, "(")?;
        }
        match self {
            Expr::Var(name) => write!(f, "{}", name)?,
            Expr::Not(a) => {
                write!(f, "~")?;
                a.fmt_prec(f, prec)?;
            }
            Expr::And(a, b) => {
                a.fmt_prec(f, prec)?;
                write!(f, " y ")?;
                b.fmt_prec(f, prec + 1)?;
            }
            Expr::Or(a, b) => {
                a.fmt_prec(f, prec)?;
                write!(f, " v ")?;
                b.fmt_prec(f, prec + 1)?;
            }
            Expr::Imply(a, b) => {
                a.fmt_prec(f, prec)?;
                write!(f, " --> ")?;
                b.fmt_prec(f, prec + 1)?;
            }
            Expr::Iff(a, b) => {
                a.fmt_prec(f, prec)?;
                write!(f, " <--> ")?;
                b.fmt_prec(f, prec + 1)?;
            }
        }
        if prec < parent {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        match self {
            Expr::Not(inner) => *inner,
            other => Expr::Not(Box::new(other)),
        }
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}
