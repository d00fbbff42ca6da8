//! Assignments and expression evaluation.
//!
//! An [`Assignment`] binds each variable to a boolean. Evaluation walks the
//! AST and combines the bound values directly; it never rewrites the
//! expression text. A variable without a binding is a
//! [`ParseError::UnboundVariable`], never a silent `false` — both operands of
//! a binary connective are evaluated before combining, so a missing binding
//! surfaces even where short-circuiting would have skipped it.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ParseError;
use crate::expr::Expr;
use crate::parser;

/// A mapping from variables to boolean values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<char, bool>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the assignment at truth-table row `index` over `variables`.
    ///
    /// The variable sequence is read as a binary number with the first
    /// (alphabetically smallest) variable as the most significant bit,
    /// `false` before `true` at each position.
    pub fn from_bits(variables: &[char], index: usize) -> Self {
        let n = variables.len();
        debug_assert!(index < (1 << n));

        let mut values = BTreeMap::new();
        for (k, &var) in variables.iter().enumerate() {
            let bit = (index >> (n - 1 - k)) & 1;
            values.insert(var, bit == 1);
        }
        Self { values }
    }

    /// Binds `var` to `value`, replacing any previous binding.
    pub fn set(&mut self, var: char, value: bool) {
        self.values.insert(var, value);
    }

    /// Returns the binding for `var`, if any.
    pub fn get(&self, var: char) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(variable, value)` pairs in ascending variable order.
    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.values.iter().map(|(&var, &value)| (var, value))
    }
}

impl FromIterator<(char, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (var, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, value as u8)?;
            first = false;
        }
        Ok(())
    }
}

impl Expr {
    /// Evaluates the expression under the given assignment.
    ///
    /// Semantics: `~A` is negation, `A y B` conjunction, `A v B` disjunction,
    /// `A --> B` is `~A v B`, and `A <--> B` is `(A y B) v (~A y ~B)`.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, ParseError> {
        Ok(match self {
            Expr::Var(name) => assignment
                .get(*name)
                .ok_or(ParseError::UnboundVariable(*name))?,
            Expr::Not(a) => !a.eval(assignment)?,
            Expr::And(a, b) => {
                let a = a.eval(assignment)?;
                let b = b.eval(assignment)?;
                a && b
            }
            Expr::Or(a, b) => {
                let a = a.eval(assignment)?;
                let b = b.eval(assignment)?;
                a || b
            }
            Expr::Imply(a, b) => {
                let a = a.eval(assignment)?;
                let b = b.eval(assignment)?;
                !a || b
            }
            Expr::Iff(a, b) => {
                let a = a.eval(assignment)?;
                let b = b.eval(assignment)?;
                a == b
            }
        })
    }
}

/// Parses `input` and evaluates it under `assignment`.
///
/// ```rust
/// use kmap_rs::eval::{evaluate, Assignment};
///
/// let assignment: Assignment = [('P', true), ('Q', false)].into_iter().collect();
/// assert_eq!(evaluate("P y Q", &assignment), Ok(false));
/// assert_eq!(evaluate("P v Q", &assignment), Ok(true));
/// ```
pub fn evaluate(input: &str, assignment: &Assignment) -> Result<bool, ParseError> {
    parser::parse(input)?.eval(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(pairs: &[(char, bool)]) -> Assignment {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_not() {
        assert_eq!(evaluate("~P", &assignment(&[('P', true)])), Ok(false));
        assert_eq!(evaluate("~P", &assignment(&[('P', false)])), Ok(true));
    }

    #[test]
    fn test_binary_connectives() {
        for a in [false, true] {
            for b in [false, true] {
                let values = assignment(&[('P', a), ('Q', b)]);
                assert_eq!(evaluate("P y Q", &values), Ok(a && b));
                assert_eq!(evaluate("P v Q", &values), Ok(a || b));
                assert_eq!(evaluate("P --> Q", &values), Ok(!a || b));
                assert_eq!(evaluate("P <--> Q", &values), Ok(a == b));
            }
        }
    }

    #[test]
    fn test_biconditional_expansion() {
        // A <--> B  ==  (A y B) v (~A y ~B)
        for a in [false, true] {
            for b in [false, true] {
                let values = assignment(&[('A', a), ('B', b)]);
                assert_eq!(
                    evaluate("A <--> B", &values),
                    evaluate("(A y B) v (~A y ~B)", &values),
                );
            }
        }
    }

    #[test]
    fn test_unbound_variable_is_an_error() {
        let values = assignment(&[('P', false)]);
        // Short-circuiting must not hide the missing binding for Q.
        assert_eq!(
            evaluate("P y Q", &values),
            Err(ParseError::UnboundVariable('Q'))
        );
        assert_eq!(
            evaluate("Q v P", &values),
            Err(ParseError::UnboundVariable('Q'))
        );
    }

    #[test]
    fn test_from_bits_canonical_order() {
        let vars = ['P', 'Q', 'R'];
        // Index 6 = 110 binary: P=1, Q=1, R=0.
        let values = Assignment::from_bits(&vars, 6);
        assert_eq!(values.get('P'), Some(true));
        assert_eq!(values.get('Q'), Some(true));
        assert_eq!(values.get('R'), Some(false));

        let values = Assignment::from_bits(&vars, 0);
        assert!(values.iter().all(|(_, value)| !value));
    }

    #[test]
    fn test_assignment_display() {
        let values = assignment(&[('Q', false), ('P', true)]);
        assert_eq!(values.to_string(), "P=1, Q=0");
    }

    #[test]
    fn test_parse_error_propagates() {
        assert_eq!(
            evaluate("P y", &assignment(&[('P', true)])),
            Err(ParseError::UnexpectedEnd)
        );
    }
}
