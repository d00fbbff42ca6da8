//! Error types for parsing, evaluation, and Karnaugh rendering.
//!
//! Two distinct kinds are surfaced to callers:
//!
//! - [`ParseError`]: the expression text does not reduce to a single boolean
//!   value under the grammar, or an assignment is missing a binding.
//! - [`UnsupportedArity`]: the expression is well-formed, but its variable
//!   count falls outside the 1..=5 range that Karnaugh maps support.
//!
//! A malformed expression is never coerced to `false`; every operation either
//! fully succeeds or returns one of these errors before producing output.

use thiserror::Error;

/// An error produced while tokenizing, parsing, or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that belongs to no token of the grammar.
    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Its character offset in the whitespace-stripped input.
        pos: usize,
    },

    /// The input ended where an operand or operator was still required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// An operator or closing parenthesis appeared where an operand was expected.
    #[error("expected a variable, '~', or '(', found {found:?}")]
    ExpectedOperand {
        /// Display form of the token that was found instead.
        found: String,
    },

    /// A parenthesized sub-expression was never closed.
    #[error("missing closing parenthesis")]
    MissingClosingParen,

    /// Tokens remained after a complete expression was parsed.
    #[error("unexpected trailing {found:?} after a complete expression")]
    TrailingInput {
        /// Display form of the first leftover token.
        found: String,
    },

    /// A variable occurred in the expression but has no value in the assignment.
    #[error("variable {0:?} has no binding in the assignment")]
    UnboundVariable(char),
}

/// The variable count is outside the 1..=5 range supported by Karnaugh maps.
///
/// Kept distinct from [`ParseError`]: the expression itself may be perfectly
/// well-formed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("Karnaugh maps support 1 to 5 variables, got {0}")]
pub struct UnsupportedArity(pub usize);
