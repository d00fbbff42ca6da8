//! Truth tables.
//!
//! A [`TruthTable`] is the complete enumeration of a boolean expression: one
//! row per assignment in canonical binary order (the alphabetically-first
//! variable is the most significant bit, `false` before `true`), each row
//! carrying the expression's value under that assignment.
//!
//! Generation is fail-fast: a parse or evaluation error on any row aborts the
//! whole table, so a malformed expression can never yield a partially wrong
//! table.

use std::fmt;

use log::debug;

use crate::error::ParseError;
use crate::eval::Assignment;
use crate::expr::Expr;
use crate::parser;

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The assignment for this row.
    pub assignment: Assignment,
    /// The expression's value under the assignment.
    pub value: bool,
}

/// The complete truth table of an expression.
///
/// # Invariants
///
/// - The table has exactly `2^n` rows for `n` variables.
/// - Row `i`'s assignment is the n-bit binary representation of `i`
///   (MSB = first variable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<char>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Parses `input` and enumerates all `2^n` assignments in canonical order.
    ///
    /// ```rust
    /// use kmap_rs::table::TruthTable;
    ///
    /// let table = TruthTable::generate("P y Q").unwrap();
    /// assert_eq!(table.len(), 4);
    /// assert_eq!(table.results(), vec![false, false, false, true]);
    /// ```
    pub fn generate(input: &str) -> Result<Self, ParseError> {
        let expr = parser::parse(input)?;
        Self::from_expr(&expr)
    }

    /// Enumerates the truth table of an already-parsed expression.
    pub fn from_expr(expr: &Expr) -> Result<Self, ParseError> {
        let variables = expr.variables();
        let n = variables.len();
        debug!("generating truth table: {} variables, {} rows", n, 1usize << n);

        let mut rows = Vec::with_capacity(1 << n);
        for index in 0..(1usize << n) {
            let assignment = Assignment::from_bits(&variables, index);
            let value = expr.eval(&assignment)?;
            rows.push(Row { assignment, value });
        }

        Ok(Self { variables, rows })
    }

    /// The variables of the expression, sorted ascending.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of rows (`2^n`).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in canonical order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The result column in canonical order.
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.value).collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self
            .variables
            .iter()
            .map(char::to_string)
            .chain(std::iter::once("Result".to_string()))
            .collect();
        let header = header.join(" | ");
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.len()))?;

        for row in &self.rows {
            for (_var, value) in row.assignment.iter() {
                write!(f, "{} | ", value as u8)?;
            }
            writeln!(f, "  {}", row.value as u8)?;
        }
        Ok(())
    }
}
