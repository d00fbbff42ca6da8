//! Plain-text analysis reports.
//!
//! Bundles the whole pipeline — variables, truth table, Karnaugh map,
//! sum-of-products — into one formatted report for display wrappers (the CLI
//! binary, chiefly). The core stays pure: this module only formats values the
//! other modules computed.

use std::fmt::Write;

use crate::error::ParseError;
use crate::karnaugh;
use crate::minterms;
use crate::table::TruthTable;

const BANNER_WIDTH: usize = 70;

/// Runs the full analysis of `input` and formats it as a report.
///
/// Fails with [`ParseError`] when the expression is malformed. An unsupported
/// variable count is not an error here: the Karnaugh section then carries an
/// explanatory note instead of a grid, and the rest of the report is still
/// produced.
pub fn analyze(input: &str) -> Result<String, ParseError> {
    let table = TruthTable::generate(input)?;
    let results = table.results();
    let variables = table.variables();

    let mut out = String::new();
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH)).unwrap();
    writeln!(out, "BOOLEAN ALGEBRA ANALYSIS").unwrap();
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH)).unwrap();
    writeln!(out, "\nExpression: {}", input.trim()).unwrap();

    let names: Vec<String> = variables.iter().map(char::to_string).collect();
    writeln!(out, "\n1. VARIABLES: {}", names.join(", ")).unwrap();
    writeln!(
        out,
        "   Total: {} variable{}",
        table.num_variables(),
        if table.num_variables() == 1 { "" } else { "s" }
    )
    .unwrap();

    writeln!(out, "\n2. TRUTH TABLE:").unwrap();
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH)).unwrap();
    write!(out, "{}", table).unwrap();

    writeln!(out, "\n3. KARNAUGH MAP:").unwrap();
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH)).unwrap();
    match karnaugh::render(variables, &results) {
        Ok(map) => write!(out, "{}", map).unwrap(),
        Err(err) => writeln!(out, "{}", err).unwrap(),
    }

    writeln!(out, "\n4. SUM OF PRODUCTS (disjunctive normal form):").unwrap();
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH)).unwrap();
    writeln!(out, "   {}", minterms::sum_of_products(variables, &results)).unwrap();
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH)).unwrap();

    Ok(out)
}
