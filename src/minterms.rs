//! Sum-of-products listing of a truth table's true rows.
//!
//! Each true row becomes one conjunction term over *all* variables (the
//! variable itself where its bit is 1, its negation where 0), and the terms
//! are joined with `v`. The output is a true but non-minimal sum of products:
//! nothing here merges or absorbs adjacent terms, so this is a minterm
//! listing, not boolean minimization — a minimal cover would take
//! prime-implicant generation and selection, which is out of scope.

/// Terms beyond this count are elided in the rendered listing.
const MAX_DISPLAYED_TERMS: usize = 6;

/// The truth-table indices of the true rows.
pub fn minterm_indices(results: &[bool]) -> Vec<usize> {
    results
        .iter()
        .enumerate()
        .filter(|(_, &value)| value)
        .map(|(index, _)| index)
        .collect()
}

/// Renders the sum of products for the given result column.
///
/// Returns `"0"` when no row is true and `"1"` when every row is true.
/// Otherwise one parenthesized conjunction term per true row, joined with
/// ` v `. Listings longer than six terms elide the middle but state the
/// total count; that is a display concession, not minimization.
///
/// ```rust
/// use kmap_rs::minterms::sum_of_products;
///
/// // P y Q: only row 3 (P=1, Q=1) is true.
/// assert_eq!(sum_of_products(&['P', 'Q'], &[false, false, false, true]), "(P y Q)");
/// ```
pub fn sum_of_products(variables: &[char], results: &[bool]) -> String {
    let minterms = minterm_indices(results);

    if minterms.is_empty() {
        return "0".to_string();
    }
    if minterms.len() == results.len() {
        return "1".to_string();
    }

    let terms: Vec<String> = minterms
        .iter()
        .map(|&minterm| term(variables, minterm))
        .collect();

    if terms.len() <= MAX_DISPLAYED_TERMS {
        terms.join(" v ")
    } else {
        format!(
            "{} v ... v {} [{} terms]",
            terms[0],
            terms[terms.len() - 1],
            terms.len()
        )
    }
}

/// The conjunction term for one minterm: every variable appears, negated
/// where the row's bit (canonical order, MSB = first variable) is 0.
fn term(variables: &[char], minterm: usize) -> String {
    let n = variables.len();
    let literals: Vec<String> = variables
        .iter()
        .enumerate()
        .map(|(k, &var)| {
            if (minterm >> (n - 1 - k)) & 1 == 1 {
                var.to_string()
            } else {
                format!("~{}", var)
            }
        })
        .collect();
    format!("({})", literals.join(" y "))
}
