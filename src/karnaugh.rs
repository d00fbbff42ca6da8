//! Karnaugh-map layout and rendering for 1 to 5 variables.
//!
//! The map places every truth-table row into a grid whose axes follow Gray
//! order, so that any two cells sharing an edge — including the wraparound
//! edge at each axis's ends — correspond to rows differing in exactly one
//! variable. That adjacency is what makes neighbouring cells combinable by
//! eye in the traditional method.
//!
//! The grid shapes per arity:
//!
//! | n | shape                                     |
//! |---|-------------------------------------------|
//! | 1 | single axis, 2 cells                      |
//! | 2 | 2×2                                       |
//! | 3 | 2×4                                       |
//! | 4 | 4×4                                       |
//! | 5 | two stacked 4×4 planes (first variable)   |
//!
//! [`layout`] is the contract: it yields the truth-table index occupying each
//! successive cell in row-major reading order, computed from Gray codes per
//! axis. [`render`] is presentation on top of it; borders and headers may
//! change, the index-to-cell mapping may not.

use std::fmt::Write;

use crate::error::UnsupportedArity;
use crate::gray;

/// Axis split for each supported arity: bits assigned to planes, rows, and
/// columns, most significant first.
fn axes(n: usize) -> Result<(usize, usize, usize), UnsupportedArity> {
    match n {
        1 => Ok((0, 1, 0)),
        2 => Ok((0, 1, 1)),
        3 => Ok((0, 1, 2)),
        4 => Ok((0, 2, 2)),
        5 => Ok((1, 2, 2)),
        _ => Err(UnsupportedArity(n)),
    }
}

/// The row-major permutation of truth-table indices for an `n`-variable map.
///
/// Cell `k` of the flattened grid holds the value of truth-table row
/// `layout(n)[k]`. Planes iterate in binary order, rows and columns in Gray
/// order; a 1-bit axis degenerates to binary order, which is why the n=2 map
/// is the identity.
///
/// ```rust
/// use kmap_rs::karnaugh::layout;
///
/// assert_eq!(layout(3).unwrap(), vec![0, 1, 3, 2, 4, 5, 7, 6]);
/// ```
pub fn layout(n: usize) -> Result<Vec<usize>, UnsupportedArity> {
    let (plane_bits, row_bits, col_bits) = axes(n)?;

    let mut order = Vec::with_capacity(1 << n);
    for plane in 0..1usize << plane_bits {
        for row in 0..1usize << row_bits {
            for col in 0..1usize << col_bits {
                let index = (plane << (row_bits + col_bits))
                    | (gray::to_gray(row) << col_bits)
                    | gray::to_gray(col);
                order.push(index);
            }
        }
    }
    Ok(order)
}

/// Renders the map as a text grid.
///
/// `results` must be the truth-table result column in canonical order, of
/// length `2^n` for `n = variables.len()`. Fails with [`UnsupportedArity`]
/// for `n = 0` or `n > 5`.
///
/// # Panics
///
/// Panics if `results.len() != 2^n` (a caller bug, not an input error).
pub fn render(variables: &[char], results: &[bool]) -> Result<String, UnsupportedArity> {
    let n = variables.len();
    let (plane_bits, row_bits, col_bits) = axes(n)?;
    assert_eq!(
        results.len(),
        1usize << n,
        "expected {} results for {} variables, got {}",
        1usize << n,
        n,
        results.len()
    );

    let order = layout(n)?;
    let mut out = String::new();
    writeln!(
        out,
        "Karnaugh map ({} variable{}):",
        n,
        if n == 1 { "" } else { "s" }
    )
    .unwrap();

    if n == 1 {
        // Single axis: one cell per value of the only variable.
        writeln!(out, "     {}", variables[0]).unwrap();
        for (cell, &index) in order.iter().enumerate() {
            writeln!(out, "  {} │ {}", cell, results[index] as u8).unwrap();
        }
        return Ok(out);
    }

    let row_vars: String = variables[plane_bits..plane_bits + row_bits].iter().collect();
    let col_vars: String = variables[plane_bits + row_bits..].iter().collect();
    let row_labels = gray::labels(row_bits);
    let col_labels = gray::labels(col_bits);

    let cols = col_labels.len();
    let cells_width = cols * (col_bits + 1) - 1;
    let cells_per_plane = row_labels.len() * cols;

    for plane in 0..1usize << plane_bits {
        if plane_bits > 0 {
            writeln!(out, "\n{}={}", variables[0], plane).unwrap();
        }

        // Column headers.
        writeln!(out, "{}{}", " ".repeat(row_bits + 5), col_vars).unwrap();
        let labels_line: Vec<&str> = col_labels.iter().map(String::as_str).collect();
        writeln!(
            out,
            "{}{}",
            " ".repeat(row_bits + 5),
            labels_line.join(" ")
        )
        .unwrap();

        // Grid body.
        writeln!(
            out,
            "  {} ┌{}┐",
            row_vars,
            "─".repeat(cells_width + 2)
        )
        .unwrap();
        for (r, row_label) in row_labels.iter().enumerate() {
            let cells: Vec<String> = (0..cols)
                .map(|c| {
                    let index = order[plane * cells_per_plane + r * cols + c];
                    format!("{:>width$}", results[index] as u8, width = col_bits)
                })
                .collect();
            writeln!(out, "  {} │ {} │", row_label, cells.join(" ")).unwrap();
        }
        writeln!(
            out,
            "  {} └{}┘",
            " ".repeat(row_bits),
            "─".repeat(cells_width + 2)
        )
        .unwrap();
    }

    Ok(out)
}
