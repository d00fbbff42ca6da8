//! # kmap-rs: Boolean expression evaluation and Karnaugh maps in Rust
//!
//! **`kmap-rs`** parses a small propositional-logic notation, derives complete
//! truth tables, renders Karnaugh-map grids for 1 to 5 variables, and lists
//! the sum of products of the true rows.
//!
//! ## The notation
//!
//! Variables are single letters; the connectives, tightest binding first, are
//! `~` (NOT), `y` (AND), `v` (OR), `-->` (implication), and `<-->`
//! (biconditional). Parentheses override precedence and whitespace is
//! insignificant. The lowercase letters `y` and `v` are reserved operator
//! words and can never name a variable.
//!
//! ## Key properties
//!
//! - **Grammar-driven evaluation**: expressions are parsed by a
//!   recursive-descent parser into an AST and evaluated directly — caller
//!   text is never rewritten into executable code.
//! - **Canonical truth tables**: row `i`'s assignment is the n-bit binary
//!   representation of `i` with the alphabetically-first variable as the most
//!   significant bit, so tables are deterministic and exhaustive.
//! - **Gray-code adjacency**: Karnaugh axes are sequenced by a computed Gray
//!   code, so grid neighbours (including wraparound) always differ in exactly
//!   one variable.
//! - **Honest simplification**: the minterm lister produces a true but
//!   non-minimal sum of products; it never merges terms and does not claim to.
//! - **Pure and synchronous**: every operation is a pure function of its
//!   arguments; nothing retains state between calls and nothing does I/O.
//!
//! ## Basic Usage
//!
//! ```rust
//! use kmap_rs::karnaugh;
//! use kmap_rs::minterms;
//! use kmap_rs::table::TruthTable;
//!
//! // 1. Derive the truth table (canonical binary order).
//! let table = TruthTable::generate("(P y Q) v ~Q").unwrap();
//! assert_eq!(table.len(), 4);
//!
//! // 2. Render the Karnaugh map.
//! let results = table.results();
//! let map = karnaugh::render(table.variables(), &results).unwrap();
//! assert!(map.contains("Karnaugh map (2 variables):"));
//!
//! // 3. List the sum of products of the true rows.
//! let sop = minterms::sum_of_products(table.variables(), &results);
//! assert_eq!(sop, "(~P y ~Q) v (P y ~Q) v (P y Q)");
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: tokenizer, recursive-descent parser, and the lexical
//!   variable extractor.
//! - **[`eval`]**: assignments and expression evaluation.
//! - **[`table`]**: canonical truth-table generation.
//! - **[`karnaugh`]**: Gray-code grid layout and rendering.
//! - **[`minterms`]**: sum-of-products listing.
//! - **[`report`]**: the formatted all-in-one analysis used by the CLI.

pub mod error;
pub mod eval;
pub mod expr;
pub mod gray;
pub mod karnaugh;
pub mod minterms;
pub mod parser;
pub mod report;
pub mod table;
