//! End-to-end tests for the boolean-algebra engine.
//!
//! Covers the extractor, evaluator, truth-table generator, Karnaugh layout,
//! and minterm lister working together on whole expressions.

use kmap_rs::error::{ParseError, UnsupportedArity};
use kmap_rs::eval::{evaluate, Assignment};
use kmap_rs::karnaugh;
use kmap_rs::minterms::sum_of_products;
use kmap_rs::parser::extract_variables;
use kmap_rs::table::TruthTable;

// ─── Extraction ────────────────────────────────────────────────────────────────

#[test]
fn extractor_sorts_and_dedups() {
    assert_eq!(
        extract_variables("(P y Q) v (~S <--> T)"),
        vec!['P', 'Q', 'S', 'T']
    );
    assert_eq!(extract_variables("B y A v B"), vec!['A', 'B']);
}

#[test]
fn extractor_skips_reserved_operator_letters() {
    let vars = extract_variables("a y b v c y v");
    assert!(!vars.contains(&'y'));
    assert!(!vars.contains(&'v'));
    assert_eq!(vars, vec!['a', 'b', 'c']);
}

// ─── Evaluation ────────────────────────────────────────────────────────────────

#[test]
fn evaluation_matches_connective_semantics() {
    for a in [false, true] {
        for b in [false, true] {
            let values: Assignment = [('P', a), ('Q', b)].into_iter().collect();
            assert_eq!(evaluate("P y Q", &values), Ok(a && b));
            assert_eq!(evaluate("P v Q", &values), Ok(a || b));
            assert_eq!(evaluate("P --> Q", &values), Ok(!a || b));
            assert_eq!(evaluate("P <--> Q", &values), Ok(a == b));
        }
    }
}

#[test]
fn negation() {
    let t: Assignment = [('P', true)].into_iter().collect();
    let f: Assignment = [('P', false)].into_iter().collect();
    assert_eq!(evaluate("~P", &t), Ok(false));
    assert_eq!(evaluate("~P", &f), Ok(true));
}

#[test]
fn malformed_expressions_are_rejected() {
    let values: Assignment = [('P', true), ('Q', true)].into_iter().collect();
    assert!(matches!(
        evaluate("P Q", &values),
        Err(ParseError::TrailingInput { .. })
    ));
    assert!(matches!(
        evaluate("(P y Q", &values),
        Err(ParseError::MissingClosingParen)
    ));
    assert!(matches!(
        evaluate("P ! Q", &values),
        Err(ParseError::UnexpectedChar { ch: '!', pos: 1 })
    ));
}

#[test]
fn whitespace_falls_anywhere_including_inside_arrows() {
    for p in [false, true] {
        for q in [false, true] {
            let values: Assignment = [('P', p), ('Q', q)].into_iter().collect();
            assert_eq!(evaluate("P -- > Q", &values), evaluate("P --> Q", &values));
            assert_eq!(
                evaluate("P < -- > Q", &values),
                evaluate("P <--> Q", &values)
            );
        }
    }
}

#[test]
fn unbound_variable_is_surfaced_not_defaulted() {
    let values: Assignment = [('P', false)].into_iter().collect();
    assert_eq!(
        evaluate("P y Q", &values),
        Err(ParseError::UnboundVariable('Q'))
    );
}

// ─── Truth tables ──────────────────────────────────────────────────────────────

#[test]
fn table_has_a_row_per_assignment() {
    let expressions = [
        "P",
        "P y Q",
        "(P y Q) v R",
        "(P y Q) v (R y S)",
        "(P y Q) v (R y S) v T",
    ];
    for (n, input) in (1usize..=5).zip(expressions) {
        let table = TruthTable::generate(input).unwrap();
        assert_eq!(table.len(), 1 << n, "{:?}", input);

        // Every assignment distinct, every row's bits equal its index.
        for (index, row) in table.rows().iter().enumerate() {
            for (k, &var) in table.variables().iter().enumerate() {
                let bit = (index >> (n - 1 - k)) & 1 == 1;
                assert_eq!(row.assignment.get(var), Some(bit));
            }
        }
    }
}

#[test]
fn conjunction_table_in_canonical_order() {
    let table = TruthTable::generate("P y Q").unwrap();
    assert_eq!(table.results(), vec![false, false, false, true]);
}

// ─── Karnaugh maps ─────────────────────────────────────────────────────────────

#[test]
fn layout_permutations_are_exact() {
    assert_eq!(karnaugh::layout(1).unwrap(), vec![0, 1]);
    assert_eq!(karnaugh::layout(2).unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(karnaugh::layout(3).unwrap(), vec![0, 1, 3, 2, 4, 5, 7, 6]);
    assert_eq!(
        karnaugh::layout(4).unwrap(),
        vec![0, 1, 3, 2, 4, 5, 7, 6, 12, 13, 15, 14, 8, 9, 11, 10]
    );
    let lower = [0, 1, 3, 2, 4, 5, 7, 6, 12, 13, 15, 14, 8, 9, 11, 10];
    let upper: Vec<usize> = lower.iter().map(|&i| i + 16).collect();
    let expected: Vec<usize> = lower.iter().copied().chain(upper).collect();
    assert_eq!(karnaugh::layout(5).unwrap(), expected);
}

#[test]
fn implication_map_uses_identity_placement_for_two_variables() {
    let table = TruthTable::generate("P --> Q").unwrap();
    let results = table.results();
    assert_eq!(results, vec![true, true, false, true]);

    // The n=2 permutation is the identity: cell (1,0) holds index 2.
    let text = karnaugh::render(table.variables(), &results).unwrap();
    let rows: Vec<&str> = text.lines().filter(|line| line.contains('│')).collect();
    assert!(rows[0].contains("1 1"));
    assert!(rows[1].contains("0 1"));
}

#[test]
fn three_variable_flattened_reading_order() {
    // results indexed 0..8; reading order picks [0,1,3,2,4,5,7,6].
    let results = [false, true, false, true, true, false, true, false];
    let order = karnaugh::layout(3).unwrap();
    let flattened: Vec<bool> = order.iter().map(|&i| results[i]).collect();
    assert_eq!(
        flattened,
        vec![false, true, true, false, true, false, false, true]
    );
}

#[test]
fn arity_outside_one_to_five_is_rejected() {
    assert_eq!(karnaugh::layout(0).unwrap_err(), UnsupportedArity(0));
    assert_eq!(karnaugh::layout(6).unwrap_err(), UnsupportedArity(6));

    let six_vars = TruthTable::generate("A v B v C v D v E v F").unwrap();
    assert_eq!(
        karnaugh::render(six_vars.variables(), &six_vars.results()).unwrap_err(),
        UnsupportedArity(6)
    );
}

// ─── Minterm listing ───────────────────────────────────────────────────────────

#[test]
fn contradiction_and_tautology_render_as_constants() {
    let table = TruthTable::generate("P y ~P").unwrap();
    assert_eq!(sum_of_products(table.variables(), &table.results()), "0");

    let table = TruthTable::generate("P v ~P").unwrap();
    assert_eq!(sum_of_products(table.variables(), &table.results()), "1");
}

#[test]
fn listing_reproduces_the_original_function() {
    // The SOP is itself a valid expression; its table must match the source's.
    for input in ["P --> Q", "P <--> Q", "~A v (B y C)"] {
        let table = TruthTable::generate(input).unwrap();
        let sop = sum_of_products(table.variables(), &table.results());
        let round_trip = TruthTable::generate(&sop).unwrap();
        assert_eq!(round_trip.results(), table.results(), "{:?}", input);
    }
}

#[test]
fn long_listings_are_elided_with_a_count() {
    let table = TruthTable::generate("A v B v C").unwrap();
    let sop = sum_of_products(table.variables(), &table.results());
    assert!(sop.ends_with("[7 terms]"), "got {:?}", sop);
    assert!(sop.contains(" v ... v "));
}
