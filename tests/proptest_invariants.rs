
use proptest::prelude::*;
use segrule::{compile, FieldSchema, MatchStatus, Segmenter};
use strategies::{arb_rule_line, arb_rule_text, arb_store};

// ---------------------------------------------------------------------------
// Invariant 1: Determinism
//
// The same rule text against the same store always yields the same result.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn determinism(store in arb_store(), rules in arb_rule_text()) {
        let segmenter = Segmenter::new(FieldSchema::catalog(), store);
        let first = segmenter.evaluate(&rules).unwrap();
        for _ in 0..3 {
            let again = segmenter.evaluate(&rules).unwrap();
            prop_assert_eq!(&first, &again, "determinism violated for {:?}", rules);
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Idempotence
//
// Re-running a compiled predicate against an unchanged store is stable.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn idempotent_predicate(store in arb_store(), rules in arb_rule_text()) {
        let segmenter = Segmenter::new(FieldSchema::catalog(), store);
        let predicate = segmenter.compile(&rules).unwrap();
        let first = segmenter.evaluate_predicate(&predicate).unwrap();
        let second = segmenter.evaluate_predicate(&predicate).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Results are exactly the matching products, in store order
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn results_are_store_filtered_in_order(store in arb_store(), rules in arb_rule_text()) {
        let segmenter = Segmenter::new(FieldSchema::catalog(), store);
        let predicate = segmenter.compile(&rules).unwrap();
        let result = segmenter.evaluate_predicate(&predicate).unwrap();

        let expected: Vec<_> = segmenter
            .store()
            .products()
            .iter()
            .filter(|p| predicate.matches(p))
            .cloned()
            .collect();
        prop_assert_eq!(result.products(), expected.as_slice());
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Status agrees with the rule text and the result size
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn status_matches_outcome(store in arb_store(), rules in arb_rule_text()) {
        let total = store.len();
        let segmenter = Segmenter::new(FieldSchema::catalog(), store);
        let result = segmenter.evaluate(&rules).unwrap();

        match result.status() {
            MatchStatus::Unfiltered => {
                prop_assert!(rules.trim().is_empty());
                prop_assert_eq!(result.len(), total);
            }
            MatchStatus::Matched => {
                prop_assert!(!rules.trim().is_empty());
                prop_assert!(!result.is_empty());
            }
            MatchStatus::NoMatches => {
                prop_assert!(!rules.trim().is_empty());
                prop_assert!(result.is_empty());
            }
        }
    }

    #[test]
    fn blank_text_matches_everything(store in arb_store(), blank in "[ \t\r\n]{0,12}") {
        let total = store.len();
        let segmenter = Segmenter::new(FieldSchema::catalog(), store);
        let result = segmenter.evaluate(&blank).unwrap();
        prop_assert_eq!(result.status(), MatchStatus::Unfiltered);
        prop_assert_eq!(result.len(), total);
    }
}

// ---------------------------------------------------------------------------
// Invariant 5: A later rule on the same field replaces the earlier one
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn last_rule_per_field_wins(rules in arb_rule_text(), last in arb_rule_line()) {
        let schema = FieldSchema::catalog();
        let combined = compile(&format!("{rules}\n{last}"), &schema).unwrap();
        let alone = compile(&last, &schema).unwrap();

        let (field, clause) = alone.iter().next().unwrap();
        prop_assert_eq!(combined.clause(field), Some(clause));
    }
}
