//! Property-based tests for arm evaluation and dispatch.
//!
//! These tests use proptest to generate random value tuples, patterns and
//! arm lists, and check the matcher against a direct restatement of the
//! rules:
//! 1. Arity mismatch is always negative
//! 2. Literal tuples match exactly their own values
//! 3. Wildcards admit anything; `either`/`neither` are membership and its negation
//! 4. Dispatch picks the first positive arm with a truthy result

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pm_match::{
    either, match_on, match_on_with, neither, when, Arm, MatchOutcome, Pattern, PatternElem,
    Selection, Truthy,
};
use proptest::prelude::*;

// -- Strategies --

/// Small value domain so collisions between patterns and values are common.
fn value_strategy() -> impl Strategy<Value = i8> {
    -4i8..4
}

fn tuple_strategy() -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec(value_strategy(), 0..6)
}

fn elem_strategy() -> impl Strategy<Value = PatternElem<i8>> {
    prop_oneof![
        Just(PatternElem::Wildcard),
        value_strategy().prop_map(PatternElem::Literal),
        prop::collection::vec(value_strategy(), 0..4).prop_map(|xs| PatternElem::from(either(xs))),
        prop::collection::vec(value_strategy(), 0..4).prop_map(|xs| PatternElem::from(neither(xs))),
    ]
}

fn pattern_strategy() -> impl Strategy<Value = Vec<PatternElem<i8>>> {
    prop::collection::vec(elem_strategy(), 0..6)
}

/// Reference model of one position.
fn admits(elem: &PatternElem<i8>, value: i8) -> bool {
    match elem {
        PatternElem::Wildcard => true,
        PatternElem::Literal(lit) => *lit == value,
        PatternElem::Set(op) => {
            let member = op.elements().contains(&value);
            match op.operator() {
                pm_match::Operator::Either => member,
                pm_match::Operator::Neither => !member,
            }
        }
    }
}

proptest! {
    #[test]
    fn arity_mismatch_is_negative(pattern in pattern_strategy(), values in tuple_strategy()) {
        prop_assume!(pattern.len() != values.len());
        let arm = when(pattern, ());
        prop_assert_eq!(arm.evaluate(&values), MatchOutcome::Negative);
    }

    #[test]
    fn literal_tuple_matches_itself(values in tuple_strategy()) {
        let arm = when(Pattern::new(values.iter().copied().map(PatternElem::Literal)), "r");
        prop_assert_eq!(arm.evaluate(&values), MatchOutcome::Positive(&"r"));
    }

    #[test]
    fn literal_tuple_rejects_any_changed_position(
        values in prop::collection::vec(value_strategy(), 1..6),
        index in any::<prop::sample::Index>(),
    ) {
        let i = index.index(values.len());
        let mut changed = values.clone();
        changed[i] = changed[i].wrapping_add(1);
        let arm = when(Pattern::new(values.into_iter().map(PatternElem::Literal)), "r");
        prop_assert!(arm.evaluate(&changed).is_negative());
    }

    #[test]
    fn wildcard_position_admits_anything(
        values in prop::collection::vec(value_strategy(), 1..6),
        index in any::<prop::sample::Index>(),
        replacement in any::<i8>(),
    ) {
        let i = index.index(values.len());
        let mut elems: Vec<_> = values.iter().copied().map(PatternElem::Literal).collect();
        elems[i] = PatternElem::Wildcard;
        let arm = when(elems, 1);

        let mut probed = values.clone();
        probed[i] = replacement;
        prop_assert!(arm.matches(&probed));
    }

    #[test]
    fn either_is_membership(set in prop::collection::vec(value_strategy(), 0..5), value in value_strategy()) {
        let arm = when([PatternElem::from(either(set.clone()))], 1);
        prop_assert_eq!(arm.matches(&[value]), set.contains(&value));
    }

    #[test]
    fn neither_is_non_membership(set in prop::collection::vec(value_strategy(), 0..5), value in value_strategy()) {
        let arm = when([PatternElem::from(neither(set.clone()))], 1);
        prop_assert_eq!(arm.matches(&[value]), !set.contains(&value));
    }

    #[test]
    fn empty_sets(value in any::<i8>()) {
        prop_assert!(!when([PatternElem::from(either(Vec::new()))], 1).matches(&[value]));
        prop_assert!(when([PatternElem::from(neither(Vec::new()))], 1).matches(&[value]));
    }

    #[test]
    fn evaluate_agrees_with_model(pattern in pattern_strategy(), values in tuple_strategy()) {
        let expected = pattern.len() == values.len()
            && pattern.iter().zip(&values).all(|(elem, value)| admits(elem, *value));
        let arm = when(pattern, 1);
        prop_assert_eq!(arm.matches(&values), expected);
    }

    #[test]
    fn dispatch_picks_first_truthy_positive(
        arms in prop::collection::vec((pattern_strategy(), 0u8..3), 0..6),
        values in tuple_strategy(),
    ) {
        let arms: Vec<Arm<i8, u8>> = arms
            .into_iter()
            .map(|(pattern, result)| when(pattern, result))
            .collect();

        let expected = arms
            .iter()
            .find(|arm| arm.matches(&values) && arm.result().is_truthy())
            .map(Arm::result);
        prop_assert_eq!(match_on(&values).select(&arms), expected);

        let expected_positive = arms.iter().find(|arm| arm.matches(&values)).map(Arm::result);
        prop_assert_eq!(
            match_on_with(&values, Selection::Positive).select(&arms),
            expected_positive
        );
        prop_assert_eq!(match_on(&values).select_positive(&arms), expected_positive);
    }
}
