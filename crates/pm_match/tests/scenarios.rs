//! End-to-end scenarios for the combinator surface.
//!
//! Values and results are dynamic `Value`s here, so a single dispatch can
//! mix result kinds the way untyped callers do.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pm_match::{match_on, match_on_with, pattern, when, MatchOutcome, Selection, Value};
use pretty_assertions::assert_eq;

fn s(text: &str) -> Value {
    Value::string(text)
}

fn i(n: i64) -> Value {
    Value::int(n)
}

#[test]
fn literal_tuple() {
    let arm = when(pattern![i(1), i(2), i(3)], s("R"));
    assert_eq!(arm.evaluate(&[i(1), i(2), i(3)]), MatchOutcome::Positive(&s("R")));
}

#[test]
fn wildcard_tuple() {
    let arm = when(pattern![_], s("R"));
    assert_eq!(arm.evaluate(&[s("anything")]), MatchOutcome::Positive(&s("R")));
}

#[test]
fn either_scenario() {
    let arm = when(pattern![either(i(1), i(2))], s("R"));
    assert_eq!(arm.evaluate(&[i(2)]), MatchOutcome::Positive(&s("R")));
    assert_eq!(arm.evaluate(&[i(3)]), MatchOutcome::Negative);
}

#[test]
fn neither_scenario() {
    let arm = when(pattern![neither(i(1), i(2))], s("R"));
    assert_eq!(arm.evaluate(&[i(3)]), MatchOutcome::Positive(&s("R")));
    assert_eq!(arm.evaluate(&[i(1)]), MatchOutcome::Negative);
}

#[test]
fn falsy_first_arm_falls_through() {
    let arms = [when(pattern![_], i(0)), when(pattern![_], s("fallback"))];
    assert_eq!(match_on(&[s("x")]).select(&arms), Some(&s("fallback")));
}

#[test]
fn first_of_two_identical_arms() {
    let arms = [when(pattern![i(1), i(2)], s("A")), when(pattern![i(1), i(2)], s("B"))];
    assert_eq!(match_on(&[i(1), i(2)]).select(&arms), Some(&s("A")));
}

#[test]
fn http_router() {
    let routes = [
        when(pattern![s("GET"), s("/")], s("home")),
        when(pattern![either(s("GET"), s("HEAD")), s("/health")], s("ok")),
        when(pattern![neither(s("GET"), s("HEAD")), _], s("method not allowed")),
        when(pattern![_, _], s("not found")),
    ];

    let route = |method: &str, path: &str| match_on(&[s(method), s(path)]).select(&routes).cloned();

    assert_eq!(route("GET", "/"), Some(s("home")));
    assert_eq!(route("HEAD", "/health"), Some(s("ok")));
    assert_eq!(route("DELETE", "/"), Some(s("method not allowed")));
    assert_eq!(route("GET", "/missing"), Some(s("not found")));
}

#[test]
fn objects_match_by_identity() {
    let admin = Value::object([("role", s("admin"))]);
    let arms = [
        when(pattern![admin.clone()], s("the admin")),
        when(pattern![_], s("someone")),
    ];

    assert_eq!(match_on(&[admin.clone()]).select(&arms), Some(&s("the admin")));
    let lookalike = Value::object([("role", s("admin"))]);
    assert_eq!(match_on(&[lookalike]).select(&arms), Some(&s("someone")));
}

#[test]
fn positive_policy_selects_falsy_results() {
    let arms = [when(pattern![_], Value::Bool(false)), when(pattern![_], Value::Bool(true))];
    assert_eq!(match_on(&[Value::Null]).select(&arms), Some(&Value::Bool(true)));
    assert_eq!(
        match_on_with(&[Value::Null], Selection::Positive).select(&arms),
        Some(&Value::Bool(false))
    );
}

#[test]
fn plain_rust_tuples() {
    let fizzbuzz = |n: u32| {
        let arms = [
            when(pattern![0, 0], "FizzBuzz"),
            when(pattern![0, _], "Fizz"),
            when(pattern![_, 0], "Buzz"),
        ];
        match_on(&[n % 3, n % 5]).select(&arms).copied()
    };

    assert_eq!(fizzbuzz(15), Some("FizzBuzz"));
    assert_eq!(fizzbuzz(9), Some("Fizz"));
    assert_eq!(fizzbuzz(10), Some("Buzz"));
    assert_eq!(fizzbuzz(7), None);
}
