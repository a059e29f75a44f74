//! Arms: a pattern tuple bound to a precomputed result.
//!
//! `when(pattern, result)` captures the result by value when the arm is
//! built. Evaluating an arm never computes anything beyond the comparisons;
//! if a result is expensive or has side effects, that happens once, before
//! any matching.

use pm_value::StrictEq;
use tracing::trace;

use crate::pattern::Pattern;

/// Outcome of evaluating one arm against one value tuple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchOutcome<R> {
    /// Every position matched; carries the arm's result.
    Positive(R),
    /// Arity differed or some position rejected its value.
    Negative,
}

impl<R> MatchOutcome<R> {
    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(self, MatchOutcome::Positive(_))
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        matches!(self, MatchOutcome::Negative)
    }

    /// The carried result, if positive.
    #[inline]
    pub fn positive(self) -> Option<R> {
        match self {
            MatchOutcome::Positive(result) => Some(result),
            MatchOutcome::Negative => None,
        }
    }

    pub fn as_ref(&self) -> MatchOutcome<&R> {
        match self {
            MatchOutcome::Positive(result) => MatchOutcome::Positive(result),
            MatchOutcome::Negative => MatchOutcome::Negative,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> MatchOutcome<U> {
        match self {
            MatchOutcome::Positive(result) => MatchOutcome::Positive(f(result)),
            MatchOutcome::Negative => MatchOutcome::Negative,
        }
    }
}

impl<R: Clone> MatchOutcome<&R> {
    pub fn cloned(self) -> MatchOutcome<R> {
        self.map(R::clone)
    }
}

impl<R> From<MatchOutcome<R>> for Option<R> {
    fn from(outcome: MatchOutcome<R>) -> Self {
        outcome.positive()
    }
}

/// One pattern tuple and the result it yields.
///
/// Stateless: an arm can be evaluated any number of times, against any
/// number of value tuples.
#[derive(Clone, Debug, PartialEq)]
pub struct Arm<V, R> {
    pattern: Pattern<V>,
    result: R,
}

/// Build an arm from a pattern and an already evaluated result.
pub fn when<V, R>(pattern: impl Into<Pattern<V>>, result: R) -> Arm<V, R> {
    Arm::new(pattern, result)
}

impl<V, R> Arm<V, R> {
    pub fn new(pattern: impl Into<Pattern<V>>, result: R) -> Self {
        Arm {
            pattern: pattern.into(),
            result,
        }
    }

    #[inline]
    pub fn pattern(&self) -> &Pattern<V> {
        &self.pattern
    }

    #[inline]
    pub fn result(&self) -> &R {
        &self.result
    }

    pub fn into_result(self) -> R {
        self.result
    }
}

impl<V: StrictEq, R> Arm<V, R> {
    /// Evaluate the arm against a value tuple.
    ///
    /// A tuple of the wrong length is `Negative`, never an error. Positions
    /// are checked in order and the first rejection stops the walk.
    pub fn evaluate(&self, values: &[V]) -> MatchOutcome<&R> {
        if values.len() != self.pattern.len() {
            trace!(
                expected = self.pattern.len(),
                got = values.len(),
                "arm rejected: arity mismatch"
            );
            return MatchOutcome::Negative;
        }

        if let Some(position) = self.pattern.first_mismatch(values) {
            trace!(position, "arm rejected: position mismatch");
            return MatchOutcome::Negative;
        }

        trace!(arity = values.len(), "arm matched");
        MatchOutcome::Positive(&self.result)
    }

    /// Structural match flag, without the result.
    #[inline]
    pub fn matches(&self, values: &[V]) -> bool {
        self.evaluate(values).is_positive()
    }
}
