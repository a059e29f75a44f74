//! First-match dispatch over an ordered arm list.
//!
//! `match_on(values)` fixes the value tuple; `Dispatcher::select(arms)`
//! evaluates every arm against it, then returns the result of the first
//! qualifying arm. All arms are evaluated before selection, so evaluation
//! order never depends on which arm wins.
//!
//! # Selection Policy
//!
//! Which positive outcomes qualify is configurable:
//!
//! | Policy               | Qualifies when                          |
//! |----------------------|-----------------------------------------|
//! | `Selection::Truthy`  | positive and the result is truthy       |
//! | `Selection::Positive`| positive                                |
//!
//! `Truthy` is the default and is what callers of the combinator form
//! expect: an arm whose result is `0`, `""`, `false` or `null` is passed
//! over as if it had not matched.

use pm_value::{StrictEq, Truthy};
use tracing::debug;

use crate::arm::{Arm, MatchOutcome};
use crate::errors::{MatchError, MatchResult};

/// Which positive outcomes the dispatcher may select.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Positive outcomes with a truthy result.
    #[default]
    Truthy,
    /// Every positive outcome, whatever its result.
    Positive,
}

/// A value tuple waiting for its arm list.
#[derive(Debug)]
pub struct Dispatcher<'v, V> {
    values: &'v [V],
    selection: Selection,
}

// Manual impls: the dispatcher only borrows values, so `V: Copy` is not needed.
impl<V> Clone for Dispatcher<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Dispatcher<'_, V> {}

/// Start a dispatch over `values` with the default selection policy.
pub fn match_on<V>(values: &[V]) -> Dispatcher<'_, V> {
    Dispatcher::new(values)
}

/// Start a dispatch over `values` with an explicit selection policy.
pub fn match_on_with<V>(values: &[V], selection: Selection) -> Dispatcher<'_, V> {
    Dispatcher::new(values).with_selection(selection)
}

impl<'v, V> Dispatcher<'v, V> {
    pub fn new(values: &'v [V]) -> Self {
        Dispatcher {
            values,
            selection: Selection::default(),
        }
    }

    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    #[inline]
    pub fn values(&self) -> &'v [V] {
        self.values
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }
}

impl<V: StrictEq> Dispatcher<'_, V> {
    /// Evaluate every arm, in order, and collect the outcomes.
    pub fn outcomes<'a, R>(&self, arms: &'a [Arm<V, R>]) -> Vec<MatchOutcome<&'a R>> {
        arms.iter().map(|arm| arm.evaluate(self.values)).collect()
    }

    /// First positive arm's result, ignoring truthiness.
    ///
    /// Same as `select` under `Selection::Positive`, but without a
    /// `Truthy` bound on the result type.
    pub fn select_positive<'a, R>(&self, arms: &'a [Arm<V, R>]) -> Option<&'a R> {
        let outcomes = self.outcomes(arms);
        let selected = outcomes
            .into_iter()
            .enumerate()
            .find_map(|(index, outcome)| outcome.positive().map(|result| (index, result)));
        self.report(arms.len(), selected)
    }

    /// Select the result of the first qualifying arm, or `None`.
    pub fn select<'a, R: Truthy>(&self, arms: &'a [Arm<V, R>]) -> Option<&'a R> {
        let outcomes = self.outcomes(arms);
        let selection = self.selection;
        let selected = outcomes
            .into_iter()
            .enumerate()
            .find_map(|(index, outcome)| match outcome {
                MatchOutcome::Positive(result) if selection == Selection::Positive => {
                    Some((index, result))
                }
                MatchOutcome::Positive(result) if result.is_truthy() => Some((index, result)),
                MatchOutcome::Positive(_) => {
                    debug!(arm = index, "skipping matched arm with falsy result");
                    None
                }
                MatchOutcome::Negative => None,
            });
        self.report(arms.len(), selected)
    }

    /// Like `select`, but a dispatch where no arm qualifies is an error.
    pub fn select_or_err<'a, R: Truthy>(&self, arms: &'a [Arm<V, R>]) -> MatchResult<&'a R> {
        self.select(arms).ok_or(MatchError::NoArmMatched {
            arity: self.values.len(),
            arms: arms.len(),
        })
    }

    fn report<'a, R>(&self, arms: usize, selected: Option<(usize, &'a R)>) -> Option<&'a R> {
        match selected {
            Some((index, result)) => {
                debug!(arm = index, arms, arity = self.values.len(), "arm selected");
                Some(result)
            }
            None => {
                debug!(arms, arity = self.values.len(), "no arm selected");
                None
            }
        }
    }
}
