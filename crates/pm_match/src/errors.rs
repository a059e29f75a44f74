//! Error types for the matcher.
//!
//! Matching itself never fails: arity and comparison mismatches are
//! `MatchOutcome::Negative`. Errors come only from the fallible edges,
//! parsing an operator tag and demanding that some arm qualifies.

use thiserror::Error;

/// Result alias for fallible matcher operations.
pub type MatchResult<T> = Result<T, MatchError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// An operator tag other than `either` or `neither`.
    #[error("unknown set operator `{tag}` (expected `either` or `neither`)")]
    UnknownOperator { tag: String },

    /// No arm qualified for the value tuple.
    #[error("non-exhaustive match: none of {arms} arm(s) matched a {arity}-tuple")]
    NoArmMatched { arity: usize, arms: usize },
}

impl MatchError {
    pub(crate) fn unknown_operator(tag: impl Into<String>) -> Self {
        MatchError::UnknownOperator { tag: tag.into() }
    }
}
