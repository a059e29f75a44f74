//! Set-membership operators.
//!
//! An `Operation` is a pattern element that matches by membership in a list
//! of candidates instead of by equality with one literal. `either` admits a
//! value equal to at least one candidate, `neither` admits a value equal to
//! none of them. Candidates compare with the same `StrictEq` rule literals use.

use std::fmt;
use std::str::FromStr;

use pm_value::StrictEq;

use crate::errors::{MatchError, MatchResult};

/// Set operator tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Value must equal at least one element.
    Either,
    /// Value must equal none of the elements.
    Neither,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Either => "either",
            Operator::Neither => "neither",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = MatchError;

    fn from_str(tag: &str) -> MatchResult<Self> {
        match tag {
            "either" => Ok(Operator::Either),
            "neither" => Ok(Operator::Neither),
            _ => Err(MatchError::unknown_operator(tag)),
        }
    }
}

/// Set-membership descriptor: an operator plus its ordered candidates.
///
/// Immutable once built. Elements keep the order they were given in;
/// nothing is deduplicated or sorted. An empty element list is valid:
/// `either()` admits nothing and `neither()` admits everything.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation<V> {
    operator: Operator,
    elements: Vec<V>,
}

impl<V> Operation<V> {
    pub fn new(operator: Operator, elements: impl IntoIterator<Item = V>) -> Self {
        Operation {
            operator,
            elements: elements.into_iter().collect(),
        }
    }

    /// Build a descriptor from a textual operator tag.
    ///
    /// Unrecognized tags are rejected here, so a malformed descriptor never
    /// reaches the matcher.
    pub fn from_tag(tag: &str, elements: impl IntoIterator<Item = V>) -> MatchResult<Self> {
        let operator = tag.parse()?;
        Ok(Operation::new(operator, elements))
    }

    #[inline]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[inline]
    pub fn elements(&self) -> &[V] {
        &self.elements
    }
}

impl<V: StrictEq> Operation<V> {
    /// True if some element is strictly equal to `value`.
    pub fn contains(&self, value: &V) -> bool {
        self.elements.iter().any(|element| element.strict_eq(value))
    }

    /// True if `value` satisfies the operator.
    pub fn admits(&self, value: &V) -> bool {
        match self.operator {
            Operator::Either => self.contains(value),
            Operator::Neither => !self.contains(value),
        }
    }
}

/// Descriptor matching a value equal to at least one of `elements`.
pub fn either<V>(elements: impl IntoIterator<Item = V>) -> Operation<V> {
    Operation::new(Operator::Either, elements)
}

/// Descriptor matching a value equal to none of `elements`.
pub fn neither<V>(elements: impl IntoIterator<Item = V>) -> Operation<V> {
    Operation::new(Operator::Neither, elements)
}
