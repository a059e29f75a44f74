//! Pattern elements and pattern tuples.
//!
//! A pattern tuple is a fixed-length sequence of elements, each of which is
//! a wildcard, a literal, or a set-membership `Operation`. The three cases
//! are variants of one enum, so a literal can never be mistaken for an
//! operator or for the wildcard no matter what it contains.

use std::fmt;

use pm_value::StrictEq;
use smallvec::SmallVec;

use crate::operator::Operation;

/// Inline capacity for pattern tuples. Longer patterns spill to the heap.
const INLINE_ARITY: usize = 4;

/// One position of a pattern tuple.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternElem<V> {
    /// Matches any value. Written `_` inside `pattern!`.
    Wildcard,
    /// Matches a value strictly equal to the literal.
    Literal(V),
    /// Matches by set membership.
    Set(Operation<V>),
}

impl<V> PatternElem<V> {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, PatternElem::Wildcard)
    }
}

impl<V: StrictEq> PatternElem<V> {
    /// Test one value against this element.
    pub fn admits(&self, value: &V) -> bool {
        match self {
            PatternElem::Wildcard => true,
            PatternElem::Set(op) => op.admits(value),
            PatternElem::Literal(lit) => lit.strict_eq(value),
        }
    }
}

impl<V> From<Operation<V>> for PatternElem<V> {
    fn from(op: Operation<V>) -> Self {
        PatternElem::Set(op)
    }
}

impl<V: fmt::Display> fmt::Display for PatternElem<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternElem::Wildcard => f.write_str("_"),
            PatternElem::Literal(lit) => write!(f, "{lit}"),
            PatternElem::Set(op) => {
                write!(f, "{}(", op.operator())?;
                for (i, element) in op.elements().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// The wildcard sentinel: matches any value at its position.
#[inline]
pub fn wildcard<V>() -> PatternElem<V> {
    PatternElem::Wildcard
}

/// Fixed-length pattern tuple. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern<V> {
    elems: SmallVec<[PatternElem<V>; INLINE_ARITY]>,
}

impl<V> Pattern<V> {
    pub fn new(elems: impl IntoIterator<Item = PatternElem<V>>) -> Self {
        Pattern {
            elems: elems.into_iter().collect(),
        }
    }

    /// Number of positions (the arity the value tuple must have).
    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    #[inline]
    pub fn elems(&self) -> &[PatternElem<V>] {
        &self.elems
    }
}

impl<V: StrictEq> Pattern<V> {
    /// Index of the first position that rejects its value, or `None` if
    /// every position admits.
    ///
    /// The caller must have checked arity; extra values past the pattern's
    /// length are not inspected.
    pub(crate) fn first_mismatch(&self, values: &[V]) -> Option<usize> {
        self.elems
            .iter()
            .zip(values)
            .position(|(elem, value)| !elem.admits(value))
    }
}

impl<V> FromIterator<PatternElem<V>> for Pattern<V> {
    fn from_iter<I: IntoIterator<Item = PatternElem<V>>>(iter: I) -> Self {
        Pattern::new(iter)
    }
}

impl<V> From<Vec<PatternElem<V>>> for Pattern<V> {
    fn from(elems: Vec<PatternElem<V>>) -> Self {
        Pattern::new(elems)
    }
}

impl<V, const N: usize> From<[PatternElem<V>; N]> for Pattern<V> {
    fn from(elems: [PatternElem<V>; N]) -> Self {
        Pattern::new(elems)
    }
}

impl<V: fmt::Display> fmt::Display for Pattern<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.elems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("]")
    }
}

/// Build a `Pattern` from a comma-separated element list.
///
/// - `_` is the wildcard
/// - `either(a, b, ..)` and `neither(a, b, ..)` are set operators
/// - any other expression is a literal
///
/// ```
/// use pm_match::{pattern, PatternElem};
///
/// let p = pattern![_, 1, either(2, 3), neither(4)];
/// assert_eq!(p.len(), 4);
/// assert!(p.elems()[0].is_wildcard());
/// assert_eq!(p.elems()[1], PatternElem::Literal(1));
/// ```
#[macro_export]
macro_rules! pattern {
    (@munch [$($done:expr),*]) => {
        $crate::Pattern::new([$($done),*])
    };
    (@munch [$($done:expr),*] _ $(, $($rest:tt)*)?) => {
        $crate::pattern!(@munch [$($done,)* $crate::PatternElem::Wildcard] $($($rest)*)?)
    };
    (@munch [$($done:expr),*] either ( $($elem:expr),* $(,)? ) $(, $($rest:tt)*)?) => {
        $crate::pattern!(
            @munch [$($done,)* $crate::PatternElem::Set($crate::either([$($elem),*]))]
            $($($rest)*)?
        )
    };
    (@munch [$($done:expr),*] neither ( $($elem:expr),* $(,)? ) $(, $($rest:tt)*)?) => {
        $crate::pattern!(
            @munch [$($done,)* $crate::PatternElem::Set($crate::neither([$($elem),*]))]
            $($($rest)*)?
        )
    };
    (@munch [$($done:expr),*] $head:expr $(, $($rest:tt)*)?) => {
        $crate::pattern!(@munch [$($done,)* $crate::PatternElem::Literal($head)] $($($rest)*)?)
    };
    ($($input:tt)*) => {
        $crate::pattern!(@munch [] $($input)*)
    };
}
