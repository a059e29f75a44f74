//! Comparison rules used by pattern matching.
//!
//! `StrictEq` decides whether a literal pattern element matches a value.
//! `Truthy` decides whether a matched arm's result counts as a selection.
//! Both are implemented for `Value` and for the Rust primitives, so the
//! matcher works over plain Rust tuples as well as dynamic values.

use crate::heap::Heap;
use crate::value::Value;

/// Equality as seen by a literal pattern element.
///
/// Scalars are equal when they have the same type and the same value.
/// `Value::Int` and `Value::Float` are both numbers: `1` equals `1.0`.
/// NaN is never equal to anything, itself included; `0.0` equals `-0.0`.
/// `BigInt` is its own type. Strings compare by content. Composite values
/// compare by identity.
pub trait StrictEq {
    fn strict_eq(&self, other: &Self) -> bool;
}

/// Whether a value counts as "present" when selecting a result.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl StrictEq for Value {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.strict_eq(b),
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                int_eq_float(*i, *f)
            }
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Exact numeric equality between an integer and a float.
///
/// Holds only when `f` is integral, inside the `i64` range, and converts
/// back to exactly `i`. NaN and the infinities fail the `fract` test.
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    reason = "f is integral and within i64 range before the cast"
)]
fn int_eq_float(i: i64, f: f64) -> bool {
    // 2^63; `i64::MAX as f64` rounds up to this value.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) && f as i64 == i
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(x) => x.is_truthy(),
            Value::BigInt(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::List(_) | Value::Object(_) => true,
        }
    }
}

// Native types: `==` already has the right semantics (IEEE for floats).

macro_rules! impl_native {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StrictEq for $ty {
                #[inline]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_truthy_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StrictEq for $ty {
                #[inline]
                #[allow(clippy::float_cmp, reason = "IEEE equality is the rule: NaN != NaN, 0.0 == -0.0")]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !(self.is_nan() || *self == 0.0)
                }
            }
        )*
    };
}

impl_native!(bool, char, str, String);
impl_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

// Unit plays the role of `undefined`: equal to itself, never truthy.
impl StrictEq for () {
    #[inline]
    fn strict_eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: StrictEq> StrictEq for Option<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.strict_eq(b),
            _ => false,
        }
    }
}

/// `None` is falsy; `Some(x)` is as truthy as `x`.
impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: StrictEq + ?Sized> StrictEq for &T {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
