//! pm Value - Runtime values for the pm pattern matcher.
//!
//! This crate provides:
//! - The dynamically typed runtime value (`Value`) and its shared heap
//!   handle (`Heap<T>`)
//! - The comparison rules the matcher is built on (`StrictEq`, `Truthy`)
//!
//! # Equality
//!
//! Two notions of equality coexist:
//! - `PartialEq` is structural: two lists with equal contents are equal.
//!   Useful for assertions and collections.
//! - `StrictEq` is the rule patterns use: scalars compare by type and value
//!   (`Int` and `Float` count as one number type), strings by content, lists
//!   and objects by identity.
//!
//! # Truthiness
//!
//! `Truthy` classifies results for first-match selection. The falsy values
//! are `false`, zero of every numeric kind, NaN, the empty string, `null`
//! and `undefined`. Lists and objects are always truthy.

mod compare;
mod heap;
mod value;

pub use compare::{StrictEq, Truthy};
pub use heap::Heap;
pub use value::Value;
