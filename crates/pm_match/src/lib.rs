//! pm Match - First-match dispatch over flat value tuples.
//!
//! This crate provides:
//! - Set-membership operators (`either`, `neither`, `Operation`)
//! - Pattern elements and tuples (`PatternElem`, `Pattern`, the `pattern!` macro)
//! - Arms and their outcomes (`when`, `Arm`, `MatchOutcome`)
//! - The dispatcher (`match_on`, `Dispatcher`, `Selection`)
//!
//! # Architecture
//!
//! Matching is split in two steps that mirror how arms are written:
//!
//! 1. `when(pattern, result)` builds an `Arm`. The result is a value,
//!    captured once; nothing is computed when the arm is evaluated.
//! 2. `match_on(values).select(&arms)` evaluates every arm against the value
//!    tuple and returns the first qualifying result.
//!
//! Patterns are flat. Each position is a wildcard, a literal, or a
//! set-membership operator; there is no nesting, binding, or guard.
//!
//! ```
//! use pm_match::{match_on, pattern, when};
//!
//! let arms = [
//!     when(pattern![0, 0], "origin"),
//!     when(pattern![0, _], "y axis"),
//!     when(pattern![_, 0], "x axis"),
//!     when(pattern![either(1, -1), either(1, -1)], "unit diagonal"),
//! ];
//!
//! assert_eq!(match_on(&[0, 5]).select(&arms), Some(&"y axis"));
//! assert_eq!(match_on(&[-1, 1]).select(&arms), Some(&"unit diagonal"));
//! assert_eq!(match_on(&[2, 3]).select(&arms), None);
//! ```
//!
//! # Comparison Rules
//!
//! Literals and operator elements compare with `StrictEq`, result selection
//! uses `Truthy`. Both come from `pm_value` and are re-exported here.

#[macro_use]
mod pattern;

mod arm;
mod dispatch;
mod errors;
mod operator;

pub use arm::{when, Arm, MatchOutcome};
pub use dispatch::{match_on, match_on_with, Dispatcher, Selection};
pub use errors::{MatchError, MatchResult};
pub use operator::{either, neither, Operation, Operator};
pub use pattern::{wildcard, Pattern, PatternElem};

pub use pm_value::{StrictEq, Truthy, Value};
