//! Predefined, domain-agnostic validation rules.
//!
//! Each group ships two things:
//!
//! - an `errors` catalog of constructor functions returning
//!   [`Error::Validation`](crate::Error::Validation) with a stable code and a
//!   readable message, parameterised where the bound matters;
//! - check functions. Pure boolean gates return a
//!   [`UnitOutcome`](crate::UnitOutcome); checks that also unwrap or parse
//!   return the resulting value.
//!
//! Most rules are also available as [`EnsureBuilder`](crate::EnsureBuilder)
//! methods so they compose with custom predicates:
//!
//! ```
//! use outcome_rail::validation::EnsureBuilder;
//!
//! let username = EnsureBuilder::new("ferris_42".to_string())
//!     .not_blank()
//!     .length_between(3, 16)
//!     .satisfies(|s| !s.starts_with('_'), ("User.Underscore", "cannot start with '_'"))
//!     .build();
//!
//! assert!(username.is_success());
//! ```
pub mod boolean;
pub mod enumeration;
pub mod maybe;
pub mod numeric;
pub mod string;

#[cfg(feature = "chrono")]
pub mod datetime;
#[cfg(feature = "uuid")]
pub mod guid;

pub use enumeration::Enumeration;
pub use numeric::Numeric;

#[cfg(feature = "chrono")]
pub use datetime::Temporal;

use crate::types::{Error, UnitOutcome};

/// Turns a boolean gate into a unit outcome, building the error lazily.
#[inline]
pub(crate) fn gate<F>(condition: bool, error: F) -> UnitOutcome
where
    F: FnOnce() -> Error,
{
    if condition {
        UnitOutcome::ok()
    } else {
        UnitOutcome::Failure(error())
    }
}
