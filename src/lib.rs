//! Railway-style `Maybe` and `Outcome` value types with fluent validation.
//!
//! `Maybe<T>` models an optional value and `Outcome<T>` a success value or a
//! domain [`Error`]. Combinators chain work on the happy path, validation
//! builders check values fail-fast, and the accumulation APIs collect every
//! failure into a single aggregate error.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Optional values
//!
//! ```
//! use outcome_rail::Maybe;
//!
//! let name = Maybe::some("ferris")
//!     .filter(|n| n.len() > 3)
//!     .map(|n| n.to_uppercase());
//!
//! assert_eq!(name, Maybe::some("FERRIS".to_string()));
//! assert!(Maybe::<i32>::none().map(|x| x + 1).is_none());
//! ```
//!
//! ## Fail-fast validation
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let age = Outcome::success(17)
//!     .ensure_that()
//!     .satisfies(|age| *age >= 0, Error::validation("Age.Negative", "age cannot be negative"))
//!     .satisfies(|age| *age >= 18, Error::validation("Age.Minor", "must be an adult"))
//!     .build();
//!
//! assert_eq!(age.error().code(), "Age.Minor");
//! ```
//!
//! ## Error accumulation
//!
//! ```
//! use outcome_rail::{Error, UnitOutcome};
//!
//! let checks = UnitOutcome::ensure_all([
//!     ("".is_empty(), Error::validation("Name.Empty", "name is required")),
//!     (false, Error::validation("Email.Empty", "email is required")),
//!     (false, Error::validation("Age.Missing", "age is required")),
//! ]);
//!
//! let error = checks.into_error();
//! assert!(error.is_aggregate());
//! assert_eq!(error.as_aggregate().map(|agg| agg.len()), Some(2));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Maybe`, `Outcome` and the core `Option`/`Result`
pub mod convert;
/// Exported macros and the tuple-arity combinators
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits over iterators, tuples and core types
pub mod traits;
/// Error model and the `Maybe`/`Outcome` value types
pub mod types;
/// Validation builders and predefined rule groups
pub mod validation;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use traits::*;
pub use types::{
    AggregateError, EmptyAggregate, Error, ErrorInfo, ErrorKind, ErrorVec, Maybe, Outcome,
    UnitOutcome,
};
pub use validation::{EnsureBuilder, FilterBuilder};
