//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(input: &str) -> Outcome<u16> {
//!     input
//!         .parse::<u16>()
//!         .into_outcome()
//!         .ensure_that()
//!         .greater_than(1023)
//!         .build()
//! }
//!
//! assert!(parse_port("8080").is_success());
//! assert_eq!(parse_port("80").error().code(), "Number.GreaterThan");
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`ensure_all!`], [`ensure_seq!`]
//! - **Types**: [`Error`], [`Maybe`], [`Outcome`], [`UnitOutcome`], [`EnsureBuilder`], [`FilterBuilder`]
//! - **Traits**: [`IntoError`], [`ResultExt`], [`OptionExt`], [`OutcomeIterExt`],
//!   [`TraverseExt`], [`OutcomeTuple`]

// Macros
pub use crate::{ensure_all, ensure_seq};

// Core types
pub use crate::types::{AggregateError, Error, Maybe, Outcome, UnitOutcome};
pub use crate::validation::{EnsureBuilder, FilterBuilder};

// Traits
pub use crate::traits::{
    IntoError, OptionExt, OutcomeIterExt, OutcomeTuple, ResultExt, TraverseExt,
};

#[cfg(feature = "tracing")]
pub use crate::trace::OutcomeTraceExt;
