//! Error model and value types.
//!
//! This module provides the building blocks every other part of the crate is
//! layered on:
//!
//! - [`Error`] - a variant-tagged domain error with a code and a message
//! - [`Maybe`] - a value that is either present or absent
//! - [`Outcome`] - a success value or an [`Error`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Maybe, Outcome};
//!
//! let user: Outcome<&str> = Maybe::some("alice")
//!     .to_outcome(Error::not_found("User.NotFound", "no such user"));
//!
//! assert_eq!(user, Outcome::success("alice"));
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub(crate) mod alloc_type;
pub mod error;
pub mod maybe;
pub mod outcome;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::*;
pub use maybe::*;
pub use outcome::*;

/// SmallVec-backed collection used while accumulating errors.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case where only a couple of checks fail.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
