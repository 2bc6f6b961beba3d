//! Extension traits that lift core `Result` and `Option` values into this
//! crate's types without verbose `match` blocks.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OptionExt, ResultExt};
//! use outcome_rail::{Error, Maybe};
//!
//! let port = "8080".parse::<u16>().into_outcome();
//! assert!(port.is_success());
//!
//! let missing = None::<u16>.into_maybe();
//! assert_eq!(missing, Maybe::none());
//!
//! let required = None::<u16>.ok_or_error(Error::not_found("Port", "no port configured"));
//! assert_eq!(required.error().code(), "Port");
//! ```
use crate::traits::IntoError;
use crate::types::alloc_type::ToString;
use crate::types::{Error, Maybe, Outcome};
use core::fmt::Display;

/// Converts a core `Result` into an [`Outcome`].
pub trait ResultExt<T, E> {
    /// Maps the error through its `Display` form into a base [`Error`].
    fn into_outcome(self) -> Outcome<T>;

    /// Maps the error with `f`.
    fn into_outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error.to_string().into_error()),
        }
    }

    #[inline]
    fn into_outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(f(error)),
        }
    }
}

/// Converts a core `Option` into a [`Maybe`] or an [`Outcome`].
pub trait OptionExt<T> {
    fn into_maybe(self) -> Maybe<T>;

    /// Fails with `error` when the option is `None`.
    fn ok_or_error<E: IntoError>(self, error: E) -> Outcome<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_option(self)
    }

    #[inline]
    fn ok_or_error<E: IntoError>(self, error: E) -> Outcome<T> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error.into_error()),
        }
    }
}
