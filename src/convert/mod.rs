//! Conversion helpers between `Maybe`, `Outcome` and the core `Option`/`Result`.
//!
//! Every function here is total and side-effect free. They are the named
//! forms of the `From` impls and inherent adapters, convenient as
//! function values in `map` chains.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{Error, Maybe, Outcome};
//!
//! let maybe = option_to_maybe(Some(42));
//! assert_eq!(maybe_to_outcome(maybe, Error::msg("missing")), Outcome::success(42));
//!
//! let outcome: Outcome<i32> = Outcome::failure(Error::msg("boom"));
//! assert_eq!(outcome_to_maybe(outcome), Maybe::none());
//! ```
use crate::traits::IntoError;
use crate::types::{Error, Maybe, Outcome, UnitOutcome};

/// Wraps a value in a successful [`Outcome`].
#[inline]
pub fn from_value<T>(value: T) -> Outcome<T> {
    Outcome::Success(value)
}

/// Wraps an error in a failed [`Outcome`] of any value type.
#[inline]
pub fn from_error<T>(error: Error) -> Outcome<T> {
    Outcome::Failure(error)
}

/// Converts a core `Option` into a [`Maybe`].
#[inline]
pub fn option_to_maybe<T>(option: Option<T>) -> Maybe<T> {
    Maybe::from_option(option)
}

/// Converts a [`Maybe`] into a core `Option`.
#[inline]
pub fn maybe_to_option<T>(maybe: Maybe<T>) -> Option<T> {
    maybe.into_option()
}

/// Present values succeed; absence fails with `error`.
#[inline]
pub fn maybe_to_outcome<T, E: IntoError>(maybe: Maybe<T>, error: E) -> Outcome<T> {
    maybe.to_outcome(error)
}

/// Successes become `Some`; failures become `None`, dropping the error.
#[inline]
pub fn outcome_to_maybe<T>(outcome: Outcome<T>) -> Maybe<T> {
    outcome.to_maybe()
}

/// Converts a core `Result` whose error converts into an [`Error`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, _>("no luck"));
/// assert_eq!(outcome.error().message(), "no luck");
/// ```
#[inline]
pub fn result_to_outcome<T, E: IntoError>(result: Result<T, E>) -> Outcome<T> {
    Outcome::from(result)
}

/// Converts an [`Outcome`] into a core `Result`.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Error> {
    outcome.into_result()
}

/// Drops the success value of an outcome.
#[inline]
pub fn to_unit<T>(outcome: Outcome<T>) -> UnitOutcome {
    outcome.into_unit()
}
