//! Ergonomic macros and the tuple-arity combinators.
//!
//! - [`macro@crate::ensure_all`] - evaluates every `condition => error` pair and
//!   accumulates the failures via [`Outcome::ensure_all`](crate::Outcome::ensure_all).
//! - [`macro@crate::ensure_seq`] - fail-fast counterpart; conditions after the first
//!   failing one are not evaluated.
//!
//! The `map_tuple`/`bind_tuple`/`on_some_tuple`/`on_either_tuple` methods on `Maybe<(A, B, ..)>`,
//! the matching methods on `Outcome<(A, B, ..)>` and the
//! [`OutcomeTuple`](crate::traits::OutcomeTuple) impls are generated here for
//! tuples of 2 to 8 elements.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure_all, Error};
//!
//! let name = "";
//! let age = 200;
//! let outcome = ensure_all!(
//!     !name.is_empty() => Error::validation("Name.Empty", "name is required"),
//!     age < 150 => Error::validation("Age.Range", "age is out of range"),
//! );
//!
//! assert_eq!(outcome.error().as_aggregate().map(|agg| agg.len()), Some(2));
//! ```

mod tuple;

/// Evaluates every `condition => error` pair and accumulates the errors of
/// the false conditions.
///
/// Expands to [`Outcome::ensure_all`](crate::Outcome::ensure_all); a single
/// failure is returned as-is, several as an aggregate.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure_all, Error};
///
/// let ok = ensure_all!(1 < 2 => Error::msg("math is broken"));
/// assert!(ok.is_success());
/// ```
#[macro_export]
macro_rules! ensure_all {
    ($($condition:expr => $error:expr),+ $(,)?) => {
        $crate::UnitOutcome::ensure_all([$((
            $condition,
            $crate::traits::IntoError::into_error($error),
        )),+])
    };
}

/// Checks `condition => error` pairs in order and stops at the first false one.
///
/// Unlike [`ensure_all!`](crate::ensure_all), later conditions are not
/// evaluated once one fails.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure_seq, Error};
///
/// let mut evaluated = false;
/// let outcome = ensure_seq!(
///     false => Error::msg("first"),
///     { evaluated = true; true } => Error::msg("second"),
/// );
///
/// assert_eq!(outcome.error().message(), "first");
/// assert!(!evaluated);
/// ```
#[macro_export]
macro_rules! ensure_seq {
    ($($condition:expr => $error:expr),+ $(,)?) => {
        (|| {
            $(
                if !($condition) {
                    return $crate::UnitOutcome::Failure(
                        $crate::traits::IntoError::into_error($error),
                    );
                }
            )+
            $crate::UnitOutcome::Success(())
        })()
    };
}
