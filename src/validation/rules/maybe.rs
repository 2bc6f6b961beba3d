//! Presence checks for [`Maybe`] and core `Option` values.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validation::rules::maybe;
//! use outcome_rail::Maybe;
//!
//! assert_eq!(maybe::is_some(Maybe::some(3)).into_value(), 3);
//! assert_eq!(maybe::is_some(Maybe::<i32>::none()).error().code(), "Maybe.None");
//! assert!(maybe::is_none(&Maybe::<i32>::none()).is_success());
//! assert!(maybe::present(Some("x")).is_success());
//! ```
use super::gate;
use crate::types::{Maybe, Outcome, UnitOutcome};
use crate::validation::EnsureBuilder;

/// Default error catalog for presence rules.
pub mod errors {
    use crate::types::Error;

    pub fn none() -> Error {
        Error::validation("Maybe.None", "A value is required.")
    }

    pub fn some() -> Error {
        Error::validation("Maybe.Some", "No value is allowed.")
    }

    pub fn missing() -> Error {
        Error::validation("Value.Missing", "Value must not be null.")
    }
}

/// Unwraps a present value.
pub fn is_some<T>(value: Maybe<T>) -> Outcome<T> {
    value.to_outcome_with(errors::none)
}

pub fn is_none<T>(value: &Maybe<T>) -> UnitOutcome {
    gate(value.is_none(), errors::some)
}

/// Unwraps a value coming from a nullable source.
pub fn present<T>(value: Option<T>) -> Outcome<T> {
    Maybe::from_option(value).to_outcome_with(errors::missing)
}

impl<T> EnsureBuilder<Maybe<T>> {
    /// Requires the wrapped `Maybe` to hold a value.
    pub fn is_some(self) -> Self {
        self.satisfies_with(Maybe::is_some, |_| errors::none())
    }

    /// Requires the wrapped `Maybe` to be empty.
    pub fn is_none(self) -> Self {
        self.satisfies_with(Maybe::is_none, |_| errors::some())
    }
}
