//! Trait for converting types into a domain [`Error`].
//!
//! This trait provides a unified interface for the error arguments of
//! [`Outcome::failure`](crate::Outcome::failure),
//! [`Outcome::ensure`](crate::Outcome::ensure) and the validation builders.
//!
//! # Implementations
//!
//! - `Error` - identity conversion
//! - `&'static str` / `String` - a base [`Error::Error`] with an empty code
//! - `(code, message)` tuples - a base [`Error::Error`] with that code
//! - `AggregateError` - an [`Error::Aggregate`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{traits::IntoError, Error};
//!
//! let e1 = "plain message".into_error();
//! let e2 = ("Order.Missing", "order not found").into_error();
//! let e3 = Error::conflict("Order.Exists", "duplicate").into_error();
//!
//! assert_eq!(e1.code(), "");
//! assert_eq!(e2.code(), "Order.Missing");
//! assert_eq!(e3.variant_name(), "ConflictError");
//! ```
use crate::types::alloc_type::String;
use crate::types::{AggregateError, Error};

/// Converts a type into an [`Error`].
///
/// # Implementing for Custom Types
///
/// ```
/// use outcome_rail::{traits::IntoError, Error};
///
/// struct MissingField(&'static str);
///
/// impl IntoError for MissingField {
///     fn into_error(self) -> Error {
///         Error::validation("Field.Missing", format!("{} is required", self.0))
///     }
/// }
///
/// assert_eq!(MissingField("email").into_error().message(), "email is required");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a domain error",
    label = "this type does not implement `IntoError`",
    note = "build an `outcome_rail::Error` explicitly or implement `IntoError` for `{Self}`"
)]
pub trait IntoError {
    /// Converts `self` into an [`Error`].
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for AggregateError {
    #[inline]
    fn into_error(self) -> Error {
        Error::Aggregate(self)
    }
}

impl IntoError for &'static str {
    #[inline]
    fn into_error(self) -> Error {
        Error::msg(self)
    }
}

impl IntoError for String {
    #[inline]
    fn into_error(self) -> Error {
        Error::msg(self)
    }
}

impl IntoError for (&'static str, &'static str) {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self.0, self.1)
    }
}

impl IntoError for (&'static str, String) {
    #[inline]
    fn into_error(self) -> Error {
        Error::new(self.0, self.1)
    }
}
