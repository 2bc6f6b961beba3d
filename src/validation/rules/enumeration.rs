//! Enum membership checks.
//!
//! Rust enums cannot hold undefined discriminants, so membership is checked
//! at the boundary: when parsing a name, or against an allowed subset.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validation::rules::enumeration::{self, Enumeration};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Color { Red, Green }
//!
//! impl Enumeration for Color {
//!     const NAME: &'static str = "Color";
//!
//!     fn variants() -> &'static [Self] {
//!         &[Color::Red, Color::Green]
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         match self {
//!             Color::Red => "Red",
//!             Color::Green => "Green",
//!         }
//!     }
//! }
//!
//! assert_eq!(enumeration::parse_defined::<Color>("Green").into_value(), Color::Green);
//! assert_eq!(enumeration::parse_defined::<Color>("Blue").error().code(), "Enum.Undefined");
//! assert!(enumeration::one_of(Color::Red, &[Color::Green]).is_failure());
//! ```
use super::gate;
use crate::types::{Outcome, UnitOutcome};
use crate::validation::EnsureBuilder;

/// A fieldless enum whose variants can be listed and named.
pub trait Enumeration: Sized + Copy + PartialEq + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// All defined variants, in declaration order.
    fn variants() -> &'static [Self];

    /// The variant's name as accepted by [`parse_defined`].
    fn name(&self) -> &'static str;
}

/// Default error catalog for enum rules.
pub mod errors {
    use crate::types::alloc_type::format;
    use crate::types::Error;

    pub fn undefined(type_name: &str, input: &str) -> Error {
        Error::validation(
            "Enum.Undefined",
            format!("'{input}' is not a defined {type_name} value."),
        )
    }

    pub fn not_allowed(type_name: &str, variant: &str) -> Error {
        Error::validation(
            "Enum.NotAllowed",
            format!("{type_name}::{variant} is not allowed here."),
        )
    }
}

/// Parses a variant by exact name.
pub fn parse_defined<T: Enumeration>(input: &str) -> Outcome<T> {
    find_variant(|name| name == input)
        .to_outcome_with(|| errors::undefined(T::NAME, input))
}

/// Parses a variant by name, ignoring ASCII case.
pub fn parse_defined_ignore_case<T: Enumeration>(input: &str) -> Outcome<T> {
    find_variant(|name| name.eq_ignore_ascii_case(input))
        .to_outcome_with(|| errors::undefined(T::NAME, input))
}

fn find_variant<T, P>(mut matches: P) -> crate::types::Maybe<T>
where
    T: Enumeration,
    P: FnMut(&str) -> bool,
{
    T::variants()
        .iter()
        .copied()
        .find(|variant| matches(variant.name()))
        .into()
}

/// Checks that `value` is one of `allowed`.
pub fn one_of<T: Enumeration>(value: T, allowed: &[T]) -> UnitOutcome {
    gate(allowed.contains(&value), || {
        errors::not_allowed(T::NAME, value.name())
    })
}

impl<T: Enumeration> EnsureBuilder<T> {
    /// Requires the value to be one of `allowed`.
    pub fn one_of(self, allowed: &[T]) -> Self {
        self.satisfies_with(
            |v| allowed.contains(v),
            |v| errors::not_allowed(T::NAME, v.name()),
        )
    }
}
