//! GUID checks (requires `uuid` feature).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validation::rules::guid;
//! use uuid::Uuid;
//!
//! assert_eq!(guid::not_empty(&Uuid::nil()).error().code(), "Guid.Empty");
//!
//! let parsed = guid::parse("67e55044-10b1-426f-9247-bb680e5fe0c8");
//! assert!(parsed.is_success());
//! assert_eq!(guid::parse("not-a-guid").error().code(), "Guid.Invalid");
//! ```
use super::gate;
use crate::types::{Outcome, UnitOutcome};
use crate::validation::EnsureBuilder;
use uuid::Uuid;

/// Default error catalog for GUID rules.
pub mod errors {
    use crate::types::alloc_type::format;
    use crate::types::Error;

    pub fn empty() -> Error {
        Error::validation("Guid.Empty", "Value must not be an empty GUID.")
    }

    pub fn invalid(input: &str) -> Error {
        Error::validation("Guid.Invalid", format!("'{input}' is not a valid GUID."))
    }
}

/// Rejects the all-zero GUID.
pub fn not_empty(value: &Uuid) -> UnitOutcome {
    gate(!value.is_nil(), errors::empty)
}

pub fn parse(input: &str) -> Outcome<Uuid> {
    match Uuid::parse_str(input) {
        Ok(value) => Outcome::Success(value),
        Err(_) => Outcome::Failure(errors::invalid(input)),
    }
}

impl EnsureBuilder<Uuid> {
    pub fn not_nil(self) -> Self {
        self.satisfies_with(|v| !v.is_nil(), |_| errors::empty())
    }
}
