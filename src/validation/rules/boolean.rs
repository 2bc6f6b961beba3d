//! Truthiness gates.
use super::gate;
use crate::types::UnitOutcome;
use crate::validation::EnsureBuilder;

/// Default error catalog for boolean rules.
pub mod errors {
    use crate::types::Error;

    pub fn not_true() -> Error {
        Error::validation("Boolean.True", "Value must be true.")
    }

    pub fn not_false() -> Error {
        Error::validation("Boolean.False", "Value must be false.")
    }
}

pub fn is_true(value: bool) -> UnitOutcome {
    gate(value, errors::not_true)
}

pub fn is_false(value: bool) -> UnitOutcome {
    gate(!value, errors::not_false)
}

impl EnsureBuilder<bool> {
    pub fn is_true(self) -> Self {
        self.satisfies_with(|v| *v, |_| errors::not_true())
    }

    pub fn is_false(self) -> Self {
        self.satisfies_with(|v| !*v, |_| errors::not_false())
    }
}
