//! String shape checks.
//!
//! Lengths are counted in `char`s, not bytes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validation::rules::string;
//!
//! assert!(string::not_blank("  ").is_failure());
//! assert!(string::email_shaped("ferris@rust-lang.org").is_success());
//! assert_eq!(string::max_length("héllo", 4).error().code(), "String.MaxLength");
//! ```
use super::gate;
use crate::types::UnitOutcome;
use crate::validation::EnsureBuilder;

/// Default error catalog for string rules.
pub mod errors {
    use crate::types::alloc_type::format;
    use crate::types::Error;

    pub fn empty() -> Error {
        Error::validation("String.Empty", "Value must not be empty.")
    }

    pub fn blank() -> Error {
        Error::validation("String.Blank", "Value must not be blank.")
    }

    pub fn min_length(min: usize) -> Error {
        Error::validation(
            "String.MinLength",
            format!("Value must be at least {min} characters long."),
        )
    }

    pub fn max_length(max: usize) -> Error {
        Error::validation(
            "String.MaxLength",
            format!("Value must be at most {max} characters long."),
        )
    }

    pub fn length_between(min: usize, max: usize) -> Error {
        Error::validation(
            "String.LengthBetween",
            format!("Value must be between {min} and {max} characters long."),
        )
    }

    pub fn starts_with(prefix: &str) -> Error {
        Error::validation(
            "String.StartsWith",
            format!("Value must start with '{prefix}'."),
        )
    }

    pub fn ends_with(suffix: &str) -> Error {
        Error::validation(
            "String.EndsWith",
            format!("Value must end with '{suffix}'."),
        )
    }

    pub fn contains(needle: &str) -> Error {
        Error::validation(
            "String.Contains",
            format!("Value must contain '{needle}'."),
        )
    }

    pub fn invalid_characters() -> Error {
        Error::validation(
            "String.InvalidCharacters",
            "Value contains invalid characters.",
        )
    }

    pub fn alphanumeric() -> Error {
        Error::validation(
            "String.Alphanumeric",
            "Value must contain only letters and digits.",
        )
    }

    pub fn digits() -> Error {
        Error::validation("String.Digits", "Value must contain only digits.")
    }

    pub fn email() -> Error {
        Error::validation("String.Email", "Value must be a valid email address.")
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn is_email_shaped(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
}

/// Rejects the empty string. Whitespace counts as content.
pub fn not_empty(value: &str) -> UnitOutcome {
    gate(!value.is_empty(), errors::empty)
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> UnitOutcome {
    gate(!value.trim().is_empty(), errors::blank)
}

/// Requires at least `min` characters.
pub fn min_length(value: &str, min: usize) -> UnitOutcome {
    gate(char_len(value) >= min, || errors::min_length(min))
}

/// Allows at most `max` characters.
pub fn max_length(value: &str, max: usize) -> UnitOutcome {
    gate(char_len(value) <= max, || errors::max_length(max))
}

/// Inclusive on both ends.
pub fn length_between(value: &str, min: usize, max: usize) -> UnitOutcome {
    let len = char_len(value);
    gate(min <= len && len <= max, || errors::length_between(min, max))
}

/// Requires `value` to begin with `prefix`.
pub fn starts_with(value: &str, prefix: &str) -> UnitOutcome {
    gate(value.starts_with(prefix), || errors::starts_with(prefix))
}

/// Requires `value` to end with `suffix`.
pub fn ends_with(value: &str, suffix: &str) -> UnitOutcome {
    gate(value.ends_with(suffix), || errors::ends_with(suffix))
}

/// Requires `needle` to occur somewhere in `value`.
pub fn contains(value: &str, needle: &str) -> UnitOutcome {
    gate(value.contains(needle), || errors::contains(needle))
}

/// Every character must satisfy `allowed`.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::rules::string;
///
/// let slug = |c: char| c.is_ascii_lowercase() || c == '-';
/// assert!(string::all_chars("outcome-rail", slug).is_success());
/// assert_eq!(
///     string::all_chars("Outcome", slug).error().code(),
///     "String.InvalidCharacters"
/// );
/// ```
pub fn all_chars<P>(value: &str, allowed: P) -> UnitOutcome
where
    P: FnMut(char) -> bool,
{
    gate(value.chars().all(allowed), errors::invalid_characters)
}

/// Non-empty and made of alphanumeric characters only.
pub fn alphanumeric(value: &str) -> UnitOutcome {
    gate(
        !value.is_empty() && value.chars().all(char::is_alphanumeric),
        errors::alphanumeric,
    )
}

/// Non-empty and made of ASCII digits only.
pub fn digits(value: &str) -> UnitOutcome {
    gate(
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()),
        errors::digits,
    )
}

/// A shape check, not RFC 5322: one `@`, a non-empty local part and a
/// dotted domain, no whitespace.
pub fn email_shaped(value: &str) -> UnitOutcome {
    gate(is_email_shaped(value), errors::email)
}

/// String rules as builder steps, for anything that views as `&str`.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::EnsureBuilder;
///
/// let name = EnsureBuilder::new(String::from("  "))
///     .not_empty()
///     .not_blank()
///     .max_length(32)
///     .build();
///
/// assert_eq!(name.error().code(), "String.Blank");
/// ```
impl<S: AsRef<str>> EnsureBuilder<S> {
    /// Rejects the empty string.
    pub fn not_empty(self) -> Self {
        self.satisfies_with(|s| !s.as_ref().is_empty(), |_| errors::empty())
    }

    /// Rejects empty and whitespace-only strings.
    pub fn not_blank(self) -> Self {
        self.satisfies_with(
            |s| !s.as_ref().trim().is_empty(),
            |_| errors::blank(),
        )
    }

    /// Requires at least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        self.satisfies_with(
            |s| char_len(s.as_ref()) >= min,
            |_| errors::min_length(min),
        )
    }

    /// Allows at most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        self.satisfies_with(
            |s| char_len(s.as_ref()) <= max,
            |_| errors::max_length(max),
        )
    }

    /// Requires a character count within `min..=max`.
    pub fn length_between(self, min: usize, max: usize) -> Self {
        self.satisfies_with(
            |s| (min..=max).contains(&char_len(s.as_ref())),
            |_| errors::length_between(min, max),
        )
    }

    /// Requires the value to begin with `prefix`.
    pub fn starts_with(self, prefix: &str) -> Self {
        self.satisfies_with(
            |s| s.as_ref().starts_with(prefix),
            |_| errors::starts_with(prefix),
        )
    }

    /// Requires the value to end with `suffix`.
    pub fn ends_with(self, suffix: &str) -> Self {
        self.satisfies_with(
            |s| s.as_ref().ends_with(suffix),
            |_| errors::ends_with(suffix),
        )
    }

    /// Requires `needle` to occur in the value.
    pub fn contains(self, needle: &str) -> Self {
        self.satisfies_with(
            |s| s.as_ref().contains(needle),
            |_| errors::contains(needle),
        )
    }

    /// Every character must satisfy `allowed`.
    pub fn all_chars<P>(self, allowed: P) -> Self
    where
        P: FnMut(char) -> bool,
    {
        self.satisfies_with(
            |s| s.as_ref().chars().all(allowed),
            |_| errors::invalid_characters(),
        )
    }

    /// Non-empty and alphanumeric only.
    pub fn alphanumeric(self) -> Self {
        self.satisfies_with(
            |s| alphanumeric(s.as_ref()).is_success(),
            |_| errors::alphanumeric(),
        )
    }

    /// Non-empty and ASCII digits only.
    pub fn digits(self) -> Self {
        self.satisfies_with(|s| digits(s.as_ref()).is_success(), |_| errors::digits())
    }

    /// See [`email_shaped`].
    pub fn email_shaped(self) -> Self {
        self.satisfies_with(|s| is_email_shaped(s.as_ref()), |_| errors::email())
    }
}
