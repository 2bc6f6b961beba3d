//! Date and time comparisons (requires `chrono` feature).
//!
//! Rules never read the system clock: "past" and "future" are relative to a
//! caller-supplied `now`, which keeps them deterministic.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use outcome_rail::validation::rules::datetime;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let birthday = NaiveDate::from_ymd_opt(1990, 3, 14).unwrap();
//!
//! assert!(datetime::in_past(birthday, today).is_success());
//! assert_eq!(datetime::in_future(birthday, today).error().code(), "DateTime.Future");
//! ```
use super::gate;
use crate::types::UnitOutcome;
use crate::validation::EnsureBuilder;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use core::fmt::Display;

/// Points in time the date rules accept.
pub trait Temporal: Clone + PartialOrd + Display {}

impl Temporal for NaiveDate {}
impl Temporal for NaiveDateTime {}
impl Temporal for NaiveTime {}
impl<Tz> Temporal for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
}

/// Default error catalog for date/time rules.
pub mod errors {
    use crate::types::alloc_type::format;
    use crate::types::Error;
    use core::fmt::Display;

    pub fn past() -> Error {
        Error::validation("DateTime.Past", "Value must be in the past.")
    }

    pub fn future() -> Error {
        Error::validation("DateTime.Future", "Value must be in the future.")
    }

    pub fn before(bound: impl Display) -> Error {
        Error::validation(
            "DateTime.Before",
            format!("Value must be before {bound}."),
        )
    }

    pub fn after(bound: impl Display) -> Error {
        Error::validation(
            "DateTime.After",
            format!("Value must be after {bound}."),
        )
    }

    pub fn within(start: impl Display, end: impl Display) -> Error {
        Error::validation(
            "DateTime.Within",
            format!("Value must be between {start} and {end}."),
        )
    }
}

/// Strictly earlier than `now`.
pub fn in_past<T: Temporal>(value: T, now: T) -> UnitOutcome {
    gate(value < now, errors::past)
}

/// Strictly later than `now`.
pub fn in_future<T: Temporal>(value: T, now: T) -> UnitOutcome {
    gate(value > now, errors::future)
}

/// Strictly earlier than `bound`.
pub fn before<T: Temporal>(value: T, bound: T) -> UnitOutcome {
    gate(value < bound, || errors::before(bound))
}

/// Strictly later than `bound`.
pub fn after<T: Temporal>(value: T, bound: T) -> UnitOutcome {
    gate(value > bound, || errors::after(bound))
}

/// Inclusive on both ends.
pub fn within<T: Temporal>(value: T, start: T, end: T) -> UnitOutcome {
    let inside = start <= value && value <= end;
    gate(inside, || errors::within(start, end))
}

/// Date/time rules as builder steps.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use outcome_rail::validation::EnsureBuilder;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let appointment = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
///
/// let checked = EnsureBuilder::new(appointment)
///     .after(start)
///     .in_future(today)
///     .build();
/// assert_eq!(checked.error().code(), "DateTime.Future");
/// ```
impl<T: Temporal> EnsureBuilder<T> {
    /// Requires the value to be earlier than `now`.
    pub fn in_past(self, now: T) -> Self {
        self.satisfies_with(|v| *v < now, |_| errors::past())
    }

    /// Requires the value to be later than `now`.
    pub fn in_future(self, now: T) -> Self {
        self.satisfies_with(|v| *v > now, |_| errors::future())
    }

    /// Requires the value to be earlier than `bound`.
    pub fn before(self, bound: T) -> Self {
        self.satisfies_with(|v| *v < bound, |_| errors::before(&bound))
    }

    /// Requires the value to be later than `bound`.
    pub fn after(self, bound: T) -> Self {
        self.satisfies_with(|v| *v > bound, |_| errors::after(&bound))
    }

    /// Requires the value to lie within `start..=end`.
    pub fn within(self, start: T, end: T) -> Self {
        self.satisfies_with(
            |v| start <= *v && *v <= end,
            |_| errors::within(&start, &end),
        )
    }
}
