//! Numeric comparisons, ranges and sign checks.
//!
//! All comparisons are exact; there is no epsilon tolerance for floats.
//!
//! # Examples
//!
//! ```
//! use core::ops::Bound;
//! use outcome_rail::validation::rules::numeric;
//!
//! let range = (Bound::Excluded(0), Bound::Included(10));
//! assert!(numeric::in_range(0, range).is_failure());
//! assert!(numeric::in_range(5, range).is_success());
//! assert!(numeric::in_range(10, range).is_success());
//!
//! assert!(numeric::positive(0.0_f64).is_failure());
//! ```
use super::gate;
use crate::types::alloc_type::{format, String};
use crate::types::UnitOutcome;
use crate::validation::EnsureBuilder;
use core::fmt::Display;
use core::ops::{Bound, RangeBounds};

/// Number types the numeric rules accept.
pub trait Numeric: Copy + PartialOrd + Display {
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($zero:literal => $($ty:ty),+) => {
        $(impl Numeric for $ty {
            const ZERO: Self = $zero;
        })+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);

/// Default error catalog for numeric rules.
pub mod errors {
    use crate::types::alloc_type::format;
    use crate::types::Error;
    use core::fmt::Display;

    pub fn greater_than(min: impl Display) -> Error {
        Error::validation(
            "Number.GreaterThan",
            format!("Value must be greater than {min}."),
        )
    }

    pub fn greater_than_or_equal(min: impl Display) -> Error {
        Error::validation(
            "Number.GreaterThanOrEqual",
            format!("Value must be greater than or equal to {min}."),
        )
    }

    pub fn less_than(max: impl Display) -> Error {
        Error::validation("Number.LessThan", format!("Value must be less than {max}."))
    }

    pub fn less_than_or_equal(max: impl Display) -> Error {
        Error::validation(
            "Number.LessThanOrEqual",
            format!("Value must be less than or equal to {max}."),
        )
    }

    /// `range` is rendered in interval notation, e.g. `(0, 10]`.
    pub fn in_range(range: impl Display) -> Error {
        Error::validation("Number.InRange", format!("Value must be within {range}."))
    }

    pub fn positive() -> Error {
        Error::validation("Number.Positive", "Value must be positive.")
    }

    pub fn negative() -> Error {
        Error::validation("Number.Negative", "Value must be negative.")
    }

    pub fn zero() -> Error {
        Error::validation("Number.Zero", "Value must be zero.")
    }

    pub fn non_zero() -> Error {
        Error::validation("Number.NonZero", "Value must not be zero.")
    }

    pub fn non_positive() -> Error {
        Error::validation("Number.NonPositive", "Value must not be positive.")
    }

    pub fn non_negative() -> Error {
        Error::validation("Number.NonNegative", "Value must not be negative.")
    }
}

/// Succeeds when `value > min`.
pub fn greater_than<T: Numeric>(value: T, min: T) -> UnitOutcome {
    gate(value > min, || errors::greater_than(min))
}

/// Succeeds when `value >= min`.
pub fn greater_than_or_equal<T: Numeric>(value: T, min: T) -> UnitOutcome {
    gate(value >= min, || errors::greater_than_or_equal(min))
}

/// Succeeds when `value < max`.
pub fn less_than<T: Numeric>(value: T, max: T) -> UnitOutcome {
    gate(value < max, || errors::less_than(max))
}

/// Succeeds when `value <= max`.
pub fn less_than_or_equal<T: Numeric>(value: T, max: T) -> UnitOutcome {
    gate(value <= max, || errors::less_than_or_equal(max))
}

/// Checks `value` against both bounds of `range`, each with its own
/// inclusivity. Accepts `a..b`, `a..=b`, `a..` and explicit
/// `(Bound, Bound)` pairs, covering every inclusive/exclusive combination.
///
/// # Examples
///
/// ```
/// use core::ops::Bound;
/// use outcome_rail::validation::rules::numeric;
///
/// let open = (Bound::Excluded(0), Bound::Excluded(10));
/// assert!(numeric::in_range(0, open).is_failure());
/// assert!(numeric::in_range(0, 0..=10).is_success());
/// ```
pub fn in_range<T, R>(value: T, range: R) -> UnitOutcome
where
    T: Numeric,
    R: RangeBounds<T>,
{
    gate(range.contains(&value), || {
        errors::in_range(describe_range(&range))
    })
}

/// Succeeds when `value` is strictly greater than zero.
pub fn positive<T: Numeric>(value: T) -> UnitOutcome {
    gate(value > T::ZERO, errors::positive)
}

/// Succeeds when `value` is strictly less than zero.
pub fn negative<T: Numeric>(value: T) -> UnitOutcome {
    gate(value < T::ZERO, errors::negative)
}

/// Succeeds when `value` equals zero exactly.
#[allow(clippy::float_cmp)]
pub fn zero<T: Numeric>(value: T) -> UnitOutcome {
    gate(value == T::ZERO, errors::zero)
}

/// Succeeds when `value` is anything but zero.
#[allow(clippy::float_cmp)]
pub fn non_zero<T: Numeric>(value: T) -> UnitOutcome {
    gate(value != T::ZERO, errors::non_zero)
}

/// Succeeds when `value <= 0`.
pub fn non_positive<T: Numeric>(value: T) -> UnitOutcome {
    gate(value <= T::ZERO, errors::non_positive)
}

/// Succeeds when `value >= 0`.
pub fn non_negative<T: Numeric>(value: T) -> UnitOutcome {
    gate(value >= T::ZERO, errors::non_negative)
}

/// Renders a range in interval notation: `[a, b]`, `(a, b)`, `[a, +inf)`, ...
fn describe_range<T: Display, R: RangeBounds<T>>(range: &R) -> String {
    let lower = match range.start_bound() {
        Bound::Included(min) => format!("[{min}"),
        Bound::Excluded(min) => format!("({min}"),
        Bound::Unbounded => String::from("(-inf"),
    };
    let upper = match range.end_bound() {
        Bound::Included(max) => format!("{max}]"),
        Bound::Excluded(max) => format!("{max})"),
        Bound::Unbounded => String::from("+inf)"),
    };
    format!("{lower}, {upper}")
}

/// Numeric rules as builder steps. Each step is skipped once the builder has
/// failed.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::EnsureBuilder;
///
/// let port = EnsureBuilder::new(80u16).greater_than(1023).less_than(49152).build();
/// assert_eq!(port.error().code(), "Number.GreaterThan");
/// ```
impl<T: Numeric> EnsureBuilder<T> {
    /// Requires the value to be greater than `min`.
    pub fn greater_than(self, min: T) -> Self {
        self.satisfies_with(|v| *v > min, |_| errors::greater_than(min))
    }

    /// Requires the value to be at least `min`.
    pub fn greater_than_or_equal(self, min: T) -> Self {
        self.satisfies_with(|v| *v >= min, |_| errors::greater_than_or_equal(min))
    }

    /// Requires the value to be less than `max`.
    pub fn less_than(self, max: T) -> Self {
        self.satisfies_with(|v| *v < max, |_| errors::less_than(max))
    }

    /// Requires the value to be at most `max`.
    pub fn less_than_or_equal(self, max: T) -> Self {
        self.satisfies_with(|v| *v <= max, |_| errors::less_than_or_equal(max))
    }

    /// See [`in_range`].
    pub fn in_range<R: RangeBounds<T>>(self, range: R) -> Self {
        self.satisfies_with(
            |v| range.contains(v),
            |_| errors::in_range(describe_range(&range)),
        )
    }

    /// Requires a strictly positive value.
    pub fn positive(self) -> Self {
        self.satisfies_with(|v| *v > T::ZERO, |_| errors::positive())
    }

    /// Requires a strictly negative value.
    pub fn negative(self) -> Self {
        self.satisfies_with(|v| *v < T::ZERO, |_| errors::negative())
    }

    /// Requires the value to equal zero.
    #[allow(clippy::float_cmp)]
    pub fn zero(self) -> Self {
        self.satisfies_with(|v| *v == T::ZERO, |_| errors::zero())
    }

    /// Rejects zero.
    #[allow(clippy::float_cmp)]
    pub fn non_zero(self) -> Self {
        self.satisfies_with(|v| *v != T::ZERO, |_| errors::non_zero())
    }

    /// Rejects strictly positive values.
    pub fn non_positive(self) -> Self {
        self.satisfies_with(|v| *v <= T::ZERO, |_| errors::non_positive())
    }

    /// Rejects strictly negative values.
    pub fn non_negative(self) -> Self {
        self.satisfies_with(|v| *v >= T::ZERO, |_| errors::non_negative())
    }
}
