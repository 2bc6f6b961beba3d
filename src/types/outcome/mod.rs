use crate::traits::IntoError;
use crate::types::{Error, Maybe};
use crate::validation::EnsureBuilder;
use core::fmt::Display;

mod combine;

/// Panic message used when the value of a failed [`Outcome`] is read.
pub const FAILURE_VALUE_ACCESS: &str = "Outcome is a failure; no value is available";
/// Panic message used when the error of a successful [`Outcome`] is read.
pub const SUCCESS_ERROR_ACCESS: &str = "Outcome is a success; no error is available";

/// Either a success value or a domain [`Error`].
///
/// `Outcome<()>` (see [`UnitOutcome`]) is the value-less form. The default
/// instance is a success holding `T::default()`, so zero-initialised
/// storage is always a success.
///
/// # Type Parameters
///
/// * `T` - The success value type, `()` when omitted
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome, UnitOutcome};
///
/// let ok = Outcome::success(5);
/// assert!(ok.is_success());
/// assert_eq!(*ok.value(), 5);
///
/// let failed: Outcome<i32> = Outcome::failure(Error::msg("boom"));
/// assert!(failed.is_failure());
///
/// assert!(Outcome::<i32>::default().is_success());
/// assert_eq!(*Outcome::<i32>::default().value(), 0);
/// assert!(UnitOutcome::default().is_success());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(Error),
}

/// The value-less outcome: success or an [`Error`].
pub type UnitOutcome = Outcome<()>;

impl<T: Default> Default for Outcome<T> {
    #[inline]
    fn default() -> Self {
        Self::Success(T::default())
    }
}

impl UnitOutcome {
    /// The unit success.
    #[inline]
    pub fn ok() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T> {
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    #[inline]
    pub fn failure<E>(error: E) -> Self
    where
        E: IntoError,
    {
        Self::Failure(error.into_error())
    }

    /// Named form of the value-to-success conversion.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::Success(value)
    }

    /// Named form of the error-to-failure conversion.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self::Failure(error)
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`FAILURE_VALUE_ACCESS`] on a failure.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", FAILURE_VALUE_ACCESS),
        }
    }

    /// # Panics
    ///
    /// Panics with [`FAILURE_VALUE_ACCESS`] on a failure.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", FAILURE_VALUE_ACCESS),
        }
    }

    /// Returns a reference to the error.
    ///
    /// # Panics
    ///
    /// Panics with [`SUCCESS_ERROR_ACCESS`] on a success.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("{}", SUCCESS_ERROR_ACCESS),
        }
    }

    /// # Panics
    ///
    /// Panics with [`SUCCESS_ERROR_ACCESS`] on a success.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> Error {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("{}", SUCCESS_ERROR_ACCESS),
        }
    }

    #[must_use]
    #[inline]
    pub fn try_get_value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn try_get_error(&self) -> Option<&Error> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    /// Transforms the success value; a failure passes through and `f` is not run.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::success(2).map(|x| x + 1), Outcome::success(3));
    ///
    /// let failed: Outcome<i32> = Outcome::failure(Error::msg("boom"));
    /// assert_eq!(failed.map(|x| x + 1).error().message(), "boom");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a fallible step, short-circuiting on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// fn parse(input: &str) -> Outcome<i32> {
    ///     input
    ///         .parse::<i32>()
    ///         .map_or_else(|_| Outcome::failure(Error::validation("Parse", "not a number")), Outcome::success)
    /// }
    ///
    /// assert_eq!(Outcome::success("42").bind(parse), Outcome::success(42));
    /// assert!(Outcome::success("x").bind(parse).is_failure());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Keeps a success only when `predicate` holds, otherwise fails with `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let adult = Outcome::success(20).ensure(|age| *age >= 18, Error::validation("Age", "minor"));
    /// assert!(adult.is_success());
    ///
    /// let minor = Outcome::success(12).ensure(|age| *age >= 18, Error::validation("Age", "minor"));
    /// assert_eq!(minor.error().code(), "Age");
    /// ```
    #[inline]
    pub fn ensure<P, E>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: IntoError,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(error.into_error())
                }
            }
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Runs exactly one of the two branches and returns its result.
    #[inline]
    pub fn match_with<R, S, F>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(error) => failure(error),
        }
    }

    #[inline]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error)),
        }
    }

    /// Recovers from a failure; `recovery` never runs on a success.
    #[inline]
    pub fn or_else<F>(self, recovery: F) -> Self
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    #[inline]
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Pairs two successes, returning the first failure otherwise.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    /// Returns the value, or panics with the error's display form.
    ///
    /// # Panics
    ///
    /// Panics on a failure.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let failed: Outcome<i32> = Outcome::failure(Error::not_found("User", "no such user"));
    /// failed.value_or_panic(); // panics with "NotFoundError: no such user"
    /// ```
    #[inline]
    #[track_caller]
    pub fn value_or_panic(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{error}"),
        }
    }

    /// Returns the value, or panics with the message built by `factory`.
    ///
    /// # Panics
    ///
    /// Panics on a failure.
    #[inline]
    #[track_caller]
    pub fn value_or_panic_with<F, M>(self, factory: F) -> T
    where
        F: FnOnce(&Error) -> M,
        M: Display,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{}", factory(&error)),
        }
    }

    /// Panics with the error's display form on a failure, does nothing otherwise.
    ///
    /// # Panics
    ///
    /// Panics on a failure.
    #[inline]
    #[track_caller]
    pub fn panic_if_failure(&self) {
        if let Self::Failure(error) = self {
            panic!("{error}");
        }
    }

    /// # Panics
    ///
    /// Panics on a failure, with the message built by `factory`.
    #[inline]
    #[track_caller]
    pub fn panic_if_failure_with<F, M>(&self, factory: F)
    where
        F: FnOnce(&Error) -> M,
        M: Display,
    {
        if let Self::Failure(error) = self {
            panic!("{}", factory(error));
        }
    }

    /// Discards the success value.
    #[inline]
    pub fn into_unit(self) -> UnitOutcome {
        match self {
            Self::Success(_) => Outcome::Success(()),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Keeps the success value and drops the error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into a core `Result`, e.g. to use the `?` operator.
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Starts a fluent validation chain over this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let name = Outcome::success("Ferris")
    ///     .ensure_that()
    ///     .satisfies(|n| !n.is_empty(), Error::validation("Name.Empty", "required"))
    ///     .satisfies(|n| n.len() <= 32, Error::validation("Name.Long", "too long"))
    ///     .build();
    ///
    /// assert_eq!(name, Outcome::success("Ferris"));
    /// ```
    #[inline]
    pub fn ensure_that(self) -> EnsureBuilder<T> {
        EnsureBuilder::from_outcome(self)
    }
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T, E: IntoError> From<Result<T, E>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into_error()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
