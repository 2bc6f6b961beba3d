use crate::traits::IntoError;
use crate::types::{Error, Maybe, Outcome, UnitOutcome};

/// Fail-fast validation cursor over a single value.
///
/// The builder is either *valid* (still holding the candidate value) or
/// *invalid* (holding the first error). The transition is one-way: once a
/// check fails, every later [`satisfies`](EnsureBuilder::satisfies) call is
/// skipped without evaluating its predicate.
///
/// The builder is a transparent wrapper around an [`Outcome`], so
/// [`Outcome::ensure_that`] and [`build`](EnsureBuilder::build) are plain
/// moves.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::EnsureBuilder;
/// use outcome_rail::Error;
///
/// let mut checked = 0;
/// let result = EnsureBuilder::new(-5)
///     .satisfies(|n| *n >= 0, Error::validation("E1", "negative"))
///     .satisfies(|_| { checked += 1; true }, Error::validation("E2", "unreachable"))
///     .build();
///
/// assert_eq!(result.error().code(), "E1");
/// assert_eq!(checked, 0);
/// ```
#[must_use]
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureBuilder<T> {
    state: Outcome<T>,
}

impl<T> EnsureBuilder<T> {
    /// Starts a valid chain over `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { state: Outcome::Success(value) }
    }

    /// Starts a chain from an outcome; a failure starts out invalid.
    #[inline]
    pub fn from_outcome(outcome: Outcome<T>) -> Self {
        Self { state: outcome }
    }

    /// Applies `predicate` to the value while the chain is valid; on `false`
    /// the chain becomes invalid with `error`.
    #[inline]
    pub fn satisfies<P, E>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: IntoError,
    {
        self.satisfies_with(predicate, |_| error.into_error())
    }

    /// Like [`satisfies`](EnsureBuilder::satisfies) but builds the error from
    /// the rejected value, only when the predicate fails.
    #[inline]
    pub fn satisfies_with<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> Error,
    {
        let state = match self.state {
            Outcome::Success(value) => {
                if predicate(&value) {
                    Outcome::Success(value)
                } else {
                    Outcome::Failure(error(&value))
                }
            }
            failure => failure,
        };
        Self { state }
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.state.is_success()
    }

    /// Finishes the chain.
    #[inline]
    pub fn build(self) -> Outcome<T> {
        self.state
    }

    /// Finishes the chain, discarding the value on success.
    #[inline]
    pub fn build_unit(self) -> UnitOutcome {
        self.state.into_unit()
    }
}

impl<T> From<EnsureBuilder<T>> for Outcome<T> {
    #[inline]
    fn from(builder: EnsureBuilder<T>) -> Self {
        builder.build()
    }
}

impl<T> From<Outcome<T>> for EnsureBuilder<T> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        Self::from_outcome(outcome)
    }
}

/// Fail-fast filter chain over an optional value.
///
/// Mirrors [`EnsureBuilder`] for [`Maybe`]: a rejected value becomes `None`
/// and later predicates are not evaluated.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::FilterBuilder;
/// use outcome_rail::Maybe;
///
/// let even_and_small = FilterBuilder::new(4)
///     .satisfies(|n| n % 2 == 0)
///     .satisfies(|n| *n < 10)
///     .build();
/// assert_eq!(even_and_small, Maybe::some(4));
///
/// let rejected = FilterBuilder::new(3).satisfies(|n| n % 2 == 0).build();
/// assert!(rejected.is_none());
/// ```
#[must_use]
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBuilder<T> {
    state: Maybe<T>,
}

impl<T> FilterBuilder<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self { state: Maybe::Some(value) }
    }

    #[inline]
    pub fn from_maybe(maybe: Maybe<T>) -> Self {
        Self { state: maybe }
    }

    /// Keeps the value only if `predicate` holds; skipped once empty.
    #[inline]
    pub fn satisfies<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self { state: self.state.filter(predicate) }
    }

    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        self.state.is_some()
    }

    #[inline]
    pub fn build(self) -> Maybe<T> {
        self.state
    }

    /// Finishes the chain, reporting an empty result as `error`.
    #[inline]
    pub fn into_outcome<E>(self, error: E) -> Outcome<T>
    where
        E: IntoError,
    {
        self.state.to_outcome(error)
    }
}

impl<T> From<FilterBuilder<T>> for Maybe<T> {
    #[inline]
    fn from(builder: FilterBuilder<T>) -> Self {
        builder.build()
    }
}

impl<T> From<Maybe<T>> for FilterBuilder<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        Self::from_maybe(maybe)
    }
}
