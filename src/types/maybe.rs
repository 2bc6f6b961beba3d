use crate::traits::IntoError;
use crate::types::{Error, Outcome};
use crate::validation::FilterBuilder;

/// Panic message used when the value of an empty [`Maybe`] is read.
pub const NONE_VALUE_ACCESS: &str = "Maybe has no value";

/// An optional value: either `Some(T)` or `None`.
///
/// `Maybe` mirrors the core `Option` but carries the fluent combinator and
/// validation surface of this crate. Values cross over from external
/// optional sources only through [`Maybe::from_option`] (or the matching
/// `From` impl).
///
/// # Type Parameters
///
/// * `T` - The wrapped value type
///
/// # Examples
///
/// ```
/// use outcome_rail::Maybe;
///
/// let some = Maybe::some(5);
/// assert!(some.is_some());
/// assert_eq!(*some.value(), 5);
/// assert!(some == 5);
///
/// let none: Maybe<i32> = Maybe::none();
/// assert!(none.is_none());
/// assert_eq!(none, Maybe::default());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the empty value.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Adapts a core `Option`: `Some` stays present, `None` becomes absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let missing: Option<&str> = None;
    /// assert!(Maybe::from_option(missing).is_none());
    /// assert_eq!(Maybe::from_option(Some(3)), Maybe::some(3));
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics with [`NONE_VALUE_ACCESS`] when the `Maybe` is empty. Prefer
    /// [`match_with`](Maybe::match_with) or a `match` when absence is possible.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", NONE_VALUE_ACCESS),
        }
    }

    /// Consumes the `Maybe` and returns the value.
    ///
    /// # Panics
    ///
    /// Panics with [`NONE_VALUE_ACCESS`] when the `Maybe` is empty.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", NONE_VALUE_ACCESS),
        }
    }

    /// Returns `(true, value)` when present and `(false, T::default())`
    /// otherwise. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(7).try_get_value(), (true, 7));
    /// assert_eq!(Maybe::<i32>::none().try_get_value(), (false, 0));
    /// ```
    #[must_use]
    pub fn try_get_value(&self) -> (bool, T)
    where
        T: Clone + Default,
    {
        match self {
            Self::Some(value) => (true, value.clone()),
            Self::None => (false, T::default()),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    #[must_use]
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Transforms the value, leaving `None` untouched; `f` only runs on `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(21).map(|x| x * 2), Maybe::some(42));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 2), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).bind(half).bind(half), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Returns `self` when present, otherwise the result of `fallback`.
    ///
    /// `fallback` is never invoked for a `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let mut calls = 0;
    /// let kept = Maybe::some(1).or_else(|| { calls += 1; Maybe::some(2) });
    /// assert_eq!(kept, Maybe::some(1));
    /// assert_eq!(calls, 0);
    ///
    /// let replaced = Maybe::none().or_else(|| Maybe::some(2));
    /// assert_eq!(replaced, Maybe::some(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => fallback(),
        }
    }

    /// Eager variant of [`or_else`](Maybe::or_else).
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Runs exactly one of the two branches and returns its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let label = Maybe::some(3).match_with(|n| format!("{n} items"), || "empty".to_string());
    /// assert_eq!(label, "3 items");
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, some: S, none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => some(value),
            Self::None => none(),
        }
    }

    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Pairs two present values; absent if either side is.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    /// Runs `f` on the value for its side effect and returns `self`.
    #[inline]
    pub fn on_some<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    pub fn on_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }

    /// Runs exactly one of the two side effects and returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let _ = Maybe::some(3).on_either(|v| log.borrow_mut().push(*v), || log.borrow_mut().push(0));
    /// assert_eq!(log.into_inner(), [3]);
    /// ```
    #[inline]
    pub fn on_either<S, N>(self, some: S, none: N) -> Self
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        match &self {
            Self::Some(value) => some(value),
            Self::None => none(),
        }
        self
    }

    /// Turns a present value into a success and absence into `error`.
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T>
    where
        E: IntoError,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error.into_error()),
        }
    }

    /// Like [`to_outcome`](Maybe::to_outcome) but builds the error lazily.
    #[inline]
    pub fn to_outcome_with<F>(self, error: F) -> Outcome<T>
    where
        F: FnOnce() -> Error,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error()),
        }
    }

    /// Starts a fluent filter chain over this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let port = Maybe::some(8080)
    ///     .filter_that()
    ///     .satisfies(|p| *p > 1024)
    ///     .satisfies(|p| *p < 65535)
    ///     .build();
    ///
    /// assert_eq!(port, Maybe::some(8080));
    /// ```
    #[inline]
    pub fn filter_that(self) -> FilterBuilder<T> {
        FilterBuilder::from_maybe(self)
    }

    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_option().into_iter()
    }
}

impl<T: PartialEq> PartialEq<T> for Maybe<T> {
    /// A `Maybe` equals a bare value iff it is `Some` of an equal value.
    #[inline]
    fn eq(&self, other: &T) -> bool {
        match self {
            Self::Some(value) => value == other,
            Self::None => false,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
