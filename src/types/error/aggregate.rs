use super::Error;
use crate::types::alloc_type::{String, Vec};
use core::fmt;

/// Separator placed between child messages in an aggregate's message.
const MESSAGE_SEPARATOR: &str = "; ";

/// An ordered, non-empty list of errors reported as one.
///
/// The aggregate message is the child messages joined with `"; "`.
/// Construction never flattens nested aggregates; call
/// [`flatten`](AggregateError::flatten) to obtain a single-level list.
///
/// # Examples
///
/// ```
/// use outcome_rail::{AggregateError, Error};
///
/// let agg = AggregateError::new([
///     Error::validation("Name.Empty", "name is required"),
///     Error::validation("Age.Negative", "age cannot be negative"),
/// ])
/// .unwrap();
///
/// assert_eq!(agg.len(), 2);
/// assert_eq!(agg.message(), "name is required; age cannot be negative");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateError {
    errors: Vec<Error>,
    message: String,
}

/// Returned when an [`AggregateError`] is built from no errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyAggregate;

impl fmt::Display for EmptyAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an aggregate error requires at least one child error")
    }
}

impl core::error::Error for EmptyAggregate {}

impl AggregateError {
    /// Builds an aggregate from an ordered sequence of errors.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAggregate`] when `errors` yields nothing.
    pub fn new<I>(errors: I) -> Result<Self, EmptyAggregate>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: Vec<Error> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(EmptyAggregate);
        }
        Ok(Self::from_vec(errors))
    }

    /// Callers guarantee `errors` is non-empty.
    pub(crate) fn from_vec(errors: Vec<Error>) -> Self {
        debug_assert!(!errors.is_empty());
        let mut message = String::new();
        for (index, error) in errors.iter().enumerate() {
            if index > 0 {
                message.push_str(MESSAGE_SEPARATOR);
            }
            message.push_str(error.message());
        }
        Self { errors, message }
    }

    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    #[inline]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns a copy with every nested aggregate replaced by its leaves,
    /// depth-first and in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{AggregateError, Error};
    ///
    /// let inner = Error::combine([Error::msg("b"), Error::msg("c")]).unwrap();
    /// let outer = AggregateError::new([Error::msg("a"), inner]).unwrap();
    /// assert_eq!(outer.len(), 2);
    ///
    /// let flat = outer.flatten();
    /// let messages: Vec<_> = flat.iter().map(Error::message).collect();
    /// assert_eq!(messages, ["a", "b", "c"]);
    /// ```
    pub fn flatten(&self) -> Self {
        let mut leaves = Vec::with_capacity(self.errors.len());
        collect_leaves(&self.errors, &mut leaves);
        Self::from_vec(leaves)
    }
}

fn collect_leaves(errors: &[Error], out: &mut Vec<Error>) {
    for error in errors {
        match error {
            Error::Aggregate(nested) => collect_leaves(&nested.errors, out),
            leaf => out.push(leaf.clone()),
        }
    }
}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AggregateError {
    type Item = Error;
    type IntoIter = alloc::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl From<AggregateError> for Error {
    #[inline]
    fn from(aggregate: AggregateError) -> Self {
        Error::Aggregate(aggregate)
    }
}
