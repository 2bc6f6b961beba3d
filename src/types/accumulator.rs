use crate::types::{Error, ErrorVec, Outcome};

/// Collects errors while every entry of a batch is evaluated.
///
/// This is the shared engine behind the accumulating combinators
/// ([`Outcome::bind_all`], [`Outcome::ensure_all`], `collect_all` and
/// `bind_all_append`): items are pushed as they fail, and the final fold
/// goes through [`Error::combine`], so a single failure is reported
/// unwrapped and several become one aggregate.
///
/// # Examples
///
/// ```
/// use outcome_rail::types::accumulator::Accumulator;
/// use outcome_rail::{Error, Outcome};
///
/// let mut acc = Accumulator::new();
/// let a = acc.absorb(Outcome::success(1));
/// let b: Option<i32> = acc.absorb(Outcome::failure(Error::msg("bad")));
///
/// assert_eq!(a, Some(1));
/// assert_eq!(b, None);
/// assert_eq!(acc.len(), 1);
/// assert_eq!(acc.into_error(), Some(Error::msg("bad")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accumulator {
    items: ErrorVec<Error>,
}

impl Accumulator {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Adds a single error.
    #[inline]
    pub fn push(&mut self, error: Error) {
        self.items.push(error);
    }

    /// Extends the accumulator with errors from an iterator.
    #[inline]
    pub fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Records the error of a failure and hands back the value of a success.
    #[inline]
    pub fn absorb<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        match outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                self.items.push(error);
                None
            }
        }
    }

    /// Records `error` when `condition` is false.
    #[inline]
    pub fn check(&mut self, condition: bool, error: Error) {
        if !condition {
            self.items.push(error);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// Folds the collected errors: `None` if empty, the error itself if
    /// there is one, an aggregate otherwise.
    pub fn into_error(self) -> Option<Error> {
        #[cfg(feature = "tracing")]
        {
            if self.items.len() > 1 {
                tracing::debug!(
                    count = self.items.len(),
                    "folding errors into an aggregate"
                );
            }
        }
        Error::combine(self.items)
    }

    /// Succeeds with `value` when nothing was collected, fails otherwise.
    #[inline]
    pub fn into_outcome<T>(self, value: T) -> Outcome<T> {
        match self.into_error() {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(value),
        }
    }

    /// Consumes the accumulator and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<Error> {
        self.items
    }
}

impl From<ErrorVec<Error>> for Accumulator {
    fn from(items: ErrorVec<Error>) -> Self {
        Self { items }
    }
}

impl FromIterator<Error> for Accumulator {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl IntoIterator for Accumulator {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
