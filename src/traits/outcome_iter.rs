//! Aggregation utilities over collections of outcomes.
//!
//! - [`sequence`](OutcomeIterExt::sequence) / [`traverse`](TraverseExt::traverse)
//!   stop at the first failure;
//! - [`collect_all`](OutcomeIterExt::collect_all) evaluates every entry and
//!   folds all failures;
//! - [`partition_outcomes`](OutcomeIterExt::partition_outcomes) never fails;
//! - [`choose_successes`](OutcomeIterExt::choose_successes) /
//!   [`choose_failures`](OutcomeIterExt::choose_failures) lazily keep one side.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OutcomeIterExt;
//! use outcome_rail::{Error, Outcome};
//!
//! let outcomes = vec![
//!     Outcome::success(1),
//!     Outcome::failure(Error::msg("bad")),
//!     Outcome::success(3),
//! ];
//!
//! let (values, errors) = outcomes.into_iter().partition_outcomes();
//! assert_eq!(values, vec![1, 3]);
//! assert_eq!(errors, vec![Error::msg("bad")]);
//! ```
use crate::types::accumulator::Accumulator;
use crate::types::alloc_type::Vec;
use crate::types::{Error, Outcome};
use core::iter::FusedIterator;

/// Extension methods for iterators of [`Outcome`]s.
pub trait OutcomeIterExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Collects all values in order, returning the first failure instead if
    /// one occurs. Items after the failure are not pulled.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OutcomeIterExt;
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let ok = vec![Outcome::success(1), Outcome::success(2)].into_iter().sequence();
    /// assert_eq!(ok, Outcome::success(vec![1, 2]));
    ///
    /// let failed = vec![Outcome::success(1), Outcome::failure(Error::msg("x"))].into_iter().sequence();
    /// assert_eq!(failed.error().message(), "x");
    /// ```
    fn sequence(self) -> Outcome<Vec<T>> {
        self.collect()
    }

    /// Evaluates every outcome. One failure is reported as-is, several as an
    /// aggregate in their original order; successful values are discarded
    /// when anything failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OutcomeIterExt;
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let e1 = Error::validation("A", "first");
    /// let e2 = Error::validation("B", "second");
    /// let all = vec![Outcome::failure(e1.clone()), Outcome::success(2), Outcome::failure(e2.clone())]
    ///     .into_iter()
    ///     .collect_all();
    ///
    /// let errors = all.error().as_aggregate().unwrap().errors().to_vec();
    /// assert_eq!(errors, vec![e1, e2]);
    /// ```
    fn collect_all(self) -> Outcome<Vec<T>> {
        let mut acc = Accumulator::new();
        let mut values = Vec::new();
        for outcome in self {
            if let Some(value) = acc.absorb(outcome) {
                values.push(value);
            }
        }
        acc.into_outcome(values)
    }

    /// Splits into ordered successes and ordered errors.
    fn partition_outcomes(self) -> (Vec<T>, Vec<Error>) {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in self {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => errors.push(error),
            }
        }
        (values, errors)
    }

    /// Lazily yields only the success values.
    fn choose_successes(self) -> ChooseSuccesses<Self> {
        ChooseSuccesses { inner: self }
    }

    /// Lazily yields only the errors.
    fn choose_failures(self) -> ChooseFailures<Self> {
        ChooseFailures { inner: self }
    }
}

impl<I, T> OutcomeIterExt<T> for I where I: Iterator<Item = Outcome<T>> {}

/// Map-then-sequence in a single pass.
pub trait TraverseExt: Iterator + Sized {
    /// Applies `f` to each item and collects the values, stopping at the
    /// first failure; `f` is not called for later items.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::TraverseExt;
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let parsed = ["1", "2", "3"]
    ///     .into_iter()
    ///     .traverse(|s| s.parse::<i32>().map_or_else(|_| Outcome::failure(Error::msg("nan")), Outcome::success));
    /// assert_eq!(parsed, Outcome::success(vec![1, 2, 3]));
    /// ```
    fn traverse<U, F>(self, f: F) -> Outcome<Vec<U>>
    where
        F: FnMut(Self::Item) -> Outcome<U>,
    {
        self.map(f).collect()
    }
}

impl<I: Iterator> TraverseExt for I {}

/// Iterator returned by [`OutcomeIterExt::choose_successes`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChooseSuccesses<I> {
    inner: I,
}

impl<I, T> Iterator for ChooseSuccesses<I>
where
    I: Iterator<Item = Outcome<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(|outcome| match outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I, T> FusedIterator for ChooseSuccesses<I> where I: FusedIterator<Item = Outcome<T>> {}

/// Iterator returned by [`OutcomeIterExt::choose_failures`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChooseFailures<I> {
    inner: I,
}

impl<I, T> Iterator for ChooseFailures<I>
where
    I: Iterator<Item = Outcome<T>>,
{
    type Item = Error;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(|outcome| match outcome {
            Outcome::Failure(error) => Some(error),
            Outcome::Success(_) => None,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I, T> FusedIterator for ChooseFailures<I> where I: FusedIterator<Item = Outcome<T>> {}
