//! Combinators over ordered sequences of outcomes and checks.
//!
//! Two policies are offered:
//!
//! - **short-circuit** ([`bind_sequence`](Outcome::bind_sequence),
//!   [`ensure_sequence`](Outcome::ensure_sequence)) stops at the first
//!   failure and never evaluates later entries;
//! - **accumulate** ([`bind_all`](Outcome::bind_all),
//!   [`ensure_all`](Outcome::ensure_all)) evaluates everything and folds
//!   the errors with [`Error::combine`].
use super::{Outcome, UnitOutcome};
use crate::types::accumulator::Accumulator;
use crate::types::Error;

impl Outcome<()> {
    /// Runs each operation in order, stopping at the first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, UnitOutcome};
    ///
    /// let mut ran = Vec::new();
    /// let steps: Vec<Box<dyn FnOnce() -> UnitOutcome + '_>> = vec![
    ///     Box::new(|| UnitOutcome::ok()),
    ///     Box::new(|| UnitOutcome::failure(Error::msg("second failed"))),
    ///     Box::new(|| { ran.push("third"); UnitOutcome::ok() }),
    /// ];
    ///
    /// let outcome = UnitOutcome::bind_sequence(steps);
    /// assert_eq!(outcome.error().message(), "second failed");
    /// assert!(ran.is_empty());
    /// ```
    pub fn bind_sequence<I, F, U>(operations: I) -> UnitOutcome
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Outcome<U>,
    {
        for operation in operations {
            if let Outcome::Failure(error) = operation() {
                return Outcome::Failure(error);
            }
        }
        Outcome::Success(())
    }

    /// Evaluates each predicate in order, failing with the error paired to
    /// the first one that returns `false`. Later predicates are not run.
    pub fn ensure_sequence<I, P>(checks: I) -> UnitOutcome
    where
        I: IntoIterator<Item = (P, Error)>,
        P: FnOnce() -> bool,
    {
        for (predicate, error) in checks {
            if !predicate() {
                return Outcome::Failure(error);
            }
        }
        Outcome::Success(())
    }

    /// Inspects every outcome and reports all failures.
    ///
    /// One failure is returned as-is; several are wrapped in an
    /// [`AggregateError`](crate::AggregateError) in their original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{AggregateError, Error, UnitOutcome};
    ///
    /// let e1 = Error::validation("A", "first");
    /// let e2 = Error::validation("B", "second");
    ///
    /// let single = UnitOutcome::bind_all([UnitOutcome::failure(e1.clone())]);
    /// assert_eq!(single.error(), &e1);
    ///
    /// let many = UnitOutcome::bind_all([
    ///     UnitOutcome::failure(e1.clone()),
    ///     UnitOutcome::ok(),
    ///     UnitOutcome::failure(e2.clone()),
    /// ]);
    /// let expected = Error::from(AggregateError::new([e1, e2]).unwrap());
    /// assert_eq!(many.error(), &expected);
    /// ```
    pub fn bind_all<I, U>(outcomes: I) -> UnitOutcome
    where
        I: IntoIterator<Item = Outcome<U>>,
    {
        let mut acc = Accumulator::new();
        for outcome in outcomes {
            let _ = acc.absorb(outcome);
        }
        acc.into_outcome(())
    }

    /// Accumulating counterpart of [`ensure_sequence`](Outcome::ensure_sequence)
    /// over already-evaluated conditions.
    pub fn ensure_all<I>(checks: I) -> UnitOutcome
    where
        I: IntoIterator<Item = (bool, Error)>,
    {
        let mut acc = Accumulator::new();
        for (condition, error) in checks {
            acc.check(condition, error);
        }
        acc.into_outcome(())
    }
}

impl<T, V> FromIterator<Outcome<T>> for Outcome<V>
where
    V: FromIterator<T>,
{
    /// Collects success values, stopping at the first failure.
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut failure = None;
        let values: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(values),
        }
    }
}
