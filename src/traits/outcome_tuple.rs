use crate::types::Outcome;

/// Error-accumulating combination of heterogeneous outcomes.
///
/// Implemented for tuples of 2 to 8 [`Outcome`]s. Every element is
/// inspected; one failure is reported as-is and several are folded into an
/// aggregate, exactly like [`Outcome::bind_all`].
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OutcomeTuple;
/// use outcome_rail::{Error, Outcome};
///
/// struct User { name: String, age: u8 }
///
/// let user = (Outcome::success("Ferris".to_string()), Outcome::success(7u8))
///     .bind_all_append(|(name, age)| User { name, age });
/// assert_eq!(user.value().name, "Ferris");
///
/// let invalid = (
///     Outcome::<String>::failure(Error::validation("Name", "required")),
///     Outcome::<u8>::failure(Error::validation("Age", "required")),
/// )
///     .collect_all();
/// assert!(invalid.error().is_aggregate());
/// ```
pub trait OutcomeTuple: Sized {
    /// The tuple of success values.
    type Values;

    /// Returns all values, or the folded errors of every failure.
    fn collect_all(self) -> Outcome<Self::Values>;

    /// Maps the tuple of values with `f` when every outcome succeeded.
    #[inline]
    fn bind_all_append<R, F>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(Self::Values) -> R,
    {
        self.collect_all().map(f)
    }

    /// Like [`bind_all_append`](OutcomeTuple::bind_all_append) with a fallible mapper.
    #[inline]
    fn bind_all_append_with<R, F>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(Self::Values) -> Outcome<R>,
    {
        self.collect_all().bind(f)
    }
}
