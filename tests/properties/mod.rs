use outcome_rail::{Error, Maybe, Outcome, UnitOutcome};
use proptest::prelude::*;

fn any_maybe() -> impl Strategy<Value = Maybe<i64>> {
    proptest::option::of(any::<i64>()).prop_map(Maybe::from)
}

fn any_outcome() -> impl Strategy<Value = Outcome<i64>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::success),
        "[A-Z][a-z]{0,8}".prop_map(|code| Outcome::failure(Error::validation(code, "failed"))),
    ]
}

proptest! {
    #[test]
    fn some_holds_its_value(v in any::<i64>()) {
        let some = Maybe::some(v);
        prop_assert!(some.is_some());
        prop_assert_eq!(*some.value(), v);
        prop_assert!(Maybe::<i64>::none().is_none());
    }

    #[test]
    fn map_preserves_presence(m in any_maybe()) {
        prop_assert_eq!(m.map(|v| v.wrapping_mul(3)).is_some(), m.is_some());
    }

    #[test]
    fn bind_to_none_is_none(m in any_maybe()) {
        prop_assert!(m.bind(|_| Maybe::<i64>::none()).is_none());
    }

    #[test]
    fn filter_with_always_true_is_identity(m in any_maybe()) {
        prop_assert_eq!(m.filter(|_| true), m);
    }

    #[test]
    fn or_else_runs_fallback_only_when_empty(m in any_maybe()) {
        let mut invoked = false;
        let _ = m.or_else(|| {
            invoked = true;
            Maybe::some(0)
        });
        prop_assert_eq!(invoked, m.is_none());
    }

    #[test]
    fn outcome_maybe_round_trip_keeps_successes(o in any_outcome()) {
        let back = o.clone().to_maybe().to_outcome(Error::msg("absent"));
        if o.is_success() {
            prop_assert_eq!(back, o);
        } else {
            prop_assert!(back.is_failure());
        }
    }

    #[test]
    fn bind_all_error_count_matches_failures(
        outcomes in proptest::collection::vec(any_outcome(), 0..12)
    ) {
        let failures = outcomes.iter().filter(|o| o.is_failure()).count();
        let combined = UnitOutcome::bind_all(outcomes);

        match failures {
            0 => prop_assert!(combined.is_success()),
            1 => prop_assert!(!combined.error().is_aggregate()),
            n => prop_assert_eq!(
                combined.error().as_aggregate().map(|agg| agg.len()),
                Some(n)
            ),
        }
    }

    #[test]
    fn ensure_that_matches_plain_predicate(v in any::<i64>(), bound in any::<i64>()) {
        let outcome = Outcome::success(v)
            .ensure_that()
            .satisfies(|n| *n < bound, Error::validation("Bound", "too large"))
            .build();
        prop_assert_eq!(outcome.is_success(), v < bound);
    }
}
