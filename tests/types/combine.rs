use outcome_rail::{AggregateError, Error, Outcome, UnitOutcome};
use std::cell::Cell;

#[test]
fn bind_all_returns_single_failure_unwrapped() {
    let e1 = Error::validation("A", "first");
    let outcome = UnitOutcome::bind_all([UnitOutcome::failure(e1.clone())]);
    assert_eq!(outcome, Outcome::Failure(e1));
}

#[test]
fn bind_all_aggregates_many_failures_in_order() {
    let e1 = Error::validation("A", "first");
    let e2 = Error::not_found("B", "second");

    let outcome = UnitOutcome::bind_all([
        Outcome::failure(e1.clone()),
        Outcome::success(7),
        Outcome::failure(e2.clone()),
    ]);

    let expected = AggregateError::new([e1, e2]).unwrap();
    assert_eq!(outcome, Outcome::Failure(Error::Aggregate(expected)));
}

#[test]
fn bind_all_succeeds_on_empty_and_all_success() {
    assert!(UnitOutcome::bind_all(Vec::<Outcome<i32>>::new()).is_success());
    let all_ok = UnitOutcome::bind_all([Outcome::success(1), Outcome::success(2)]);
    assert!(all_ok.is_success());
}

#[test]
fn bind_sequence_stops_at_first_failure() {
    let calls = Cell::new(0);
    let step = |fail: bool| {
        let calls = &calls;
        move || {
            calls.set(calls.get() + 1);
            if fail {
                UnitOutcome::failure(Error::msg("stopped"))
            } else {
                UnitOutcome::ok()
            }
        }
    };

    let outcome = UnitOutcome::bind_sequence([step(false), step(true), step(false)]);

    assert_eq!(outcome.error().message(), "stopped");
    assert_eq!(calls.get(), 2);
}

#[test]
fn ensure_sequence_evaluates_lazily() {
    let evaluated = Cell::new(0);
    let check = |result: bool| {
        let evaluated = &evaluated;
        move || {
            evaluated.set(evaluated.get() + 1);
            result
        }
    };

    let outcome = UnitOutcome::ensure_sequence([
        (check(true), Error::msg("one")),
        (check(false), Error::msg("two")),
        (check(false), Error::msg("three")),
    ]);

    assert_eq!(outcome.error().message(), "two");
    assert_eq!(evaluated.get(), 2);
}

#[test]
fn ensure_all_collects_every_false_condition() {
    let outcome = UnitOutcome::ensure_all([
        (false, Error::msg("a")),
        (true, Error::msg("b")),
        (false, Error::msg("c")),
    ]);

    let codes: Vec<_> = outcome.error().iter().map(Error::message).collect();
    assert_eq!(codes, ["a", "c"]);
}

#[test]
fn collecting_outcomes_short_circuits() {
    let pulled = Cell::new(0);
    let source = [
        Outcome::success(1),
        Outcome::failure(Error::msg("stop")),
        Outcome::success(3),
    ];

    let collected: Outcome<Vec<i32>> = source
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1))
        .collect();

    assert_eq!(collected.error().message(), "stop");
    assert_eq!(pulled.get(), 2);
}
