use outcome_rail::traits::{OutcomeIterExt, TraverseExt};
use outcome_rail::{AggregateError, Error, Outcome};
use std::cell::Cell;

fn sample() -> Vec<Outcome<i32>> {
    vec![
        Outcome::failure(Error::validation("A", "first")),
        Outcome::success(2),
        Outcome::failure(Error::validation("B", "second")),
    ]
}

#[test]
fn collect_all_yields_ordered_failures_and_discards_values() {
    let all = sample().into_iter().collect_all();

    let expected = AggregateError::new([
        Error::validation("A", "first"),
        Error::validation("B", "second"),
    ])
    .unwrap();
    assert_eq!(all, Outcome::Failure(Error::Aggregate(expected)));
}

#[test]
fn collect_all_returns_values_when_everything_succeeds() {
    let all = vec![Outcome::success(1), Outcome::success(2)]
        .into_iter()
        .collect_all();
    assert_eq!(all, Outcome::success(vec![1, 2]));
}

#[test]
fn collect_all_single_failure_is_unwrapped() {
    let all = vec![Outcome::success(1), Outcome::failure(Error::msg("only"))]
        .into_iter()
        .collect_all();
    assert_eq!(all.error(), &Error::msg("only"));
}

#[test]
fn sequence_stops_pulling_after_failure() {
    let pulled = Cell::new(0);
    let result = sample()
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1))
        .sequence();

    assert_eq!(result.error().code(), "A");
    assert_eq!(pulled.get(), 1);
}

#[test]
fn traverse_stops_calling_after_failure() {
    let mut calls = 0;
    let result = ["1", "x", "3"].into_iter().traverse(|s| {
        calls += 1;
        match s.parse::<i32>() {
            Ok(n) => Outcome::success(n),
            Err(_) => Outcome::failure(Error::validation("Parse", s.to_string())),
        }
    });

    assert_eq!(result.error().message(), "x");
    assert_eq!(calls, 2);
}

#[test]
fn partition_preserves_order_on_both_sides() {
    let (values, errors) = sample().into_iter().partition_outcomes();
    assert_eq!(values, vec![2]);
    let codes: Vec<_> = errors.iter().map(Error::code).collect();
    assert_eq!(codes, ["A", "B"]);
}

#[test]
fn choose_successes_and_failures_preserve_order() {
    let outcomes = vec![
        Outcome::success(1),
        Outcome::failure(Error::msg("x")),
        Outcome::success(3),
        Outcome::failure(Error::msg("y")),
    ];

    let values: Vec<_> = outcomes
        .clone()
        .into_iter()
        .choose_successes()
        .collect();
    assert_eq!(values, vec![1, 3]);

    let errors: Vec<_> = outcomes
        .into_iter()
        .choose_failures()
        .map(|e| e.message().to_string())
        .collect();
    assert_eq!(errors, ["x", "y"]);
}
