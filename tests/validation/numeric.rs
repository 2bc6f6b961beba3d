use core::ops::Bound;
use outcome_rail::validation::rules::numeric;
use outcome_rail::validation::EnsureBuilder;

#[test]
fn in_range_honours_bound_inclusivity() {
    let range = (Bound::Excluded(0), Bound::Included(10));

    assert!(numeric::in_range(0, range).is_failure());
    assert!(numeric::in_range(5, range).is_success());
    assert!(numeric::in_range(10, range).is_success());
    assert!(numeric::in_range(11, range).is_failure());
}

#[test]
fn in_range_closed_interval_accepts_both_bounds() {
    assert!(numeric::in_range(0, 0..=10).is_success());
    assert!(numeric::in_range(10, 0..=10).is_success());
    assert!(numeric::in_range(-1, 0..=10).is_failure());
    assert!(numeric::in_range(11, 0..=10).is_failure());
}

#[test]
fn in_range_open_interval_rejects_both_bounds() {
    let range = (Bound::Excluded(0), Bound::Excluded(10));

    assert!(numeric::in_range(0, range).is_failure());
    assert!(numeric::in_range(5, range).is_success());
    assert!(numeric::in_range(10, range).is_failure());
    assert_eq!(
        numeric::in_range(10, range).error().message(),
        "Value must be within (0, 10)."
    );
}

#[test]
fn in_range_half_open_excludes_upper_bound() {
    assert!(numeric::in_range(0, 0..10).is_success());
    assert!(numeric::in_range(9, 0..10).is_success());
    assert!(numeric::in_range(10, 0..10).is_failure());
}

#[test]
fn builder_in_range_is_evaluated() {
    let rejected = EnsureBuilder::new(101i32)
        .positive()
        .in_range(0..=100)
        .build();
    assert_eq!(rejected.error().code(), "Number.InRange");

    let accepted = EnsureBuilder::new(100i32)
        .positive()
        .in_range(0..=100)
        .build();
    assert_eq!(*accepted.value(), 100);
}

#[test]
fn in_range_message_uses_interval_notation() {
    let outcome = numeric::in_range(0, (Bound::Excluded(0), Bound::Included(10)));
    assert_eq!(outcome.error().code(), "Number.InRange");
    assert_eq!(outcome.error().message(), "Value must be within (0, 10].");

    let half_open = numeric::in_range(10, 0..10);
    assert_eq!(half_open.error().message(), "Value must be within [0, 10).");

    let unbounded = numeric::in_range(-1, 0..);
    assert_eq!(
        unbounded.error().message(),
        "Value must be within [0, +inf)."
    );
}

#[test]
fn comparisons_are_strict_or_inclusive_as_named() {
    assert!(numeric::greater_than(5, 5).is_failure());
    assert!(numeric::greater_than_or_equal(5, 5).is_success());
    assert!(numeric::less_than(5, 5).is_failure());
    assert!(numeric::less_than_or_equal(5, 5).is_success());

    assert_eq!(
        numeric::greater_than(1, 2).error().message(),
        "Value must be greater than 2."
    );
}

#[test]
fn sign_checks() {
    assert!(numeric::positive(1u32).is_success());
    assert_eq!(numeric::positive(0).error().code(), "Number.Positive");
    assert!(numeric::negative(-0.5).is_success());
    assert!(numeric::zero(0i64).is_success());
    assert_eq!(numeric::non_zero(0).error().code(), "Number.NonZero");
    assert!(numeric::non_positive(0).is_success());
    assert_eq!(
        numeric::non_negative(-1).error().code(),
        "Number.NonNegative"
    );
}

#[test]
fn builder_methods_short_circuit_in_order() {
    let result = EnsureBuilder::new(150i32)
        .positive()
        .less_than_or_equal(120)
        .in_range(0..=100)
        .build();

    assert_eq!(result.error().code(), "Number.LessThanOrEqual");
}

#[test]
fn builder_accepts_valid_numbers() {
    let age = EnsureBuilder::new(30u8)
        .greater_than_or_equal(18)
        .less_than(130)
        .non_zero()
        .build();
    assert_eq!(*age.value(), 30);
}
