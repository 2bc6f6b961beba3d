use outcome_rail::traits::{OptionExt, ResultExt};
use outcome_rail::{Error, Maybe, Outcome};

#[test]
fn into_outcome_uses_display_of_error() {
    let parsed = "abc".parse::<i32>().into_outcome();
    assert!(parsed.is_failure());
    assert_eq!(parsed.error().message(), "invalid digit found in string");

    assert_eq!("12".parse::<i32>().into_outcome(), Outcome::success(12));
}

#[test]
fn into_outcome_with_maps_error_lazily() {
    let mut called = false;
    let ok = Ok::<i32, &str>(1).into_outcome_with(|_| {
        called = true;
        Error::msg("unused")
    });
    assert_eq!(ok, Outcome::success(1));
    assert!(!called);

    let err = Err::<i32, &str>("raw")
        .into_outcome_with(|e| Error::validation("Raw", e));
    assert_eq!(err.error(), &Error::validation("Raw", "raw"));
}

#[test]
fn option_lifts_into_maybe_and_outcome() {
    assert_eq!(Some(3).into_maybe(), Maybe::some(3));
    assert_eq!(None::<i32>.into_maybe(), Maybe::none());

    let missing = Error::not_found("Config", "missing");
    let required = None::<i32>.ok_or_error(missing);
    assert_eq!(required.error().variant_name(), "NotFoundError");
    assert_eq!(Some(5).ok_or_error("unused"), Outcome::success(5));
}
