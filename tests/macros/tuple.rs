use outcome_rail::{Error, Maybe, Outcome};
use std::cell::RefCell;

#[test]
fn maybe_tuple_combinators_splat_arguments() {
    let area = Maybe::some((3, 4)).map_tuple(|w, h| w * h);
    assert_eq!(area, Maybe::some(12));

    let none = Maybe::<(i32, i32)>::none().map_tuple(|w, h| w * h);
    assert!(none.is_none());

    let ratio = Maybe::some((10, 0, 1)).bind_tuple(|a, b, _| {
        if b == 0 {
            Maybe::none()
        } else {
            Maybe::some(a / b)
        }
    });
    assert!(ratio.is_none());
}

#[test]
fn maybe_tuple_side_effects() {
    let seen = RefCell::new(Vec::new());
    let _ = Maybe::some(("a", 1))
        .on_some_tuple(|name, n| seen.borrow_mut().push(format!("{name}{n}")));
    let _ = Maybe::<(&str, i32)>::none().on_either_tuple(
        |name, n| seen.borrow_mut().push(format!("{name}{n}")),
        || seen.borrow_mut().push(String::from("none")),
    );
    assert_eq!(seen.into_inner(), ["a1", "none"]);
}

#[test]
fn outcome_tuple_combinators_splat_arguments() {
    let full = Outcome::success(("Ada", "Lovelace", 1815))
        .map_tuple(|first, last, year| format!("{first} {last} ({year})"));
    assert_eq!(full.value(), "Ada Lovelace (1815)");

    let checked = Outcome::success((4, 2))
        .bind_tuple(|a, b| Outcome::success(a - b).ensure(|d| *d > 5, "too small"));
    assert_eq!(checked.error().message(), "too small");

    let failed: Outcome<(i32, i32)> = Outcome::failure(Error::msg("upstream"));
    let mut called = false;
    let _ = failed.on_success_tuple(|_, _| called = true);
    assert!(!called);
}

#[test]
fn largest_arity_is_supported() {
    let sum = Maybe::some((1, 2, 3, 4, 5, 6, 7, 8))
        .map_tuple(|a, b, c, d, e, f, g, h| a + b + c + d + e + f + g + h);
    assert_eq!(sum, Maybe::some(36));
}
