use outcome_rail::types::maybe::NONE_VALUE_ACCESS;
use outcome_rail::{Error, Maybe, Outcome};
use std::cell::RefCell;

#[test]
fn some_and_none_report_presence() {
    let some = Maybe::some(5);
    assert!(some.is_some());
    assert!(!some.is_none());
    assert_eq!(*some.value(), 5);

    let none = Maybe::<i32>::none();
    assert!(none.is_none());
    assert_eq!(none, Maybe::default());
}

#[test]
#[should_panic(expected = "Maybe has no value")]
fn value_on_none_panics() {
    let _ = Maybe::<i32>::none().value();
}

#[test]
fn none_access_message_is_stable() {
    assert_eq!(NONE_VALUE_ACCESS, "Maybe has no value");
}

#[test]
fn try_get_value_never_panics() {
    assert_eq!(
        Maybe::some(String::from("x")).try_get_value(),
        (true, String::from("x"))
    );
    assert_eq!(
        Maybe::<String>::none().try_get_value(),
        (false, String::new())
    );
}

#[test]
fn or_else_is_lazy() {
    let mut invoked = false;
    let kept = Maybe::some(1).or_else(|| {
        invoked = true;
        Maybe::some(2)
    });
    assert_eq!(kept, Maybe::some(1));
    assert!(!invoked);

    let replaced = Maybe::none().or_else(|| {
        invoked = true;
        Maybe::some(2)
    });
    assert_eq!(replaced, Maybe::some(2));
    assert!(invoked);
}

#[test]
fn filter_drops_rejected_values() {
    assert_eq!(Maybe::some(4).filter(|n| n % 2 == 0), Maybe::some(4));
    assert!(Maybe::some(3).filter(|n| n % 2 == 0).is_none());

    let mut called = false;
    let _ = Maybe::<i32>::none().filter(|_| {
        called = true;
        true
    });
    assert!(!called);
}

#[test]
fn bind_flattens_nested_maybes() {
    let half = |n: i32| {
        if n % 2 == 0 {
            Maybe::some(n / 2)
        } else {
            Maybe::none()
        }
    };

    assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::some(2));
    assert!(Maybe::some(6).bind(half).bind(half).is_none());
}

#[test]
fn match_with_selects_branch() {
    let describe = |m: Maybe<i32>| m.match_with(|v| format!("got {v}"), || String::from("nothing"));

    assert_eq!(describe(Maybe::some(3)), "got 3");
    assert_eq!(describe(Maybe::none()), "nothing");
}

#[test]
fn fallbacks_and_zip() {
    assert_eq!(Maybe::none().value_or(9), 9);
    assert_eq!(Maybe::some(1).value_or_else(|| 9), 1);
    assert_eq!(Maybe::none().or(Maybe::some(2)), Maybe::some(2));

    assert_eq!(Maybe::some(1).zip(Maybe::some("a")), Maybe::some((1, "a")));
    assert!(Maybe::some(1).zip(Maybe::<&str>::none()).is_none());
}

#[test]
fn side_effects_run_on_matching_state_only() {
    let seen = RefCell::new(Vec::new());
    let push = |v: i32| seen.borrow_mut().push(v);

    let _ = Maybe::some(1).on_some(|v| push(*v)).on_none(|| push(-1));
    let _ = Maybe::<i32>::none()
        .on_some(|v| push(*v))
        .on_none(|| push(-1));
    let _ = Maybe::<i32>::none().on_either(|v| push(*v), || push(0));

    assert_eq!(seen.into_inner(), [1, -1, 0]);
}

#[test]
fn converts_to_outcome_and_option() {
    let err = Error::not_found("Item.Missing", "item not found");

    assert_eq!(Maybe::some(3).to_outcome(err.clone()), Outcome::success(3));
    assert_eq!(
        Maybe::<i32>::none().to_outcome(err.clone()),
        Outcome::failure(err)
    );

    let lazy = Maybe::<i32>::none().to_outcome_with(|| Error::msg("built lazily"));
    assert_eq!(lazy.error().message(), "built lazily");

    assert_eq!(Maybe::from(Some(1)).into_option(), Some(1));
    assert_eq!(Option::<i32>::from(Maybe::none()), None);
    assert_eq!(Maybe::some(2).as_option(), Some(&2));
}

#[test]
fn compares_against_bare_value() {
    assert!(Maybe::some(5_i32) == 5_i32);
    assert!(Maybe::<i32>::none() != 5_i32);
}

#[test]
fn iterates_over_zero_or_one_item() {
    let collected: Vec<i32> = Maybe::some(7).into_iter().collect();
    assert_eq!(collected, vec![7]);

    let empty = Maybe::<i32>::none();
    assert_eq!((&empty).into_iter().count(), 0);
    assert_eq!(Maybe::some(1).iter().next(), Some(&1));
}

#[test]
fn filter_that_chains_predicates() {
    let accepted = Maybe::some(12)
        .filter_that()
        .satisfies(|n| *n > 10)
        .satisfies(|n| n % 3 == 0)
        .build();
    assert_eq!(accepted, Maybe::some(12));
}
