use outcome_rail::{ensure_all, ensure_seq, Error, UnitOutcome};

#[test]
fn ensure_all_reports_every_false_condition() {
    let name = "";
    let age = 200;

    let outcome = ensure_all!(
        !name.is_empty() => Error::validation("Name.Empty", "name is required"),
        age < 150 => Error::validation("Age.Range", "age is out of range"),
        true => "never reported",
    );

    let codes: Vec<_> = outcome.error().iter().map(Error::code).collect();
    assert_eq!(codes, ["Name.Empty", "Age.Range"]);
}

#[test]
fn ensure_all_single_failure_is_unwrapped() {
    let outcome = ensure_all!(false => ("Only", "one failure"), 1 == 1 => "fine");
    assert_eq!(
        outcome,
        UnitOutcome::failure(Error::new("Only", "one failure"))
    );
}

#[test]
fn ensure_seq_stops_at_first_false_condition() {
    let mut evaluated = Vec::new();

    let outcome = ensure_seq!(
        { evaluated.push(1); true } => "first",
        { evaluated.push(2); false } => "second",
        { evaluated.push(3); false } => "third",
    );

    assert_eq!(outcome.error().message(), "second");
    assert_eq!(evaluated, [1, 2]);
}

#[test]
fn ensure_seq_succeeds_when_all_hold() {
    let outcome = ensure_seq!(1 < 2 => "math", "a" != "b" => "strings");
    assert!(outcome.is_success());
}
