use outcome_rail::validation::rules::guid;
use outcome_rail::validation::EnsureBuilder;
use uuid::Uuid;

#[test]
fn nil_guid_is_rejected() {
    assert_eq!(guid::not_empty(&Uuid::nil()).error().code(), "Guid.Empty");
    assert!(guid::not_empty(&Uuid::new_v4()).is_success());
}

#[test]
fn parse_reports_the_rejected_input() {
    let id = guid::parse("67e55044-10b1-426f-9247-bb680e5fe0c8");
    assert_eq!(
        id.value().to_string(),
        "67e55044-10b1-426f-9247-bb680e5fe0c8"
    );

    let invalid = guid::parse("nope");
    assert_eq!(invalid.error().message(), "'nope' is not a valid GUID.");
}

#[test]
fn builder_rejects_nil() {
    let outcome = EnsureBuilder::new(Uuid::nil()).not_nil().build();
    assert_eq!(outcome.error().code(), "Guid.Empty");
}
