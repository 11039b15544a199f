use folio_domain::contact::{ContactDraft, ContactField, ContactView, FieldError};
use folio_domain::content::{Domain, SkillLevel};

#[test]
fn domain_labels_round_trip() {
    for domain in Domain::ALL {
        assert_eq!(Domain::from_label(domain.label()), Some(domain));
    }
    assert_eq!(Domain::from_label("ai/ml"), None);
    assert_eq!(Domain::from_label("All"), None);
}

#[test]
fn filter_labels_start_with_all() {
    assert_eq!(Domain::filter_labels(), ["All", "Infrastructure", "Data", "AI/ML", "Fintech"]);
}

#[test]
fn domain_serializes_as_label() {
    let json = serde_json::to_string(&Domain::AiMl).expect("serialize");
    assert_eq!(json, "\"AI/ML\"");
}

#[test]
fn skill_levels_have_legend_labels() {
    let labels: Vec<_> = SkillLevel::ALL.iter().map(|level| level.label()).collect();
    assert_eq!(labels, ["Expert", "Proficient", "Familiar"]);
}

#[test]
fn view_looks_up_field_errors() {
    let view = ContactView {
        errors: vec![FieldError { field: ContactField::Email, message: "Enter a valid email address" }],
        ..ContactView::default()
    };

    assert_eq!(view.error_for(ContactField::Email), Some("Enter a valid email address"));
    assert_eq!(view.error_for(ContactField::Name), None);
}

#[test]
fn field_values_come_from_the_draft() {
    let draft = ContactDraft {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "Hi there".into(),
    };

    let values: Vec<_> = ContactField::ALL.iter().map(|field| field.value(&draft)).collect();
    assert_eq!(values, ["Ada", "ada@example.com", "Hello", "Hi there"]);
}
