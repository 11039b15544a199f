//! Contact form lifecycle.
//!
//! ```text
//! Editing --begin--> Submitting --finish--> Submitted
//!    ^                                          |
//!    +------------------reset-------------------+
//! ```
//!
//! A failed validation keeps the form in `Editing` with the draft and per-field errors
//! attached, so the page can re-render what the visitor typed.

use crate::error::ContactError;
use folio_domain::contact::{
    ContactDraft, ContactField, ContactPhase, ContactView, FieldError, Receipt,
};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Checks every field and reports all problems at once, in form order.
///
/// # Errors
/// The list of field errors when at least one field is invalid.
pub fn validate(draft: &ContactDraft) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = ContactField::ALL
        .into_iter()
        .filter_map(|field| {
            check_field(field, field.value(draft).trim()).map(|message| FieldError { field, message })
        })
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_field(field: ContactField, value: &str) -> Option<&'static str> {
    let length = value.chars().count();
    match field {
        ContactField::Name if value.is_empty() => Some("Name is required"),
        ContactField::Name if length > MAX_NAME_LEN => Some("Name is too long"),
        ContactField::Email if value.is_empty() => Some("Email is required"),
        ContactField::Email if !looks_like_email(value) => Some("Enter a valid email address"),
        ContactField::Subject if value.is_empty() => Some("Subject is required"),
        ContactField::Subject if length > MAX_SUBJECT_LEN => Some("Subject is too long"),
        ContactField::Message if value.is_empty() => Some("Message is required"),
        ContactField::Message if length > MAX_MESSAGE_LEN => Some("Message is too long"),
        _ => None,
    }
}

/// `local@domain` with no whitespace and exactly one `@`.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

/// One visitor's pass through the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    view: ContactView,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> &ContactPhase {
        &self.view.phase
    }

    #[must_use]
    pub const fn view(&self) -> &ContactView {
        &self.view
    }

    #[must_use]
    pub fn into_view(self) -> ContactView {
        self.view
    }

    /// `Editing -> Submitting`. The draft is kept either way.
    ///
    /// # Errors
    /// * [`ContactError::InvalidTransition`] when a submission is in flight or done.
    /// * [`ContactError::Validation`] when a field is invalid; the form stays `Editing`.
    pub fn begin(&mut self, draft: ContactDraft) -> Result<(), ContactError> {
        if self.view.phase != ContactPhase::Editing {
            return Err(transition("begin", &self.view.phase));
        }

        self.view.draft = draft;
        match validate(&self.view.draft) {
            Ok(()) => {
                self.view.errors.clear();
                self.view.phase = ContactPhase::Submitting;
                Ok(())
            },
            Err(errors) => {
                self.view.errors.clone_from(&errors);
                Err(ContactError::Validation { errors, context: None })
            },
        }
    }

    /// `Submitting -> Submitted`.
    ///
    /// # Errors
    /// [`ContactError::InvalidTransition`] unless a submission is in flight.
    pub fn finish(&mut self, receipt: Receipt) -> Result<(), ContactError> {
        if self.view.phase != ContactPhase::Submitting {
            return Err(transition("finish", &self.view.phase));
        }

        self.view.phase = ContactPhase::Submitted { receipt };
        Ok(())
    }

    /// Receipt of a finished submission.
    #[must_use]
    pub const fn receipt(&self) -> Option<&Receipt> {
        match &self.view.phase {
            ContactPhase::Submitted { receipt } => Some(receipt),
            _ => None,
        }
    }

    /// `Submitted -> Editing` with an empty draft ("Send Another Message").
    ///
    /// # Errors
    /// [`ContactError::InvalidTransition`] unless the form was submitted.
    pub fn reset(&mut self) -> Result<(), ContactError> {
        if !matches!(self.view.phase, ContactPhase::Submitted { .. }) {
            return Err(transition("reset", &self.view.phase));
        }

        self.view = ContactView::default();
        Ok(())
    }
}

fn transition(action: &str, phase: &ContactPhase) -> ContactError {
    ContactError::InvalidTransition {
        message: format!("cannot {action} while {}", phase_name(phase)).into(),
        context: None,
    }
}

const fn phase_name(phase: &ContactPhase) -> &'static str {
    match phase {
        ContactPhase::Editing => "editing",
        ContactPhase::Submitting => "submitting",
        ContactPhase::Submitted { .. } => "submitted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Analytical engine".into(),
            message: "Let us talk about Bernoulli numbers.".into(),
        }
    }

    fn receipt() -> Receipt {
        Receipt { id: "abc".into(), submitted_at: 0 }
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(validate(&draft()).is_ok());
    }

    #[test]
    fn empty_draft_reports_every_field_in_order() {
        let errors = validate(&ContactDraft::default()).expect_err("empty draft");
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ContactField::ALL);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let draft = ContactDraft { subject: "   ".into(), ..draft() };
        let errors = validate(&draft).expect_err("blank subject");
        assert_eq!(errors, [FieldError { field: ContactField::Subject, message: "Subject is required" }]);
    }

    #[test]
    fn email_shape_is_checked() {
        for email in ["ada", "@example.com", "ada@", "ada@@example.com", "a da@example.com"] {
            let draft = ContactDraft { email: email.into(), ..draft() };
            let errors = validate(&draft).expect_err(email);
            assert_eq!(errors[0].message, "Enter a valid email address", "{email}");
        }
        let draft = ContactDraft { email: "ada@localhost".into(), ..draft() };
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn overlong_message_is_rejected() {
        let draft = ContactDraft { message: "x".repeat(MAX_MESSAGE_LEN + 1), ..draft() };
        let errors = validate(&draft).expect_err("too long");
        assert_eq!(errors[0].message, "Message is too long");
    }

    #[test]
    fn happy_path_reaches_submitted_once() {
        let mut form = ContactForm::new();
        form.begin(draft()).expect("begin");
        assert_eq!(form.phase(), &ContactPhase::Submitting);

        form.finish(receipt()).expect("finish");
        assert_eq!(form.receipt().map(|r| r.id.as_str()), Some("abc"));
        assert!(matches!(form.phase(), ContactPhase::Submitted { .. }));

        assert!(matches!(form.finish(receipt()), Err(ContactError::InvalidTransition { .. })));
    }

    #[test]
    fn begin_is_rejected_while_in_flight() {
        let mut form = ContactForm::new();
        form.begin(draft()).expect("begin");

        let err = form.begin(draft()).expect_err("double submit");
        assert!(err.to_string().contains("cannot begin while submitting"), "{err}");
    }

    #[test]
    fn invalid_draft_stays_editing_with_errors() {
        let mut form = ContactForm::new();
        let bad = ContactDraft { email: "nope".into(), ..draft() };

        let err = form.begin(bad.clone()).expect_err("invalid email");
        assert!(matches!(err, ContactError::Validation { ref errors, .. } if errors.len() == 1));
        assert_eq!(form.phase(), &ContactPhase::Editing);
        assert_eq!(form.view().draft, bad);
        assert_eq!(form.view().error_for(ContactField::Email), Some("Enter a valid email address"));

        form.begin(draft()).expect("corrected draft");
        assert!(form.view().errors.is_empty());
    }

    #[test]
    fn reset_returns_to_an_empty_form() {
        let mut form = ContactForm::new();
        assert!(form.reset().is_err());

        form.begin(draft()).expect("begin");
        form.finish(receipt()).expect("finish");
        form.reset().expect("reset");

        assert_eq!(form.into_view(), ContactView::default());
    }
}
