//! Contact form models.

use serde::{Deserialize, Serialize};

/// Raw form post. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Form control `name` / `id`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub fn value(self, draft: &ContactDraft) -> &str {
        match self {
            Self::Name => &draft.name,
            Self::Email => &draft.email,
            Self::Subject => &draft.subject,
            Self::Message => &draft.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// Proof of a (simulated) delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub id: String,
    /// Unix timestamp, seconds.
    pub submitted_at: i64,
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum ContactPhase {
    #[default]
    Editing,
    Submitting,
    Submitted { receipt: Receipt },
}

/// What the contact page needs to render the form card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactView {
    pub phase: ContactPhase,
    pub draft: ContactDraft,
    pub errors: Vec<FieldError>,
}

impl ContactView {
    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<&'static str> {
        self.errors.iter().find(|err| err.field == field).map(|err| err.message)
    }
}
