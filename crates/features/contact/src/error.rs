use folio_domain::contact::FieldError;
use std::borrow::Cow;

/// A specialized [`ContactError`] enum of this crate.
#[folio_derive::folio_error]
pub enum ContactError {
    /// One or more fields failed validation. Shown to the visitor.
    #[error("Contact validation error{}: {} invalid field(s)", format_context(.context), .errors.len())]
    Validation { errors: Vec<FieldError>, context: Option<Cow<'static, str>> },
    /// A transition the form state machine does not allow.
    #[error("Contact transition error{}: {message}", format_context(.context))]
    InvalidTransition { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Rejected slice configuration.
    #[error("Contact config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
