use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[cfg(any())]
    #[error("Never compiled{}: {source}", format_context(.context))]
    Hidden { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _ = DemoError::Rejected { message: "nope".into(), context: None };
}
