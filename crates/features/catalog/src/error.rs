use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[folio_derive::folio_error]
pub enum CatalogError {
    /// The static records break an invariant the pages rely on.
    #[error("Catalog content error{}: {message}", format_context(.context))]
    Content { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
