//! Catalog feature slice.
//!
//! Owns the site's static content, the projects filter and, with the `server` feature,
//! the read-only JSON content API.

#[cfg(feature = "server")]
pub mod api;
pub mod content;
mod error;
pub mod filter;

pub use crate::content::CONTENT;
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::filter::{DomainQuery, ProjectSelection, active_label, filter_projects};

use crate::content::check_content;
use folio_domain::content::SiteContent;
use folio_kernel::domain::registry::InitializedSlice;

/// Catalog feature state.
#[folio_derive::folio_slice]
pub struct Catalog {
    pub content: &'static SiteContent,
}

/// Initialize the catalog feature over the built-in content.
///
/// # Errors
/// Returns [`CatalogError::Content`] when the records break a page invariant.
pub fn init() -> Result<InitializedSlice, CatalogError> {
    init_with(&CONTENT)
}

/// Initialize the catalog over arbitrary records.
///
/// # Errors
/// Returns [`CatalogError::Content`] when the records break a page invariant.
pub fn init_with(content: &'static SiteContent) -> Result<InitializedSlice, CatalogError> {
    check_content(content).context("validating site content")?;

    tracing::info!(
        projects = content.projects.len(),
        jobs = content.experience.len(),
        "Catalog slice initialized"
    );

    Ok(InitializedSlice::new(Catalog::new(CatalogInner { content })))
}
