//! Facade crate for the Folio site.
//! Re-exports domain/kernel primitives and the presentation crate, and aggregates feature
//! initialization. Keep this crate thin: it composes other crates, it does not implement
//! page or business logic.
//!
//! ## Usage
//! - Add `folio` with the `server` feature in the binary.
//! - Call [`init`] to build the feature slices and register them in the state.

pub use folio_domain as domain;
use folio_domain::config::SiteConfig;
pub use folio_kernel as kernel;
pub use folio_ui as ui;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use folio_catalog::api::router as content_router;
        pub use folio_kernel::server::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_catalog as catalog;
    pub use folio_contact as contact;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "catalog",
        "contact",
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "server")]
        "content-api",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns an error if any feature refuses its configuration or content.
pub fn init(
    config: &SiteConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Catalog (content records, filter, content API)
    slices.push(features::catalog::init()?);

    // Contact (form state machine, simulated delivery)
    slices.push(features::contact::init(&config.contact)?);

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_features_are_always_enabled() {
        assert!(features::is_enabled("catalog"));
        assert!(features::is_enabled("contact"));
        assert!(!features::is_enabled("licensing"));
    }

    #[test]
    fn init_registers_both_slices() {
        let slices = init(&SiteConfig::default()).expect("default config is valid");
        let names: Vec<_> = slices.iter().map(|slice| slice.name).collect();

        assert_eq!(slices.len(), 2);
        assert!(names.iter().any(|name| name.ends_with("Catalog")));
        assert!(names.iter().any(|name| name.ends_with("Contact")));
    }

    #[test]
    fn init_rejects_an_oversized_delay() {
        let mut config = SiteConfig::default();
        config.contact.submit_delay_ms = 60_000;

        assert!(init(&config).is_err());
    }
}
