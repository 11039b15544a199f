//! Shared string constants.

/// Filter label that selects every project.
pub const ALL_FILTER: &str = "All";

/// Prefix for environment overrides (`FOLIO__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "FOLIO";

pub const STYLESHEET_PATH: &str = "/assets/site.css";
pub const SCRIPT_PATH: &str = "/assets/site.js";

pub const HEALTH_PATH: &str = "/health";
pub const API_DOCS_PATH: &str = "/api/docs";

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const CONTENT_TAG: &str = "Content";
