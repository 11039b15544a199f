//! Glob-importable essentials for feature slices.

pub use crate::config::{ConfigError, load_config};
pub use crate::domain::config::SiteConfig;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
pub use crate::safe_nanoid;

#[cfg(feature = "server")]
pub use crate::server::{SiteState, SiteStateError};
