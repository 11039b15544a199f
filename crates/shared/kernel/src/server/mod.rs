//! Axum glue shared by the server app and the feature slices.

mod health;
mod router;
mod state;

pub use router::system_router;
pub use state::{SiteState, SiteStateBuilder, SiteStateError, SiteStateErrorExt, SiteStateInner};
