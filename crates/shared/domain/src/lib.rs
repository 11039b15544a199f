//! # Domain Models
//!
//! Plain data shared by every Folio crate: configuration, the route table, the shapes of
//! the hand-authored content records and the contact form models.
//! Keep it lean: `serde` is the only dependency, there is no I/O and no business logic
//! beyond tiny lookup helpers.

pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod registry;
pub mod route;
