//! # UI
//!
//! Server-rendered pages of the site, written as Dioxus components and turned into HTML
//! with `dioxus-ssr`. The crate also carries the stylesheet and the small progressive
//! enhancement script.
//!
//! ```rust
//! use folio_ui::{Chrome, Page, render_page};
//! use folio_catalog::CONTENT;
//!
//! let html = render_page(&CONTENT, Page::Skills, Chrome {
//!     owner: "Dev".into(),
//!     site_title: "Senior Software Engineer".into(),
//!     year: 2026,
//! });
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod components;
mod document;
pub mod pages;

pub use document::{Chrome, Page, TAGLINE, render_page};

/// `site.css`, served at `folio_domain::constants::STYLESHEET_PATH`.
pub const STYLESHEET: &str = include_str!("../assets/site.css");

/// `site.js`, served at `folio_domain::constants::SCRIPT_PATH`.
pub const SCRIPT: &str = include_str!("../assets/site.js");
