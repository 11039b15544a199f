#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Folio workspace.
//!
//! * [`macro@folio_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@folio_slice`] turns a struct into a registrable feature slice handle.
//! * [`macro@api_model`] and [`macro@api_handler`] wire DTOs and handlers into `utoipa`.
//! * [`macro@main`] boots the tuned Tokio runtime from `folio-runtime`.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot depend on the
//! crates the expansions refer to.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro that replaces `async fn main` with a synchronous `main` running on a
/// `folio_runtime` profile.
///
/// Accepted profiles: `high_performance`, `memory_efficient`, `default` (or no argument).
/// The function must be `async` and return a `Result`.
///
/// ```rust,ignore
/// #[folio_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a JSON data transfer object.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when they are not derived already, derives
/// `utoipa::ToSchema` when the consuming crate enables its `server` feature, and applies
/// `#[serde(rename_all = "camelCase", deny_unknown_fields)]` unless told otherwise.
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct ProjectDto {
///     pub id: String,
///     pub title: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Documents an Axum handler with `utoipa::path` (only with the `server` feature of the
/// consuming crate) and silences `clippy::unused_async`.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` when missing.
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to results whose
///   error type is the `source` of a variant.
/// * `From<Source>` for every variant with a `source` (or `#[source]` / `#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * a private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// Every variant uses named fields. Variants carrying a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[folio_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is a cheap `Arc` wrapper that
/// derefs to it and implements `folio_kernel::domain::registry::FeatureSlice`.
///
/// ```rust,ignore
/// #[folio_derive::folio_slice]
/// pub struct Catalog {
///     pub content: &'static SiteContent,
/// }
///
/// let catalog = Catalog::new(CatalogInner { content: &CONTENT });
/// ```
#[proc_macro_attribute]
pub fn folio_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
