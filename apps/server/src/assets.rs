use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use folio::domain::constants::{SCRIPT_PATH, STYLESHEET_PATH};
use folio::kernel::server::SiteState;
use folio::ui::{SCRIPT, STYLESHEET};

const CACHE_POLICY: &str = "public, max-age=3600";

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8"), (header::CACHE_CONTROL, CACHE_POLICY)],
        STYLESHEET,
    )
}

async fn script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_POLICY),
        ],
        SCRIPT,
    )
}

/// Compiled-in stylesheet and script.
pub(crate) fn router() -> Router<SiteState> {
    Router::new().route(STYLESHEET_PATH, get(stylesheet)).route(SCRIPT_PATH, get(script))
}
