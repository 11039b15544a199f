use crate::{assets, pages};
use axum::Router;
use axum::routing::{MethodRouter, get};
use folio::domain::constants::API_DOCS_PATH;
use folio::domain::route::Route;
use folio::kernel::prelude::SiteState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Folio", description = "Read-only content API of the portfolio site"))]
struct ApiDoc;

fn page_handler(route: Route) -> Option<MethodRouter<SiteState>> {
    let handler = match route {
        Route::Home => get(pages::home),
        Route::About => get(pages::about),
        Route::Experience => get(pages::experience),
        Route::Projects => get(pages::projects),
        Route::Skills => get(pages::skills),
        Route::Contact => get(pages::contact).post(pages::submit_contact),
        Route::NotFound => return None,
    };
    Some(handler)
}

fn page_routes() -> Router<SiteState> {
    Route::NAVIGATION.into_iter().fold(Router::new(), |router, route| match page_handler(route) {
        Some(handler) => router.route(route.path(), handler),
        None => router,
    })
}

#[allow(unreachable_pub)]
pub fn init(state: SiteState) -> Router {
    // Separate the OpenAPI routes and the API documentation object
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(folio::server::router::system_router())
        .merge(folio::server::router::content_router())
        .split_for_parts();

    Router::new()
        .merge(page_routes())
        .merge(assets::router())
        .merge(api_routes)
        .merge(Scalar::with_url(API_DOCS_PATH, api_doc))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
