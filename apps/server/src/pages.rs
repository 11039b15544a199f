//! HTML page handlers.

use axum::extract::{OriginalUri, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::{Datelike, Utc};
use folio::domain::contact::{ContactDraft, ContactView};
use folio::domain::route::Route;
use folio::features::catalog::{Catalog, DomainQuery, ProjectSelection};
use folio::features::contact::{Contact, ContactError, ContactForm};
use folio::kernel::server::{SiteState, SiteStateError};
use folio::ui::{Chrome, Page, render_page};
use tracing::{error, warn};

type PageResult = Result<Html<String>, SiteStateError>;

fn render(state: &SiteState, page: Page) -> PageResult {
    let catalog = state.try_get_slice::<Catalog>()?;
    let chrome = Chrome::new(&state.config.site, Utc::now().year());
    Ok(Html(render_page(catalog.content, page, chrome)))
}

pub(crate) async fn home(State(state): State<SiteState>) -> PageResult {
    render(&state, Page::Home)
}

pub(crate) async fn about(State(state): State<SiteState>) -> PageResult {
    render(&state, Page::About)
}

pub(crate) async fn experience(State(state): State<SiteState>) -> PageResult {
    render(&state, Page::Experience)
}

pub(crate) async fn skills(State(state): State<SiteState>) -> PageResult {
    render(&state, Page::Skills)
}

pub(crate) async fn projects(
    State(state): State<SiteState>,
    Query(query): Query<DomainQuery>,
) -> PageResult {
    let catalog = state.try_get_slice::<Catalog>()?;
    let selection = ProjectSelection::new(catalog.content.projects, query.requested());
    render(&state, Page::Projects(selection))
}

pub(crate) async fn contact(State(state): State<SiteState>) -> PageResult {
    render(&state, Page::Contact(ContactView::default()))
}

/// `POST /contact`: confirmation on success, the form with its errors (422) otherwise.
pub(crate) async fn submit_contact(
    State(state): State<SiteState>,
    Form(draft): Form<ContactDraft>,
) -> Result<Response, SiteStateError> {
    let contact = state.try_get_slice::<Contact>()?;
    let mut form = ContactForm::new();

    let status = match contact.submit(&mut form, draft).await {
        Ok(_) => StatusCode::OK,
        Err(ContactError::Validation { errors, .. }) => {
            tracing::debug!(invalid = errors.len(), "Contact form rejected");
            StatusCode::UNPROCESSABLE_ENTITY
        },
        Err(e) => {
            error!(error = %e, "Contact submission failed");
            return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
        },
    };

    let html = render(&state, Page::Contact(form.into_view()))?;
    Ok((status, html).into_response())
}

/// Anything the route table does not serve verbatim.
///
/// Paths that still resolve to a page (`/About/`) are redirected to the canonical path;
/// the rest get the 404 page.
pub(crate) async fn not_found(
    State(state): State<SiteState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, SiteStateError> {
    let path = uri.path();
    let route = Route::resolve(path);

    if route.is_found() && route.path() != path {
        let target = match uri.query() {
            Some(query) => format!("{}?{query}", route.path()),
            None => route.path().to_owned(),
        };
        return Ok(Redirect::permanent(&target).into_response());
    }

    warn!(path = %path, "Route not found");
    let html = render(&state, Page::NotFound { path: path.to_owned() })?;
    Ok((StatusCode::NOT_FOUND, html).into_response())
}
