use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use folio::domain::constants::{API_DOCS_PATH, HEALTH_PATH, SCRIPT_PATH, STYLESHEET_PATH};
use folio::domain::route::Route;
use folio::features::contact::Contact;
use folio_server::Server;
use tower::ServiceExt;

fn app() -> (Server, Router) {
    let server = Server::builder().build().expect("default config builds");
    let router = server.router();
    (server, router)
}

async fn get(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

async fn post_form(router: Router, uri: &str, body: &str) -> Response {
    router
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .expect("request"),
        )
        .await
        .expect("response")
}

async fn text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

#[tokio::test]
async fn every_navigation_route_renders() {
    let (_server, router) = app();

    for route in Route::NAVIGATION {
        let response = get(router.clone(), route.path()).await;
        assert_eq!(response.status(), StatusCode::OK, "{route:?}");

        let html = text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"), "{route:?}");
        assert!(html.contains(route.label()), "{route:?}");
    }
}

#[tokio::test]
async fn unknown_path_is_a_404_page() {
    let (_server, router) = app();

    let response = get(router, "/does/not/exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = text(response).await;
    assert!(html.contains("Page Not Found"));
    assert!(html.contains("/does/not/exist"));
}

#[tokio::test]
async fn loose_paths_redirect_to_the_canonical_route() {
    let (_server, router) = app();

    let response = get(router.clone(), "/About/").await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()), Some("/about"));

    let response = get(router, "/projects/?domain=Data").await;
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/projects?domain=Data")
    );
}

#[tokio::test]
async fn projects_filter_comes_from_the_query() {
    let (_server, router) = app();

    let html = text(get(router.clone(), "/projects?domain=Fintech").await).await;
    assert!(html.contains("Payment Processing Platform"));
    assert!(!html.contains("No projects found in this category."));

    let response = get(router, "/projects?domain=Gardening").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("No projects found in this category."));
}

#[tokio::test]
async fn repeated_domain_key_uses_the_first_value() {
    let (_server, router) = app();

    let response = get(router, "/projects?domain=Data&domain=Fintech").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = text(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
    assert!(html.contains("Real-time Data Pipeline"));
    assert!(!html.contains("Payment Processing Platform"));
}

#[tokio::test(start_paused = true)]
async fn valid_contact_post_confirms_once() {
    let (server, router) = app();
    let body = "name=Jane+Doe&email=jane%40example.com&subject=Hello&message=Let%27s+talk";

    let response = post_form(router, Route::Contact.path(), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = text(response).await;
    assert!(html.contains("Message Sent!"));
    assert!(!html.contains("data-busy-form"));

    let contact = server.state().get_slice::<Contact>().expect("contact slice");
    assert_eq!(contact.submissions(), 1);
}

#[tokio::test(start_paused = true)]
async fn invalid_contact_post_keeps_the_form() {
    let (server, router) = app();
    let body = "name=Jane+Doe&email=nope&subject=&message=Hi";

    let response = post_form(router, Route::Contact.path(), body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = text(response).await;
    assert!(html.contains("data-busy-form"));
    assert!(html.contains("field-error"));
    assert!(html.contains("Jane Doe"));
    assert!(!html.contains("Message Sent!"));

    let contact = server.state().get_slice::<Contact>().expect("contact slice");
    assert_eq!(contact.submissions(), 0);
}

#[tokio::test]
async fn assets_are_served_with_their_content_type() {
    let (_server, router) = app();

    for (path, mime) in [(STYLESHEET_PATH, "text/css"), (SCRIPT_PATH, "text/javascript")] {
        let response = get(router.clone(), path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with(mime), "{path}: {content_type}");
    }
}

#[tokio::test]
async fn content_api_and_health_are_mounted() {
    let (_server, router) = app();

    let response = get(router.clone(), "/api/projects?domain=Data").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&text(response).await).expect("projects json");
    assert!(json["projects"].as_array().is_some_and(|projects| !projects.is_empty()));

    assert_eq!(get(router.clone(), "/api/experience").await.status(), StatusCode::OK);
    assert_eq!(get(router.clone(), "/api/skills").await.status(), StatusCode::OK);
    assert_eq!(get(router.clone(), HEALTH_PATH).await.status(), StatusCode::OK);
    assert_eq!(get(router, API_DOCS_PATH).await.status(), StatusCode::OK);
}
