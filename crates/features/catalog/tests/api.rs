use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio_kernel::domain::config::SiteConfig;
use folio_kernel::server::SiteState;
use serde_json::Value;
use tower::ServiceExt;

fn app(with_catalog: bool) -> Router {
    let mut builder = SiteState::builder().config(SiteConfig::default());
    if with_catalog {
        builder = builder.register_slice(folio_catalog::init().expect("catalog"));
    }
    let state = builder.build().expect("state");

    let (router, _) = folio_catalog::api::router().with_state(state).split_for_parts();
    router
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn projects_default_to_all() {
    let (status, json) = get_json(app(true), "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["domain"], "All");
    assert_eq!(json["projects"].as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn projects_filter_by_domain() {
    let (status, json) = get_json(app(true), "/api/projects?domain=AI%2FML").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<_> = json["projects"]
        .as_array()
        .expect("projects")
        .iter()
        .map(|p| p["id"].as_str().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(ids, ["3", "6"]);
    assert_eq!(json["projects"][0]["domain"], "AI/ML");
}

#[tokio::test]
async fn repeated_domain_key_is_not_rejected() {
    let (status, json) = get_json(app(true), "/api/projects?domain=Fintech&domain=Data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["domain"], "Fintech");
    assert_eq!(json["projects"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn unknown_domain_is_empty_not_an_error() {
    let (status, json) = get_json(app(true), "/api/projects?domain=Gaming").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["projects"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn experience_and_skills_are_served() {
    let (_, experience) = get_json(app(true), "/api/experience").await;
    assert_eq!(experience["jobs"].as_array().map(Vec::len), Some(3));
    assert_eq!(experience["caseStudy"]["title"], "API Gateway Modernization");

    let (_, skills) = get_json(app(true), "/api/skills").await;
    assert_eq!(skills["groups"][0]["skills"][0]["level"], "expert");
    assert_eq!(skills["competencies"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn missing_slice_is_a_server_error() {
    let (status, _) = get_json(app(false), "/api/skills").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
