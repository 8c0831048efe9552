#![allow(clippy::unwrap_used, clippy::expect_used)]

//! HTTP-level tests for the API-key authentication wiring.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`.

use std::collections::HashMap;
use std::sync::Arc;

use api_key_auth::{
    app::build_router,
    config::Config,
    services::auth::{
        ApiKeyAuthenticator, AuthOutcome, AuthPipeline, AuthScheme, Identity, RequestKeySource,
        build_auth_pipeline,
    },
    state::AppState,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use serde_json::Value;
use tower::ServiceExt;

fn config(extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("API_KEY_VALUE", "Hello-World"),
        ("API_KEY_PARAMETER_NAME", "X-Api-Key"),
        ("API_KEY_CLAIMS_ISSUER", "API-Issuer"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in extra {
        vars.insert(k.to_string(), v.to_string());
    }

    Config::from_lookup(|key| vars.get(key).cloned()).expect("config")
}

fn app() -> Router {
    let config = config(&[]);
    build_router(AppState::new(build_auth_pipeline(&config)), &config)
}

async fn send(app: Router, req: Request<Body>) -> Response {
    app.oneshot(req).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_key(uri: &str, key: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-Api-Key", key)
        .body(Body::empty())
        .unwrap()
}

async fn json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let resp = send(app(), get("/health")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["status"], "ok");
}

#[tokio::test]
async fn health_ignores_a_wrong_key() {
    let resp = send(app(), get_with_key("/health", "wrong")).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_route_without_key_is_unauthorized() {
    let resp = send(app(), get("/api/v1/me")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = json(resp).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    assert_eq!(body["error"]["message"], "unauthorized");
}

#[tokio::test]
async fn wrong_key_is_rejected_with_reason() {
    let resp = send(app(), get_with_key("/api/v1/me", "wrong")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json(resp).await["error"]["message"],
        "Invalid API Key provided."
    );
}

#[tokio::test]
async fn key_differing_only_in_case_is_rejected() {
    let resp = send(app(), get_with_key("/api/v1/me", "hello-world")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn matching_header_returns_identity() {
    let resp = send(app(), get_with_key("/api/v1/me", "Hello-World")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body["name"], "Hello-World");
    assert_eq!(body["role"], "admin");
    assert_eq!(body["issuer"], "API-Issuer");
    assert_eq!(body["scheme"], "ApiKey");

    let claims = body["claims"].as_array().unwrap();
    assert_eq!(claims.len(), 3);
    assert_eq!(claims[2]["claim_type"], "role");
    assert_eq!(claims[2]["value"], "admin");
}

#[tokio::test]
async fn matching_query_parameter_is_accepted() {
    let resp = send(app(), get("/api/v1/me?X-Api-Key=Hello-World")).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn header_takes_precedence_over_query() {
    let req = Request::builder()
        .uri("/api/v1/me?X-Api-Key=Hello-World")
        .header("X-Api-Key", "wrong")
        .body(Body::empty())
        .unwrap();

    let resp = send(app(), req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_route_accepts_the_key_holder() {
    let resp = send(app(), get_with_key("/api/v1/admin/ping", "Hello-World")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["role"], "admin");
}

struct ReaderScheme;

impl AuthScheme for ReaderScheme {
    fn name(&self) -> &str {
        "Reader"
    }

    fn authenticate(&self, source: &RequestKeySource<'_>) -> AuthOutcome {
        match source.first_header("x-reader") {
            Some(_) => AuthOutcome::Success(Identity {
                subject_name: "reader".into(),
                role: "reader".into(),
                issuer: "test".into(),
                scheme_name: "Reader".into(),
            }),
            None => AuthOutcome::NoKeyProvided,
        }
    }
}

fn app_with_reader_scheme() -> Router {
    let config = config(&[]);
    let pipeline = AuthPipeline::new()
        .with_scheme(ApiKeyAuthenticator::new(config.api_key.clone()))
        .with_scheme(ReaderScheme);

    build_router(AppState::new(Arc::new(pipeline)), &config)
}

#[tokio::test]
async fn admin_route_forbids_other_roles() {
    let req = Request::builder()
        .uri("/api/v1/admin/ping")
        .header("x-reader", "1")
        .body(Body::empty())
        .unwrap();

    let resp = send(app_with_reader_scheme(), req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(json(resp).await["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn api_key_failure_is_not_overridden_by_later_schemes() {
    let req = Request::builder()
        .uri("/api/v1/me")
        .header("X-Api-Key", "wrong")
        .header("x-reader", "1")
        .body(Body::empty())
        .unwrap();

    let resp = send(app_with_reader_scheme(), req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn openapi_is_served_in_development() {
    let resp = send(app(), get("/openapi.json")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = json(resp).await;
    assert_eq!(
        doc["components"]["securitySchemes"]["ApiKey"]["name"],
        "X-Api-Key"
    );
}

#[tokio::test]
async fn openapi_is_hidden_in_production() {
    let config = config(&[("APP_ENV", "production")]);
    let app = build_router(AppState::new(build_auth_pipeline(&config)), &config);

    let resp = send(app, get("/openapi.json")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let resp = send(app(), get_with_key("/nope", "Hello-World")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json(resp).await["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn request_id_is_generated_and_propagated() {
    let resp = send(app(), get("/health")).await;
    assert!(resp.headers().contains_key("x-request-id"));

    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let resp = send(app(), req).await;
    assert_eq!(resp.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn custom_parameter_name_is_honoured() {
    let config = config(&[("API_KEY_PARAMETER_NAME", "X-Partner-Key")]);
    let app = build_router(AppState::new(build_auth_pipeline(&config)), &config);

    let req = Request::builder()
        .uri("/api/v1/me")
        .header("x-partner-key", "Hello-World")
        .body(Body::empty())
        .unwrap();
    let resp = send(app.clone(), req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(app, get_with_key("/api/v1/me", "Hello-World")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
