//! End-to-end tests for the register/login/welcome flow.
//!
//! Each test drives the assembled router over an in-memory SQLite database,
//! so the full stack runs: extractors, validation, bcrypt, token issuance,
//! and the auth guard.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower::ServiceExt;

use backend::utils::jwt::JwtUtils;

const SECRET: &str = "test-signing-secret";

async fn test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

async fn test_app() -> (Router, SqlitePool, Arc<JwtUtils>) {
    let pool = test_pool().await;
    let jwt_utils = Arc::new(JwtUtils::new(SECRET, 7200));
    let app = backend::app(pool.clone(), jwt_utils.clone());
    (app, pool, jwt_utils)
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_response(response).await
}

async fn get(app: &Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn register_payload() -> Value {
    json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "Jane.Doe@Example.COM",
        "password": "hunter2"
    })
}

#[tokio::test]
async fn register_creates_user_with_lowercased_email() {
    let (app, _pool, jwt_utils) = test_app().await;

    let (status, body) = post_json(&app, "/register", register_payload()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "");
    assert_eq!(body["data"]["email"], "jane.doe@example.com");
    assert_eq!(body["data"]["first_name"], "Jane");

    // The persisted hash must never appear in the response.
    assert!(body["data"].get("password_hash").is_none());
    assert!(body["data"].get("password").is_none());

    // The token on the record verifies back to the same identity.
    let token = body["data"]["token"].as_str().expect("token on record");
    let claims = jwt_utils.validate_token(token).unwrap();
    assert_eq!(claims.sub, body["data"]["id"].as_str().unwrap());
    assert_eq!(claims.email, "jane.doe@example.com");
}

#[tokio::test]
async fn register_duplicate_email_conflicts_across_case_variants() {
    let (app, _pool, _jwt) = test_app().await;

    let (status, _) = post_json(&app, "/register", register_payload()).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut second = register_payload();
    second["email"] = json!("JANE.DOE@example.com");
    let (status, body) = post_json(&app, "/register", second).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "User Already Exist. Please Login");
}

#[tokio::test]
async fn register_with_missing_field_writes_nothing() {
    let (app, pool, _jwt) = test_app().await;

    for missing in ["first_name", "last_name", "email", "password"] {
        let mut payload = register_payload();
        payload.as_object_mut().unwrap().remove(missing);

        let (status, body) = post_json(&app, "/register", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {missing}");
        assert_eq!(body["status"], "failure");
        assert_eq!(body["message"], "All input is required");
        assert!(body["data"].is_null());
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn register_with_unparseable_body_is_enveloped() {
    let (app, _pool, _jwt) = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "All input is required");
}

#[tokio::test]
async fn login_returns_verifiable_token() {
    let (app, _pool, jwt_utils) = test_app().await;

    let (_, registered) = post_json(&app, "/register", register_payload()).await;
    let user_id = registered["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = post_json(
        &app,
        "/login",
        json!({"email": "jane.doe@example.com", "password": "hunter2"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["id"], user_id.as_str());
    assert!(body["data"].get("password_hash").is_none());

    let token = body["token"].as_str().expect("top-level token");
    let claims = jwt_utils.validate_token(token).unwrap();
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "jane.doe@example.com");
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_credential_was_wrong() {
    let (app, _pool, _jwt) = test_app().await;
    post_json(&app, "/register", register_payload()).await;

    let cases = [
        // wrong password for an existing user
        json!({"email": "jane.doe@example.com", "password": "wrong"}),
        // no such user at all
        json!({"email": "nobody@example.com", "password": "hunter2"}),
        // lookup is exact-match: the stored email is lowercased, so the
        // original mixed-case spelling does not log in
        json!({"email": "Jane.Doe@Example.COM", "password": "hunter2"}),
    ];

    for payload in cases {
        let (status, body) = post_json(&app, "/login", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body["status"], "failed");
        assert_eq!(body["message"], "Invalid Credentials");
    }
}

#[tokio::test]
async fn login_with_missing_field_is_rejected() {
    let (app, _pool, _jwt) = test_app().await;

    let (status, body) = post_json(&app, "/login", json!({"email": "jane@example.com"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "All input is required");
}

#[tokio::test]
async fn welcome_requires_a_token() {
    let (app, _pool, _jwt) = test_app().await;

    let (status, body) = get(&app, "/welcome", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "A token is required for authentication");
}

#[tokio::test]
async fn welcome_admits_a_valid_token() {
    let (app, _pool, _jwt) = test_app().await;

    let (_, registered) = post_json(&app, "/register", register_payload()).await;
    let token = registered["data"]["token"].as_str().unwrap();

    let (status, body) = get(&app, "/welcome", Some(token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Welcome 🙌");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn welcome_rejects_expired_and_forged_tokens() {
    let (app, _pool, _jwt) = test_app().await;

    // Same secret, lifetime already over.
    let expired = JwtUtils::new(SECRET, -3600)
        .generate_token("user-1", "jane@example.com")
        .unwrap();
    let (status, body) = get(&app, "/welcome", Some(&expired)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid Token");

    // Different secret entirely.
    let forged = JwtUtils::new("other-secret", 7200)
        .generate_token("user-1", "jane@example.com")
        .unwrap();
    let (status, body) = get(&app, "/welcome", Some(&forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid Token");
}

#[tokio::test]
async fn unmatched_routes_get_an_enveloped_404() {
    let (app, _pool, _jwt) = test_app().await;

    let (status, body) = get(&app, "/definitely-not-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "Page not found");
}
