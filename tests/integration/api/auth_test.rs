//! Authentication API integration tests
//!
//! Tests for the register and login endpoints.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{create_test_user, TestApp};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({ "name": "Ada", "email": "ada@example.com", "password": "password123" }),
        )
        .await;

    let data = assert_envelope_ok!(response, StatusCode::CREATED);
    assert_eq!(response.body["message"], "OK!");
    assert_eq!(data["name"], "Ada");
    assert_eq!(data["email"], "ada@example.com");
    assert!(data.get("password_hash").is_none());

    let token = data["token"].as_str().unwrap();
    let claims = app.tokens.validate_token(token).unwrap();
    assert_eq!(claims.user_id, data["id"].as_i64().unwrap().to_string());
    assert_eq!(claims.iss, "bookshelf-api");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    create_test_user(&app, "Ada", "ada@example.com", "password123").await;

    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({ "name": "Imposter", "email": "ada@example.com", "password": "password123" }),
        )
        .await;

    assert_envelope_error!(
        response,
        StatusCode::CONFLICT,
        "Failed to process request",
        "Duplicate email"
    );
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = TestApp::new().await;

    let response = app
        .post("/api/auth/register", None, json!({ "name": "Ada", "email": "ada@example.com" }))
        .await;

    assert_envelope_error!(
        response,
        StatusCode::BAD_REQUEST,
        "Failed to process request",
        "field 'password' is required"
    );
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({ "name": "Ada", "email": "not-an-email", "password": "password123" }),
        )
        .await;

    assert_envelope_error!(response, StatusCode::BAD_REQUEST, "Failed to process request");
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::new().await;

    let response = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some("application/json"),
            "{ not json".to_string(),
        )
        .await;
    assert_envelope_error!(response, StatusCode::BAD_REQUEST, "Failed to process request");

    let response = app
        .send(Method::POST, "/api/auth/register", None, None, "name=Ada".to_string())
        .await;
    assert_envelope_error!(response, StatusCode::BAD_REQUEST, "Failed to process request");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "Ada", "ada@example.com", "password123").await;

    let response = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "password123" }),
        )
        .await;

    let data = assert_envelope_ok!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "OK!");
    assert_eq!(data["id"], user.id);

    let claims = app.tokens.validate_token(data["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.user_id, user.id.to_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    create_test_user(&app, "Ada", "ada@example.com", "password123").await;

    let response = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "wrongpassword" }),
        )
        .await;

    assert_envelope_error!(
        response,
        StatusCode::UNAUTHORIZED,
        "Please check again your credential",
        "Invalid Credential"
    );
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "nobody@example.com", "password": "password123" }),
        )
        .await;

    assert_envelope_error!(
        response,
        StatusCode::UNAUTHORIZED,
        "Please check again your credential",
        "Invalid Credential"
    );
}

#[tokio::test]
async fn test_register_then_login_then_profile() {
    let app = TestApp::new().await;

    let registered = app
        .post(
            "/api/auth/register",
            None,
            json!({ "name": "Ada", "email": "ada@example.com", "password": "password123" }),
        )
        .await;
    assert_envelope_ok!(registered, StatusCode::CREATED);

    let login = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "password123" }),
        )
        .await;
    let data = assert_envelope_ok!(login, StatusCode::OK);
    let token = data["token"].as_str().unwrap().to_string();

    // raw token, no Bearer prefix
    let profile = app.get("/api/user/profile", Some(&token)).await;
    let profile = assert_envelope_ok!(profile, StatusCode::OK);
    assert_eq!(profile["email"], "ada@example.com");
    assert_eq!(profile["books"], json!([]));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;
    let response = app.get("/api/nowhere", None).await;
    assert_envelope_error!(response, StatusCode::NOT_FOUND, "Not found");
}
