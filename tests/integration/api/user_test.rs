//! Profile API integration tests
//!
//! Tests for GET/PUT /api/user/profile and the authorization gate in front
//! of them.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{auth_header, create_test_user, TestApp};

#[tokio::test]
async fn test_profile_requires_token() {
    let app = TestApp::new().await;

    let response = app.get("/api/user/profile", None).await;

    assert_envelope_error!(
        response,
        StatusCode::BAD_REQUEST,
        "Failed to process request",
        "no token found"
    );
}

#[tokio::test]
async fn test_profile_blank_token_is_missing() {
    let app = TestApp::new().await;

    let response = app.get("/api/user/profile", Some("Bearer ")).await;

    assert_envelope_error!(
        response,
        StatusCode::BAD_REQUEST,
        "Failed to process request",
        "no token found"
    );
}

#[tokio::test]
async fn test_profile_rejects_invalid_token() {
    let app = TestApp::new().await;

    let response = app.get("/api/user/profile", Some("Bearer abc.def.ghi")).await;

    assert_envelope_error!(response, StatusCode::UNAUTHORIZED, "Token is not valid");
}

#[tokio::test]
async fn test_profile_rejects_expired_token() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "Ada", "ada@example.com", "password123").await;
    let stale = app
        .tokens
        .generate_token_at(&user.id.to_string(), Utc::now() - Duration::days(400))
        .unwrap();

    let response = app.get("/api/user/profile", Some(&stale)).await;

    assert_envelope_error!(
        response,
        StatusCode::UNAUTHORIZED,
        "Token is not valid",
        "token is expired"
    );
}

#[tokio::test]
async fn test_profile_lists_own_books() {
    let app = TestApp::new().await;
    let ada = create_test_user(&app, "Ada", "ada@example.com", "password123").await;
    let bob = create_test_user(&app, "Bob", "bob@example.com", "password123").await;

    for (user, title) in [(&ada, "Dune"), (&bob, "Emma"), (&ada, "Ubik")] {
        let created = app
            .post(
                "/api/books",
                Some(&auth_header(&user.token)),
                json!({ "title": title, "description": "a book" }),
            )
            .await;
        assert_envelope_ok!(created, StatusCode::OK);
    }

    let response = app.get("/api/user/profile", Some(&auth_header(&ada.token))).await;
    let data = assert_envelope_ok!(response, StatusCode::OK);

    assert_eq!(data["id"], ada.id);
    assert_eq!(data["name"], "Ada");
    let titles: Vec<&str> = data["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|book| book["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Dune", "Ubik"]);
}

#[tokio::test]
async fn test_update_profile_keeps_password() {
    let app = TestApp::new().await;
    let ada = create_test_user(&app, "Ada", "ada@example.com", "password123").await;

    let response = app
        .put(
            "/api/user/profile",
            Some(&auth_header(&ada.token)),
            json!({ "name": "Ada Lovelace", "email": "ada@lovelace.dev" }),
        )
        .await;
    let data = assert_envelope_ok!(response, StatusCode::OK);
    assert_eq!(data, json!({ "id": ada.id, "name": "Ada Lovelace", "email": "ada@lovelace.dev" }));

    let login = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@lovelace.dev", "password": "password123" }),
        )
        .await;
    assert_envelope_ok!(login, StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_changes_password() {
    let app = TestApp::new().await;
    let ada = create_test_user(&app, "Ada", "ada@example.com", "password123").await;

    let response = app
        .put(
            "/api/user/profile",
            Some(&auth_header(&ada.token)),
            json!({ "name": "Ada", "email": "ada@example.com", "password": "n3w-password" }),
        )
        .await;
    assert_envelope_ok!(response, StatusCode::OK);

    let old = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "password123" }),
        )
        .await;
    assert_envelope_error!(old, StatusCode::UNAUTHORIZED, "Please check again your credential");

    let new = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "n3w-password" }),
        )
        .await;
    assert_envelope_ok!(new, StatusCode::OK);
}

#[tokio::test]
async fn test_update_profile_duplicate_email() {
    let app = TestApp::new().await;
    let ada = create_test_user(&app, "Ada", "ada@example.com", "password123").await;
    create_test_user(&app, "Bob", "bob@example.com", "password123").await;

    let response = app
        .put(
            "/api/user/profile",
            Some(&auth_header(&ada.token)),
            json!({ "name": "Ada", "email": "bob@example.com" }),
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
async fn test_update_profile_validates_body() {
    let app = TestApp::new().await;
    let ada = create_test_user(&app, "Ada", "ada@example.com", "password123").await;

    let response = app
        .put(
            "/api/user/profile",
            Some(&auth_header(&ada.token)),
            json!({ "email": "ada@example.com" }),
        )
        .await;

    assert_envelope_error!(
        response,
        StatusCode::BAD_REQUEST,
        "Failed to process request",
        "field 'name' is required"
    );
}

#[tokio::test]
async fn test_profile_of_deleted_user() {
    let app = TestApp::new().await;
    let ada = create_test_user(&app, "Ada", "ada@example.com", "password123").await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(ada.id)
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app.get("/api/user/profile", Some(&auth_header(&ada.token))).await;
    assert_envelope_error!(response, StatusCode::NOT_FOUND, "Data not found");
}

#[tokio::test]
async fn test_token_with_non_numeric_subject() {
    let app = TestApp::new().await;
    let token = app.tokens.generate_token("not-a-number").unwrap();

    let response = app.get("/api/user/profile", Some(&token)).await;
    assert_envelope_error!(response, StatusCode::UNAUTHORIZED, "Token is not valid");
}
