//! Database and application test fixtures
//!
//! Every fixture gets its own in-memory SQLite database with migrations
//! applied, so tests never share state.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use bookshelf::backend::auth::sessions::TokenService;
use bookshelf::backend::routes::create_router;
use bookshelf::backend::server::config::load_database;
use bookshelf::backend::server::AppState;
use bookshelf::shared::AppConfig;

/// Secret used to sign tokens in tests
pub const TEST_SECRET: &str = "integration-test-secret";

/// Lowest cost bcrypt accepts, keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Test configuration backed by an in-memory database
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .database_url("sqlite::memory:")
        .database_max_connections(1)
        .password_cost(TEST_BCRYPT_COST)
        .build()
        .expect("test configuration should be valid")
}

/// Create a migrated in-memory database pool
pub async fn create_test_pool() -> SqlitePool {
    load_database(&test_config())
        .await
        .expect("Failed to create test database pool")
}

/// A decoded response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Router plus direct handles on its database and token service
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
}

impl TestApp {
    /// Create a new application fixture
    pub async fn new() -> Self {
        let config = test_config();
        let pool = create_test_pool().await;
        let state = AppState::new(
            pool.clone(),
            TokenService::from_config(&config),
            config.password_cost,
        );
        let tokens = state.tokens.clone();

        Self {
            router: create_router(state),
            pool,
            tokens,
        }
    }

    /// Send a request with an optional raw Authorization value and JSON body
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        match body {
            Some(json) => {
                self.send(method, uri, authorization, Some("application/json"), json.to_string())
                    .await
            }
            None => self.send(method, uri, authorization, None, String::new()).await,
        }
    }

    /// Send a request with full control over content type and body text
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        content_type: Option<&str>,
        body: String,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        if let Some(value) = content_type {
            builder = builder.header(header::CONTENT_TYPE, value);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }
}
