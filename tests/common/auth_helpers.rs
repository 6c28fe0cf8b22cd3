//! Authentication test helpers
//!
//! Provides utilities for creating test users and building Authorization
//! header values.

use bookshelf::backend::auth::users::create_user;

use super::database::{TestApp, TEST_BCRYPT_COST};

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user directly in the database and issue a token for it
pub async fn create_test_user(app: &TestApp, name: &str, email: &str, password: &str) -> TestUser {
    let password_hash = bcrypt::hash(password, TEST_BCRYPT_COST).expect("Failed to hash password");

    let user = create_user(&app.pool, name.to_string(), email.to_string(), password_hash)
        .await
        .expect("Failed to create test user");

    let token = app
        .tokens
        .generate_token(&user.id.to_string())
        .expect("Failed to create test token");

    TestUser {
        id: user.id,
        name: user.name,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
