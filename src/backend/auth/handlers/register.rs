/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password
 * 2. Check if the email is already registered
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Generate a token
 * 6. Return token and user info with 201 Created
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::hash;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{create_user, is_email_taken, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::response::{build_response, ApiResponse};
use crate::backend::server::PasswordCost;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If a field is blank or the email is malformed
/// * `409 Conflict` - If a user with this email already exists
/// * `500 Internal Server Error` - If hashing, user creation, or token generation fails
pub async fn register(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenService>>,
    State(PasswordCost(cost)): State<PasswordCost>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, ApiResponse<AuthResponse>), BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!("Register request for email: {}", request.email);

    if is_email_taken(&pool, &request.email).await? {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict("Duplicate email"));
    }

    let password_hash = hash(&request.password, cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::from(e)
    })?;

    let user = create_user(&pool, request.name, request.email, password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return BackendError::conflict("Duplicate email");
            }
            tracing::error!("Failed to create user: {:?}", e);
            BackendError::from(e)
        })?;

    let token = tokens.generate_token(&user.id.to_string())?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok((StatusCode::CREATED, build_response("OK!", AuthResponse { user, token })))
}
