/**
 * Profile Handlers
 *
 * GET and PUT /api/user/profile. Both act on the caller identified by the
 * token; there is no way to address another user's profile.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use bcrypt::hash;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{ProfileResponse, UserUpdateRequest};
use crate::backend::auth::users::{get_user_by_id, is_unique_violation, update_user, User};
use crate::backend::books::db::books_by_user;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::response::{build_response, ApiResponse};
use crate::backend::server::PasswordCost;

const USER_GONE: &str = "User no longer exists";

/// GET /api/user/profile
///
/// Returns the caller with every book they own.
pub async fn profile(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
) -> Result<ApiResponse<ProfileResponse>, BackendError> {
    let user_id = auth.id()?;

    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_GONE))?;
    let books = books_by_user(&pool, user_id).await?;

    Ok(build_response("OK!", ProfileResponse { user, books }))
}

/// PUT /api/user/profile
///
/// # Errors
///
/// * `400 Bad Request` - If name or email is blank or the email is malformed
/// * `404 Not Found` - If the caller's account no longer exists
/// * `409 Conflict` - If the new email belongs to another user
pub async fn update(
    State(pool): State<SqlitePool>,
    State(PasswordCost(cost)): State<PasswordCost>,
    auth: AuthUser,
    payload: Result<Json<UserUpdateRequest>, JsonRejection>,
) -> Result<ApiResponse<User>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let user_id = auth.id()?;

    let password_hash = request
        .new_password()
        .map(|password| hash(password, cost))
        .transpose()
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::from(e)
        })?;

    let user = update_user(&pool, user_id, request.name, request.email, password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("User {} tried to take an email already in use", user_id);
                return BackendError::conflict("Duplicate email");
            }
            BackendError::from(e)
        })?
        .ok_or_else(|| BackendError::not_found(USER_GONE))?;

    tracing::info!("User {} updated their profile", user_id);

    Ok(build_response("OK!", user))
}
