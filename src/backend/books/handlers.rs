/**
 * Book Handlers
 *
 * HTTP handlers for `/api/books`. Every route sits behind the authorization
 * gate; the caller's ID comes from the validated token.
 *
 * # Ownership
 *
 * Anyone signed in may list and read books. Only the owner may update or
 * delete one. A missing book is reported as 404 before ownership is checked.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::books::db::{
    all_books, book_owner, delete_book, find_book_by_id, insert_book, update_book, Book,
};
use crate::backend::books::types::BookRequest;
use crate::backend::error::types::{BackendError, MSG_BAD_ID};
use crate::backend::middleware::AuthUser;
use crate::backend::response::{build_response, ApiResponse, EmptyObject};

const NO_DATA_WITH_ID: &str = "No Data with given id";
const NOT_THE_OWNER: &str = "You are not the owner";

/// Parse the `{id}` path segment
fn parse_id(raw: &str) -> Result<i64, BackendError> {
    raw.parse::<i64>().map_err(|e| {
        tracing::warn!("Invalid book id: {}", raw);
        BackendError::bad_request(MSG_BAD_ID, e.to_string())
    })
}

/// Fail unless `caller` owns book `id`
async fn ensure_owner(pool: &SqlitePool, id: i64, caller: i64) -> Result<(), BackendError> {
    match book_owner(pool, id).await? {
        None => Err(BackendError::not_found(NO_DATA_WITH_ID)),
        Some(owner) if owner != caller => {
            tracing::warn!("User {} tried to modify book {} owned by {}", caller, id, owner);
            Err(BackendError::forbidden(NOT_THE_OWNER))
        }
        Some(_) => Ok(()),
    }
}

/// GET /api/books
pub async fn all(State(pool): State<SqlitePool>) -> Result<ApiResponse<Vec<Book>>, BackendError> {
    let books = all_books(&pool).await?;
    Ok(build_response("OK", books))
}

/// GET /api/books/{id}
pub async fn find_by_id(
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
) -> Result<ApiResponse<Book>, BackendError> {
    let id = parse_id(&raw_id)?;

    let book = find_book_by_id(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(NO_DATA_WITH_ID))?;

    Ok(build_response("OK", book))
}

/// POST /api/books
///
/// The new book is owned by the caller.
pub async fn insert(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<ApiResponse<Book>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let user_id = auth.id()?;
    if get_user_by_id(&pool, user_id).await?.is_none() {
        tracing::warn!("Token refers to a user that no longer exists: {}", user_id);
        return Err(BackendError::not_found("User no longer exists"));
    }

    let book = insert_book(&pool, user_id, request.title, request.description).await?;

    tracing::info!("Book {} created by user {}", book.id, user_id);

    Ok(build_response("OK", book))
}

/// PUT /api/books/{id}
pub async fn update(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<ApiResponse<Book>, BackendError> {
    let id = parse_id(&raw_id)?;
    let Json(request) = payload?;
    request.validate()?;

    ensure_owner(&pool, id, auth.id()?).await?;

    let book = update_book(&pool, id, request.title, request.description)
        .await?
        .ok_or_else(|| BackendError::not_found(NO_DATA_WITH_ID))?;

    Ok(build_response("OK", book))
}

/// DELETE /api/books/{id}
pub async fn delete(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
) -> Result<ApiResponse<EmptyObject>, BackendError> {
    let id = parse_id(&raw_id)?;

    ensure_owner(&pool, id, auth.id()?).await?;

    if !delete_book(&pool, id).await? {
        return Err(BackendError::not_found(NO_DATA_WITH_ID));
    }

    tracing::info!("Book {} deleted", id);

    Ok(build_response("Delete", EmptyObject::default()))
}
