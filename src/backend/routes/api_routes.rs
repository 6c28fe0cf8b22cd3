/**
 * API Route Handlers
 *
 * This module wires the API endpoints to their handlers.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/register` - User registration
 *
 * ## Profile (requires authentication)
 * - `GET /api/user/profile` - Current user and their books
 * - `PUT /api/user/profile` - Update current user
 *
 * ## Books (requires authentication)
 * - `GET /api/books` - List all books
 * - `POST /api/books` - Create a book owned by the caller
 * - `GET /api/books/{id}` - Get one book
 * - `PUT /api/books/{id}` - Update a book (owner only)
 * - `DELETE /api/books/{id}` - Delete a book (owner only)
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{login, register};
use crate::backend::books::handlers as books;
use crate::backend::middleware::authorize_jwt;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers as users;

/// Public authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
}

/// Profile routes, expected to be wrapped by the gate
fn user_routes() -> Router<AppState> {
    Router::new().route("/api/user/profile", get(users::profile).put(users::update))
}

/// Book routes, expected to be wrapped by the gate
fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/api/books", get(books::all).post(books::insert))
        .route(
            "/api/books/{id}",
            get(books::find_by_id).put(books::update).delete(books::delete),
        )
}

pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = user_routes()
        .merge(book_routes())
        .route_layer(middleware::from_fn_with_state(app_state.clone(), authorize_jwt));

    router.merge(auth_routes()).merge(protected)
}
