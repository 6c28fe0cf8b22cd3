//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - The authorization gate for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use bookshelf::backend::middleware::authorize_jwt;
//! use bookshelf::backend::server::AppState;
//!
//! fn protect(routes: Router<AppState>, state: AppState) -> Router<AppState> {
//!     routes.layer(middleware::from_fn_with_state(state, authorize_jwt))
//! }
//! ```

pub mod auth;

pub use auth::{authorize_jwt, AuthUser, AuthenticatedUser};
