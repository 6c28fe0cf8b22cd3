//! Backend Module
//!
//! Server-side code: the Axum HTTP server, token-based authentication, and
//! SQLite persistence for users and books.
//!
//! # Request Flow
//!
//! 1. `routes` matches the path; protected groups run `middleware::authorize_jwt`
//! 2. The gate validates the token with `auth::sessions::TokenService`
//! 3. Handlers in `auth`, `users` and `books` do the work against the pool
//! 4. Results and `error::BackendError` values become `response::ApiResponse` envelopes

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Response envelope
pub mod response;

/// Authentication and user management
pub mod auth;

/// Current user's profile
pub mod users;

/// Books
pub mod books;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
pub use response::ApiResponse;
