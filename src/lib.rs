//! Bookshelf - Main Library
//!
//! A REST API over users and their books, protected by signed tokens.
//!
//! # Overview
//!
//! - Registration and login with bcrypt-hashed passwords
//! - HS256 tokens valid for one calendar year
//! - An authorization gate in front of every profile and book route
//! - Book ownership: only the owner may update or delete a book
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the HTTP server
//!   - Application configuration
//!   - Input validation errors
//!
//! - **`backend`** - The Axum server
//!   - Token service and authorization middleware
//!   - User and book persistence (sqlx + SQLite)
//!   - Handlers, routes and the JSON response envelope
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookshelf::backend::server::init::create_app;
//! use bookshelf::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:9090").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::error::SharedError` for bad input
//! - `backend::auth::sessions::TokenError` for token failures
//! - `backend::error::BackendError` for everything a handler can return

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
