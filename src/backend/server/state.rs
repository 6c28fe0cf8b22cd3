/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The token service (secret, issuer, validation rules)
 * - The bcrypt cost used for new password hashes
 *
 * # Thread Safety
 *
 * Nothing in the state is mutated after startup. The pool is internally
 * synchronized and the token service is shared behind an `Arc`, so no
 * locks are needed.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // query with the pool
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;

/// bcrypt work factor, extractable on its own from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCost(pub u32);

/// Application state shared by every handler
///
/// # Fields
///
/// * `db_pool` - SQLite connection pool
/// * `tokens` - Token issuer and validator
/// * `password_cost` - bcrypt cost for hashing new passwords
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Token issuer and validator
    ///
    /// Built once from the configuration and never replaced.
    pub tokens: Arc<TokenService>,

    /// bcrypt cost for new password hashes
    pub password_cost: u32,
}

impl AppState {
    /// Assemble the state from its parts
    pub fn new(db_pool: SqlitePool, tokens: TokenService, password_cost: u32) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(tokens),
            password_cost,
        }
    }
}

/// Implement FromRef for the database pool
///
/// This allows Axum handlers to extract `SqlitePool` directly
/// from `AppState` using `State(SqlitePool)`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the token service
///
/// Used by the authorization middleware and the auth handlers.
impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordCost {
    fn from_ref(app_state: &AppState) -> Self {
        PasswordCost(app_state.password_cost)
    }
}
