/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Build the token service from the configured secret and issuer
 * 3. Assemble the application state
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated. There is no
/// degraded mode without a database.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing bookshelf backend server");

    let db_pool = load_database(config).await?;
    let tokens = TokenService::from_config(config);

    tracing::info!(issuer = %tokens.issuer(), "Token service initialized");

    let app_state = AppState::new(db_pool, tokens, config.password_cost);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
