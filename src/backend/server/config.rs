/**
 * Server Configuration
 *
 * This module turns the application configuration into live resources,
 * focusing on the SQLite database connection.
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: the API has nothing
 * to serve without it. Connection and migration failures are logged and
 * returned to the caller, which aborts startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::AppConfig;

/// Connect to the database and run migrations
///
/// In-memory databases live only as long as their connection, so for
/// `:memory:` URLs the pool is pinned to a single connection that never
/// expires.
///
/// # Example
///
/// ```rust,no_run
/// use bookshelf::backend::server::config::connect_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = connect_database("sqlite::memory:", 1).await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        sqlx::Error::from(e)
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Load the database configured in `AppConfig`
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    connect_database(&config.database_url, config.database_max_connections).await
}
