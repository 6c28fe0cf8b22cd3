/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt), never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    name: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, password_hash, created_at, updated_at
        "#
    )
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = $1
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Check whether an email address is already registered
pub async fn is_email_taken(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let taken: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"
    )
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(taken)
}

/// Update a user's profile
///
/// When `password_hash` is `None` the stored hash is kept.
///
/// # Returns
/// Updated user, or None if no user has this ID
pub async fn update_user(
    pool: &SqlitePool,
    id: i64,
    name: String,
    email: String,
    password_hash: Option<String>,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = $1,
            email = $2,
            password_hash = COALESCE($3, password_hash),
            updated_at = $4
        WHERE id = $5
        RETURNING id, name, email, password_hash, created_at, updated_at
        "#
    )
    .bind(&name)
    .bind(&email)
    .bind(password_hash)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether a database error comes from the unique index on `users.email`
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
