//! Application configuration module
//!
//! Provides the process-wide configuration for the server. Values are read
//! once at startup (environment, optionally seeded from a `.env` file) and
//! then passed around by value; nothing here is mutated afterwards.
//!
//! # Environment
//!
//! | Variable | Default |
//! |---|---|
//! | `JWT_SECRET` | required |
//! | `JWT_ISSUER` | `bookshelf-api` |
//! | `DATABASE_URL` | `sqlite://bookshelf.db?mode=rwc` |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |
//! | `SERVER_PORT` | `9090` |
//! | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default issuer written into every token
pub const DEFAULT_JWT_ISSUER: &str = "bookshelf-api";

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://bookshelf.db?mode=rwc";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 9090;

/// Default size of the database connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// sqlx connection string
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub database_max_connections: u32,
    /// Port the HTTP server listens on
    pub server_port: u16,
    /// Symmetric secret used to sign and verify tokens
    pub jwt_secret: String,
    /// Issuer claim written into tokens
    pub jwt_issuer: String,
    /// bcrypt work factor for new password hashes
    pub password_cost: u32,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("database_max_connections", &self.database_max_connections)
            .field("server_port", &self.server_port)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("password_cost", &self.password_cost)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(issuer) = lookup("JWT_ISSUER") {
            builder = builder.jwt_issuer(issuer);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
            builder = builder.database_max_connections(parse_var("DATABASE_MAX_CONNECTIONS", &value)?);
        }
        if let Some(value) = lookup("SERVER_PORT") {
            builder = builder.server_port(parse_var("SERVER_PORT", &value)?);
        }
        if let Some(value) = lookup("BCRYPT_COST") {
            builder = builder.password_cost(parse_var("BCRYPT_COST", &value)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.jwt_issuer.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_ISSUER"));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        if !(4..=31).contains(&self.password_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: self.password_cost.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    database_max_connections: Option<u32>,
    server_port: Option<u16>,
    jwt_secret: Option<String>,
    jwt_issuer: Option<String>,
    password_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the pool size
    pub fn database_max_connections(mut self, max: u32) -> Self {
        self.database_max_connections = Some(max);
        self
    }

    /// Set the listening port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token issuer
    pub fn jwt_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.jwt_issuer = Some(issuer.into());
        self
    }

    /// Set the bcrypt cost
    pub fn password_cost(mut self, cost: u32) -> Self {
        self.password_cost = Some(cost);
        self
    }

    /// Build the configuration
    ///
    /// There is no fallback secret: a missing `jwt_secret` is an error.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: self
                .database_max_connections
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            jwt_issuer: self
                .jwt_issuer
                .unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string()),
            password_cost: self.password_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
