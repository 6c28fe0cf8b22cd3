//! Integration tests
//!
//! - **`api`** - HTTP endpoints through the full router
//! - **`database`** - Migrations and schema constraints

mod api;
mod database;
