//! Books Module
//!
//! Book persistence and the `/api/books` handlers.
//!
//! - **`db`** - Book model and database operations
//! - **`types`** - Request bodies
//! - **`handlers`** - HTTP handlers

pub mod db;
pub mod types;
pub mod handlers;

pub use db::{Book, BookOwner};
