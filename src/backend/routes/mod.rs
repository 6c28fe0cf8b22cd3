//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, tracing and fallback
//! - **`api_routes`** - Auth, profile and book endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Protected Routes
//!
//! Profile and book routes are wrapped with `authorize_jwt` as a route
//! layer, so unknown paths fall through to the 404 fallback instead of
//! being asked for a token.
//!
//! # Example
//!
//! ```rust,no_run
//! use bookshelf::backend::routes::create_router;
//! use bookshelf::backend::server::state::AppState;
//!
//! # fn example(app_state: AppState) {
//! let router = create_router(app_state);
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
