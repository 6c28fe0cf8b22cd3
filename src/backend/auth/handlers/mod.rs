//! Authentication Handlers
//!
//! HTTP handlers for the public authentication endpoints.
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`types`** - Request and response bodies shared with the profile handlers

pub mod types;
pub mod login;
pub mod register;

pub use login::login;
pub use register::register;
pub use types::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UserUpdateRequest};
