//! User Profile Module
//!
//! Handlers for the signed-in user's own profile. The user model and its
//! database operations live in `auth::users`.

pub mod handlers;
