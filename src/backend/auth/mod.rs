//! Authentication Module
//!
//! This module handles user registration, login, and token management.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`credentials`** - E-mail / password verification
//! - **`sessions`** - Token issuance and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── credentials.rs  - Credential check
//! ├── sessions.rs     - Token service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Protected routes**: token in the Authorization header → validated by
//!    the gate → caller identity available to handlers
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless, signed with HS256, and expire after one year
//! - Invalid credentials return 401 whether the email exists or not

pub mod users;
pub mod credentials;
pub mod sessions;
pub mod handlers;

pub use credentials::{verify_credential, CredentialCheck};
pub use handlers::{login, register};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::User;
