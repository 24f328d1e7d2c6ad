//! HTTP middleware for axum.
//!
//! - `auth` - Bearer token validation and the `RequireAuth` extractor
//! - `provision` - First-seen user registration

pub mod auth;
pub mod provision;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
pub use provision::{provision_middleware, ProvisionState};
