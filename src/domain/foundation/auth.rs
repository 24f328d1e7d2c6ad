//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is populated by whichever `SessionValidator` adapter
//! is wired in; nothing here knows about JWTs.

use super::{Role, UserId};
use thiserror::Error;

/// Authenticated caller extracted from a validated bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Token subject.
    pub id: UserId,

    pub email: String,

    /// Display name if the token carries one.
    pub display_name: Option<String>,

    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: Option<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Returns the user's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Token is valid but the caller lacks the required role.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-123").unwrap(), "a@b.c", None, role)
    }

    #[test]
    fn is_admin_follows_role() {
        assert!(user(Role::Admin).is_admin());
        assert!(!user(Role::User).is_admin());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut u = user(Role::User);
        assert_eq!(u.display_name_or_email(), "a@b.c");
        u.display_name = Some("Alice".to_string());
        assert_eq!(u.display_name_or_email(), "Alice");
    }

    #[test]
    fn service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("Connection refused");
        assert_eq!(format!("{}", err), "Auth service unavailable: Connection refused");
        assert!(!err.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
    }
}
