//! Mock session validator for tests.
//!
//! ```ignore
//! let validator = MockSessionValidator::new()
//!     .with_test_user("token-alice", "alice")
//!     .with_test_admin("token-root", "root");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role, UserId};
use crate::ports::SessionValidator;

/// Maps fixed tokens to users. Unknown tokens return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    /// Returned for every validation when set.
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Adds a regular user whose email and name derive from `user_id`.
    ///
    /// Blank ids are ignored.
    pub fn with_test_user(self, token: impl Into<String>, user_id: &str) -> Self {
        self.with_role(token, user_id, Role::User)
    }

    /// Same as `with_test_user` with the admin role.
    pub fn with_test_admin(self, token: impl Into<String>, user_id: &str) -> Self {
        self.with_role(token, user_id, Role::Admin)
    }

    fn with_role(self, token: impl Into<String>, user_id: &str, role: Role) -> Self {
        match UserId::new(user_id) {
            Ok(id) => {
                let user = AuthenticatedUser::new(
                    id,
                    format!("{}@test.example.com", user_id),
                    Some(format!("Test User {}", user_id)),
                    role,
                );
                self.with_user(token, user)
            }
            Err(_) => self,
        }
    }

    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }
        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_registered_tokens() {
        let validator = MockSessionValidator::new()
            .with_test_user("t-user", "alice")
            .with_test_admin("t-admin", "root");

        let alice = validator.validate("t-user").await.unwrap();
        assert_eq!(alice.id.as_str(), "alice");
        assert!(!alice.is_admin());
        assert!(validator.validate("t-admin").await.unwrap().is_admin());
        assert!(matches!(
            validator.validate("nope").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn forced_error_wins() {
        let validator = MockSessionValidator::new()
            .with_test_user("t", "alice")
            .with_error(AuthError::service_unavailable("down"));
        assert!(matches!(
            validator.validate("t").await,
            Err(AuthError::ServiceUnavailable(_))
        ));
    }
}
