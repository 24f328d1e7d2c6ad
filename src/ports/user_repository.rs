//! User repository port.
//!
//! Profiles are provisioned lazily: the identity provider owns accounts,
//! this service only keeps the score attached to each subject.

use crate::domain::foundation::{AuthenticatedUser, DomainError, UserId};
use crate::domain::user::UserProfile;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the caller's profile, creating it with a zero score on first sight.
    ///
    /// Email, display name and role are refreshed from the token on each call.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn ensure_registered(&self, user: &AuthenticatedUser) -> Result<UserProfile, DomainError>;

    /// Find a profile by subject. Returns `None` if never seen.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Add points to a user's score.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the profile doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn add_points(&self, id: &UserId, points: u32) -> Result<(), DomainError>;
}
