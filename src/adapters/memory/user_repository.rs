//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, UserId};
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile directly (useful for tests).
    pub async fn insert(&self, profile: UserProfile) {
        self.users.write().await.insert(profile.id().clone(), profile);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn ensure_registered(&self, user: &AuthenticatedUser) -> Result<UserProfile, DomainError> {
        let mut users = self.users.write().await;
        let profile = match users.remove(&user.id) {
            Some(existing) => UserProfile::reconstitute(
                user.id.clone(),
                user.email.clone(),
                user.display_name.clone(),
                user.role,
                existing.score(),
                existing.registered_at(),
            ),
            None => UserProfile::register(user),
        };
        users.insert(user.id.clone(), profile.clone());
        Ok(profile)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn add_points(&self, id: &UserId, points: u32) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let profile = users.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
        })?;
        profile.add_points(points);
        Ok(())
    }
}
