//! GetMeHandler - The caller's profile with level progress.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::domain::user::{Level, UserProfile};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: UserProfile,
    pub level: Level,
    /// `None` once at the top level.
    pub points_to_next: Option<u32>,
}

pub struct GetMeHandler {
    users: Arc<dyn UserRepository>,
}

impl GetMeHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, user: &AuthenticatedUser) -> Result<ProfileView, DomainError> {
        let profile = self.users.ensure_registered(user).await?;
        Ok(ProfileView {
            level: profile.level(),
            points_to_next: profile.points_to_next_level(),
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestWorld;
    use crate::domain::foundation::{Role, UserId};

    #[tokio::test]
    async fn reports_level_progress() {
        let world = TestWorld::new();
        let user = world.user_with_score("alice", 250).await;

        let view = GetMeHandler::new(world.user_repo()).handle(&user).await.unwrap();

        assert_eq!(view.profile.score(), 250);
        assert_eq!(view.level, Level::Intermediate);
        assert_eq!(view.points_to_next, Some(50));
    }

    #[tokio::test]
    async fn unseen_user_is_provisioned() {
        let world = TestWorld::new();
        let user = AuthenticatedUser::new(
            UserId::new("newcomer").unwrap(),
            "new@example.com",
            Some("Nouveau".to_string()),
            Role::User,
        );

        let view = GetMeHandler::new(world.user_repo()).handle(&user).await.unwrap();

        assert_eq!(view.profile.score(), 0);
        assert_eq!(view.level, Level::Beginner);
        assert_eq!(view.points_to_next, Some(100));
        assert_eq!(view.profile.display_name(), Some("Nouveau"));
    }
}
