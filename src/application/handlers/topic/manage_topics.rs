//! Admin-only topic management.

use std::sync::Arc;

use super::require_admin;
use crate::domain::foundation::{AuthenticatedUser, TopicId};
use crate::domain::topic::{Category, Topic, TopicError};
use crate::domain::user::Level;
use crate::ports::{DebateRepository, TopicRepository};

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    pub user: AuthenticatedUser,
    pub title: String,
    pub category: Category,
    pub difficulty: Level,
}

pub struct CreateTopicHandler {
    topics: Arc<dyn TopicRepository>,
}

impl CreateTopicHandler {
    pub fn new(topics: Arc<dyn TopicRepository>) -> Self {
        Self { topics }
    }

    pub async fn handle(&self, cmd: CreateTopicCommand) -> Result<Topic, TopicError> {
        require_admin(&cmd.user)?;

        let topic = Topic::new(&cmd.title, cmd.category, cmd.difficulty)?;
        self.topics.save(&topic).await?;

        tracing::info!(topic_id = %topic.id(), admin_id = %cmd.user.id, "Topic created");
        Ok(topic)
    }
}

/// Partial update; absent or blank fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    pub user: AuthenticatedUser,
    pub topic_id: TopicId,
    pub title: Option<String>,
    pub category: Option<Category>,
    pub difficulty: Option<Level>,
}

pub struct UpdateTopicHandler {
    topics: Arc<dyn TopicRepository>,
}

impl UpdateTopicHandler {
    pub fn new(topics: Arc<dyn TopicRepository>) -> Self {
        Self { topics }
    }

    pub async fn handle(&self, cmd: UpdateTopicCommand) -> Result<Topic, TopicError> {
        require_admin(&cmd.user)?;

        let mut topic = self
            .topics
            .find_by_id(&cmd.topic_id)
            .await?
            .ok_or(TopicError::NotFound(cmd.topic_id))?;

        topic.apply_changes(cmd.title.as_deref(), cmd.category, cmd.difficulty)?;
        self.topics.update(&topic).await?;

        tracing::info!(topic_id = %topic.id(), admin_id = %cmd.user.id, "Topic updated");
        Ok(topic)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteTopicCommand {
    pub user: AuthenticatedUser,
    pub topic_id: TopicId,
}

pub struct DeleteTopicHandler {
    topics: Arc<dyn TopicRepository>,
    debates: Arc<dyn DebateRepository>,
}

impl DeleteTopicHandler {
    pub fn new(topics: Arc<dyn TopicRepository>, debates: Arc<dyn DebateRepository>) -> Self {
        Self { topics, debates }
    }

    /// Refused while any debate references the topic.
    pub async fn handle(&self, cmd: DeleteTopicCommand) -> Result<(), TopicError> {
        require_admin(&cmd.user)?;

        if self.topics.find_by_id(&cmd.topic_id).await?.is_none() {
            return Err(TopicError::NotFound(cmd.topic_id));
        }
        if self.debates.count_by_topic(&cmd.topic_id).await? > 0 {
            return Err(TopicError::InUse(cmd.topic_id));
        }

        self.topics.delete(&cmd.topic_id).await?;
        tracing::info!(topic_id = %cmd.topic_id, admin_id = %cmd.user.id, "Topic deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestWorld;
    use crate::domain::debate::{Debate, DebateKind, Stance};
    use crate::domain::foundation::ValidationError;

    #[tokio::test]
    async fn admin_creates_topic() {
        let world = TestWorld::new();
        let admin = world.admin("root").await;

        let topic = CreateTopicHandler::new(world.topic_repo())
            .handle(CreateTopicCommand {
                user: admin,
                title: "  L'art contemporain  ".into(),
                category: Category::Art,
                difficulty: Level::Advanced,
            })
            .await
            .unwrap();

        assert_eq!(topic.title(), "L'art contemporain");
        assert!(world.topics.find_by_id(&topic.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let world = TestWorld::new();
        let user = world.user("alice").await;

        let err = CreateTopicHandler::new(world.topic_repo())
            .handle(CreateTopicCommand {
                user,
                title: "Sujet".into(),
                category: Category::Art,
                difficulty: Level::Beginner,
            })
            .await
            .unwrap_err();

        assert_eq!(err, TopicError::Forbidden);
    }

    #[tokio::test]
    async fn blank_title_is_rejected_on_create() {
        let world = TestWorld::new();
        let admin = world.admin("root").await;

        let err = CreateTopicHandler::new(world.topic_repo())
            .handle(CreateTopicCommand {
                user: admin,
                title: "   ".into(),
                category: Category::Art,
                difficulty: Level::Beginner,
            })
            .await
            .unwrap_err();

        assert_eq!(err, TopicError::Validation(ValidationError::empty_field("title")));
    }

    #[tokio::test]
    async fn update_ignores_blank_title() {
        let world = TestWorld::new();
        let admin = world.admin("root").await;
        let topic = world.topic("Le sport", Level::Beginner).await;

        let updated = UpdateTopicHandler::new(world.topic_repo())
            .handle(UpdateTopicCommand {
                user: admin,
                topic_id: topic.id(),
                title: Some("  ".into()),
                category: Some(Category::Health),
                difficulty: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.title(), "Le sport");
        assert_eq!(updated.category(), Category::Health);
        assert_eq!(updated.difficulty(), Level::Beginner);
    }

    #[tokio::test]
    async fn update_unknown_topic_is_not_found() {
        let world = TestWorld::new();
        let admin = world.admin("root").await;
        let id = TopicId::new();

        let err = UpdateTopicHandler::new(world.topic_repo())
            .handle(UpdateTopicCommand {
                user: admin,
                topic_id: id,
                title: Some("x".into()),
                category: None,
                difficulty: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, TopicError::NotFound(id));
    }

    #[tokio::test]
    async fn delete_refuses_referenced_topic() {
        let world = TestWorld::new();
        let admin = world.admin("root").await;
        let user = world.user("alice").await;
        let topic = world.topic("Les OGM", Level::Beginner).await;
        let debate = Debate::start(user.id.clone(), topic.id(), Stance::For, DebateKind::Training);
        world.debates.save(&debate).await.unwrap();
        let h = DeleteTopicHandler::new(world.topic_repo(), world.debate_repo());

        let err = h
            .handle(DeleteTopicCommand {
                user: admin.clone(),
                topic_id: topic.id(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, TopicError::InUse(topic.id()));

        let free = world.topic("Le cinéma", Level::Beginner).await;
        h.handle(DeleteTopicCommand {
            user: admin,
            topic_id: free.id(),
        })
        .await
        .unwrap();
        assert!(world.topics.find_by_id(&free.id()).await.unwrap().is_none());
    }
}
