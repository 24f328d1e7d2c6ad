//! ListTopicsHandler - Topic catalogue annotated for the caller.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::topic::{Topic, TopicError};
use crate::domain::user::Level;
use crate::ports::{TopicFilter, TopicRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct ListTopicsQuery {
    pub user_id: UserId,
    pub filter: TopicFilter,
}

/// A topic plus whether the caller's level unlocks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicView {
    pub topic: Topic,
    pub accessible: bool,
}

pub struct ListTopicsHandler {
    users: Arc<dyn UserRepository>,
    topics: Arc<dyn TopicRepository>,
}

impl ListTopicsHandler {
    pub fn new(users: Arc<dyn UserRepository>, topics: Arc<dyn TopicRepository>) -> Self {
        Self { users, topics }
    }

    /// Ordered by title.
    pub async fn handle(&self, query: ListTopicsQuery) -> Result<Vec<TopicView>, TopicError> {
        let score = self
            .users
            .find_by_id(&query.user_id)
            .await?
            .map(|profile| profile.score())
            .unwrap_or_default();
        let level = Level::for_score(score);

        let topics = self.topics.list(&query.filter).await?;
        Ok(topics
            .into_iter()
            .map(|topic| TopicView {
                accessible: topic.is_accessible_at(level),
                topic,
            })
            .collect())
    }
}
