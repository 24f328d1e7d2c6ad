//! In-memory topic repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, TopicId};
use crate::domain::topic::Topic;
use crate::ports::{TopicFilter, TopicRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTopicRepository {
    topics: Arc<RwLock<HashMap<TopicId, Topic>>>,
}

impl InMemoryTopicRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &TopicId) -> DomainError {
    DomainError::new(ErrorCode::TopicNotFound, format!("Topic not found: {}", id))
}

#[async_trait]
impl TopicRepository for InMemoryTopicRepository {
    async fn save(&self, topic: &Topic) -> Result<(), DomainError> {
        self.topics.write().await.insert(topic.id(), topic.clone());
        Ok(())
    }

    async fn update(&self, topic: &Topic) -> Result<(), DomainError> {
        let mut topics = self.topics.write().await;
        let slot = topics.get_mut(&topic.id()).ok_or_else(|| not_found(&topic.id()))?;
        *slot = topic.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, DomainError> {
        Ok(self.topics.read().await.get(id).cloned())
    }

    async fn list(&self, filter: &TopicFilter) -> Result<Vec<Topic>, DomainError> {
        let mut topics: Vec<Topic> = self
            .topics
            .read()
            .await
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        topics.sort_by(|a, b| a.title().cmp(b.title()));
        Ok(topics)
    }

    async fn delete(&self, id: &TopicId) -> Result<(), DomainError> {
        self.topics
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
