//! In-memory debate repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::InMemoryUserRepository;
use crate::domain::debate::Debate;
use crate::domain::foundation::{DebateId, DomainError, ErrorCode, TopicId, UserId};
use crate::ports::{DebateFilter, DebateRepository, UserRepository};

/// Debates kept in a map. Grades are credited to the linked user store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDebateRepository {
    debates: Arc<RwLock<HashMap<DebateId, Debate>>>,
    users: InMemoryUserRepository,
}

impl InMemoryDebateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit grades to this user store.
    pub fn with_users(mut self, users: InMemoryUserRepository) -> Self {
        self.users = users;
        self
    }
}

fn not_found(id: &DebateId) -> DomainError {
    DomainError::new(ErrorCode::DebateNotFound, format!("Debate not found: {}", id))
}

#[async_trait]
impl DebateRepository for InMemoryDebateRepository {
    async fn save(&self, debate: &Debate) -> Result<(), DomainError> {
        self.debates.write().await.insert(debate.id(), debate.clone());
        Ok(())
    }

    async fn update(&self, debate: &Debate) -> Result<(), DomainError> {
        let mut debates = self.debates.write().await;
        let slot = debates
            .get_mut(&debate.id())
            .ok_or_else(|| not_found(&debate.id()))?;
        *slot = debate.clone();
        Ok(())
    }

    async fn record_grade(&self, debate: &Debate, grade: u32) -> Result<bool, DomainError> {
        // Held across the credit so a racing evaluation sees the grade.
        let mut debates = self.debates.write().await;
        let stored = debates
            .get_mut(&debate.id())
            .ok_or_else(|| not_found(&debate.id()))?;
        if stored.grade().is_some() {
            return Ok(false);
        }

        self.users.add_points(debate.user_id(), grade).await?;
        *stored = debate.clone();
        Ok(true)
    }

    async fn find_by_id(&self, id: &DebateId) -> Result<Option<Debate>, DomainError> {
        Ok(self.debates.read().await.get(id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        filter: DebateFilter,
    ) -> Result<Vec<Debate>, DomainError> {
        let mut debates: Vec<Debate> = self
            .debates
            .read()
            .await
            .values()
            .filter(|d| d.is_owned_by(user_id) && filter.matches(d))
            .cloned()
            .collect();
        debates.sort_by(|a, b| b.started_at().cmp(&a.started_at()));
        Ok(debates)
    }

    async fn find_in_progress(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<Debate>, DomainError> {
        Ok(self
            .debates
            .read()
            .await
            .values()
            .find(|d| d.is_owned_by(user_id) && d.topic_id() == *topic_id && !d.is_finished())
            .cloned())
    }

    async fn count_by_topic(&self, topic_id: &TopicId) -> Result<u32, DomainError> {
        let count = self
            .debates
            .read()
            .await
            .values()
            .filter(|d| d.topic_id() == *topic_id)
            .count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn delete(&self, id: &DebateId) -> Result<(), DomainError> {
        self.debates
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
