//! Topic repository port.

use crate::domain::foundation::{DomainError, TopicId};
use crate::domain::topic::{Category, Topic};
use crate::domain::user::Level;
use async_trait::async_trait;

/// Optional narrowing of a topic listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicFilter {
    pub category: Option<Category>,
    pub difficulty: Option<Level>,
}

impl TopicFilter {
    pub fn matches(&self, topic: &Topic) -> bool {
        self.category.map_or(true, |c| topic.category() == c)
            && self.difficulty.map_or(true, |d| topic.difficulty() == d)
    }
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Save a new topic.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, topic: &Topic) -> Result<(), DomainError>;

    /// Update an existing topic.
    ///
    /// # Errors
    ///
    /// - `TopicNotFound` if the topic doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, topic: &Topic) -> Result<(), DomainError>;

    /// Find a topic by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, DomainError>;

    /// List topics matching the filter, ordered by title.
    async fn list(&self, filter: &TopicFilter) -> Result<Vec<Topic>, DomainError>;

    /// Delete a topic.
    ///
    /// # Errors
    ///
    /// - `TopicNotFound` if the topic doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &TopicId) -> Result<(), DomainError>;
}
