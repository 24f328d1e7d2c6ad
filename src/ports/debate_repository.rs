//! Debate repository port.
//!
//! Debates are always read in the scope of their owner; callers never see
//! another user's debate through this port except via `find_by_id`.

use crate::domain::debate::Debate;
use crate::domain::foundation::{DebateId, DomainError, TopicId, UserId};
use async_trait::async_trait;
use serde::Deserialize;

/// Which of a user's debates to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebateFilter {
    #[default]
    #[serde(alias = "ALL")]
    All,
    #[serde(alias = "IN_PROGRESS")]
    InProgress,
    #[serde(alias = "FINISHED")]
    Finished,
}

impl DebateFilter {
    pub fn matches(&self, debate: &Debate) -> bool {
        match self {
            DebateFilter::All => true,
            DebateFilter::InProgress => !debate.is_finished(),
            DebateFilter::Finished => debate.is_finished(),
        }
    }
}

#[async_trait]
pub trait DebateRepository: Send + Sync {
    /// Save a new debate.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, debate: &Debate) -> Result<(), DomainError>;

    /// Persist duration and grade changes.
    ///
    /// # Errors
    ///
    /// - `DebateNotFound` if the debate doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, debate: &Debate) -> Result<(), DomainError>;

    /// Store a test's grade and credit it to the owner's score as one unit.
    ///
    /// The write only happens if no grade is stored yet, so concurrent
    /// evaluations of the same test credit points once. Returns `false`
    /// when another grade got there first.
    ///
    /// # Errors
    ///
    /// - `DebateNotFound` if the debate doesn't exist
    /// - `UserNotFound` if the owner has no profile
    /// - `DatabaseError` on persistence failure
    async fn record_grade(&self, debate: &Debate, grade: u32) -> Result<bool, DomainError>;

    /// Find a debate by its ID, regardless of owner.
    async fn find_by_id(&self, id: &DebateId) -> Result<Option<Debate>, DomainError>;

    /// A user's debates matching the filter, newest first.
    async fn find_by_user(
        &self,
        user_id: &UserId,
        filter: DebateFilter,
    ) -> Result<Vec<Debate>, DomainError>;

    /// The user's unfinished debate on a topic, if any.
    async fn find_in_progress(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<Debate>, DomainError>;

    /// Number of debates (any owner, any state) referencing a topic.
    async fn count_by_topic(&self, topic_id: &TopicId) -> Result<u32, DomainError>;

    /// Delete a debate.
    ///
    /// # Errors
    ///
    /// - `DebateNotFound` if the debate doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &DebateId) -> Result<(), DomainError>;
}
