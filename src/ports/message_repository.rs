//! Message repository port.

use crate::domain::debate::Message;
use crate::domain::foundation::{DebateId, DomainError};
use async_trait::async_trait;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message to its debate.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, message: &Message) -> Result<(), DomainError>;

    /// All messages of a debate in chronological order.
    async fn find_by_debate(&self, debate_id: &DebateId) -> Result<Vec<Message>, DomainError>;

    /// Remove every message of a debate. Returns how many were removed.
    async fn delete_by_debate(&self, debate_id: &DebateId) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MessageRepository) {}
    }
}
