//! In-memory message repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::debate::Message;
use crate::domain::foundation::{DebateId, DomainError};
use crate::ports::MessageRepository;

/// Messages grouped per debate, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<HashMap<DebateId, Vec<Message>>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: &Message) -> Result<(), DomainError> {
        self.messages
            .write()
            .await
            .entry(message.debate_id())
            .or_default()
            .push(message.clone());
        Ok(())
    }

    async fn find_by_debate(&self, debate_id: &DebateId) -> Result<Vec<Message>, DomainError> {
        Ok(self
            .messages
            .read()
            .await
            .get(debate_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_by_debate(&self, debate_id: &DebateId) -> Result<u64, DomainError> {
        let removed = self.messages.write().await.remove(debate_id);
        Ok(removed.map_or(0, |m| m.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_chronological_order_and_deletes_per_debate() {
        let repo = InMemoryMessageRepository::new();
        let debate = DebateId::new();
        let other = DebateId::new();
        repo.save(&Message::from_chatbot(debate, "first")).await.unwrap();
        repo.save(&Message::from_chatbot(other, "elsewhere")).await.unwrap();
        repo.save(&Message::from_chatbot(debate, "second")).await.unwrap();

        let contents: Vec<_> = repo
            .find_by_debate(&debate)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.content().to_string())
            .collect();
        assert_eq!(contents, vec!["first", "second"]);

        assert_eq!(repo.delete_by_debate(&debate).await.unwrap(), 2);
        assert!(repo.find_by_debate(&debate).await.unwrap().is_empty());
        assert_eq!(repo.find_by_debate(&other).await.unwrap().len(), 1);
    }
}
