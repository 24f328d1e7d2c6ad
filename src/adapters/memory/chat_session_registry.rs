//! In-memory chat session registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DebateId;
use crate::ports::ChatSessionRegistry;

/// Process-local debate to chatbot session map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatSessionRegistry {
    sessions: Arc<RwLock<HashMap<DebateId, String>>>,
}

impl InMemoryChatSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatSessionRegistry for InMemoryChatSessionRegistry {
    async fn get(&self, debate_id: &DebateId) -> Option<String> {
        self.sessions.read().await.get(debate_id).cloned()
    }

    async fn set(&self, debate_id: DebateId, session_id: String) {
        self.sessions.write().await.insert(debate_id, session_id);
    }

    async fn remove(&self, debate_id: &DebateId) -> Option<String> {
        self.sessions.write().await.remove(debate_id)
    }

    async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
