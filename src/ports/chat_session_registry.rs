//! Chat session registry port.
//!
//! Maps each live debate to the chatbot session carrying its conversation.
//! Entries are process-local and may be lost on restart; the chatbot then
//! simply opens a fresh session on the next turn.

use async_trait::async_trait;

use crate::domain::foundation::DebateId;

#[async_trait]
pub trait ChatSessionRegistry: Send + Sync {
    /// Session currently bound to a debate.
    async fn get(&self, debate_id: &DebateId) -> Option<String>;

    /// Bind (or rebind) a debate to a session.
    async fn set(&self, debate_id: DebateId, session_id: String);

    /// Unbind a debate, returning the session it had.
    async fn remove(&self, debate_id: &DebateId) -> Option<String>;

    /// Number of debates with a live session.
    async fn active_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_session_registry_is_object_safe() {
        fn _accepts_dyn(_registry: &dyn ChatSessionRegistry) {}
    }
}
