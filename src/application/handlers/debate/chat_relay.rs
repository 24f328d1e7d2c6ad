//! ChatRelay - Forwards participant turns to the chatbot.
//!
//! Owns the binding between a debate and the chatbot session carrying its
//! conversation. Relaying never fails: every problem is turned into a
//! chatbot-side reply the participant can read.

use std::sync::Arc;

use crate::domain::debate::{script, ChatbotMode, Debate};
use crate::domain::foundation::DebateId;
use crate::ports::{ChatReply, ChatRequest, ChatSessionRegistry, ChatbotError, ChatbotGateway};

pub struct ChatRelay {
    chatbot: Arc<dyn ChatbotGateway>,
    sessions: Arc<dyn ChatSessionRegistry>,
}

impl ChatRelay {
    pub fn new(chatbot: Arc<dyn ChatbotGateway>, sessions: Arc<dyn ChatSessionRegistry>) -> Self {
        Self { chatbot, sessions }
    }

    /// Relay a participant message and return the text to store as the reply.
    pub async fn relay(&self, debate: &Debate, topic_title: &str, message: &str) -> String {
        // 1. Bail out early if the service is down
        if !self.chatbot.is_healthy().await {
            tracing::warn!(debate_id = %debate.id(), "Chatbot unavailable, sending fallback");
            return script::UNAVAILABLE_REPLY.to_string();
        }

        // 2. Wrap the message with its debate context
        let mode = debate.kind().chatbot_mode();
        let prompt = script::contextual_prompt(debate, topic_title, message);

        // 3. Continue the debate's session, if any
        match self.send(debate.id(), prompt, mode).await {
            Ok(reply) if reply.text.trim().is_empty() => {
                tracing::warn!(debate_id = %debate.id(), "Chatbot returned an empty reply");
                script::EMPTY_REPLY.to_string()
            }
            Ok(reply) => reply.text,
            Err(e) => {
                tracing::warn!(debate_id = %debate.id(), %mode, error = %e, "Chatbot call failed");
                script::technical_error_reply(&e)
            }
        }
    }

    /// Send a raw turn on the debate's session and rebind whatever session
    /// the chatbot answers with.
    pub async fn send(
        &self,
        debate_id: DebateId,
        message: String,
        mode: ChatbotMode,
    ) -> Result<ChatReply, ChatbotError> {
        let session = self.sessions.get(&debate_id).await;
        tracing::debug!(%debate_id, %mode, has_session = session.is_some(), "Sending turn to chatbot");

        let reply = self
            .chatbot
            .chat(ChatRequest::new(message, mode).with_session(session))
            .await?;

        if let Some(session_id) = &reply.session_id {
            self.sessions.set(debate_id, session_id.clone()).await;
        }
        Ok(reply)
    }

    /// Forget the debate's session and ask the chatbot to drop it.
    ///
    /// Failures are only logged.
    pub async fn release(&self, debate_id: DebateId) {
        let Some(session_id) = self.sessions.remove(&debate_id).await else {
            return;
        };
        if let Err(e) = self.chatbot.clear_session(&session_id).await {
            tracing::warn!(%debate_id, session_id = %session_id, error = %e, "Failed to clear chatbot session");
        }
    }

    pub async fn is_healthy(&self) -> bool {
        self.chatbot.is_healthy().await
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.active_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::chatbot::{ScriptedChatbot, DEFAULT_SESSION};
    use crate::adapters::memory::InMemoryChatSessionRegistry;
    use crate::domain::debate::{DebateKind, Stance};
    use crate::domain::foundation::{TopicId, UserId};

    fn setup() -> (ChatRelay, ScriptedChatbot, InMemoryChatSessionRegistry) {
        let bot = ScriptedChatbot::new();
        let sessions = InMemoryChatSessionRegistry::new();
        let relay = ChatRelay::new(Arc::new(bot.clone()), Arc::new(sessions.clone()));
        (relay, bot, sessions)
    }

    fn debate(kind: DebateKind) -> Debate {
        Debate::start(UserId::new("u").unwrap(), TopicId::new(), Stance::For, kind)
    }

    #[tokio::test]
    async fn unhealthy_chatbot_yields_unavailable_reply() {
        let (relay, bot, _) = setup();
        bot.set_healthy(false);

        let reply = relay.relay(&debate(DebateKind::Training), "Sujet", "Bonjour").await;

        assert_eq!(reply, script::UNAVAILABLE_REPLY);
        assert!(bot.requests().await.is_empty());
    }

    #[tokio::test]
    async fn first_turn_opens_session_and_next_turn_reuses_it() {
        let (relay, bot, sessions) = setup();
        let d = debate(DebateKind::Test);
        bot.push_reply("Premier", Some("s-1")).await;
        bot.push_reply("Second", None).await;

        assert_eq!(relay.relay(&d, "Sujet", "un").await, "Premier");
        assert_eq!(sessions.get(&d.id()).await.as_deref(), Some("s-1"));
        assert_eq!(relay.relay(&d, "Sujet", "deux").await, "Second");

        let requests = bot.requests().await;
        assert_eq!(requests[0].session_id, None);
        assert_eq!(requests[0].mode, ChatbotMode::Score);
        assert!(requests[0].message.starts_with("Contexte du débat:"));
        assert!(requests[0].message.ends_with("Message à analyser: un"));
        assert_eq!(requests[1].session_id.as_deref(), Some("s-1"));
    }

    #[tokio::test]
    async fn returned_session_replaces_binding() {
        let (relay, bot, sessions) = setup();
        let d = debate(DebateKind::Training);
        bot.push_reply("a", Some("s-1")).await;
        bot.push_reply("b", Some("s-2")).await;

        relay.relay(&d, "Sujet", "un").await;
        relay.relay(&d, "Sujet", "deux").await;

        assert_eq!(sessions.get(&d.id()).await.as_deref(), Some("s-2"));
    }

    #[tokio::test]
    async fn blank_reply_is_replaced() {
        let (relay, bot, _) = setup();
        bot.push_reply("   ", Some("s-1")).await;

        let reply = relay.relay(&debate(DebateKind::Training), "Sujet", "?").await;
        assert_eq!(reply, script::EMPTY_REPLY);
    }

    #[tokio::test]
    async fn chatbot_error_becomes_technical_reply() {
        let (relay, bot, _) = setup();
        bot.push_error(ChatbotError::Timeout).await;

        let reply = relay.relay(&debate(DebateKind::Training), "Sujet", "?").await;
        assert_eq!(reply, "Erreur technique avec le chatbot : chatbot timed out");
    }

    #[tokio::test]
    async fn release_clears_remote_session_once() {
        let (relay, bot, sessions) = setup();
        let d = debate(DebateKind::Training);
        relay.relay(&d, "Sujet", "hello").await;
        assert_eq!(relay.active_sessions().await, 1);

        relay.release(d.id()).await;
        relay.release(d.id()).await;

        assert_eq!(bot.cleared_sessions().await, vec![DEFAULT_SESSION.to_string()]);
        assert_eq!(sessions.active_count().await, 0);
    }
}
