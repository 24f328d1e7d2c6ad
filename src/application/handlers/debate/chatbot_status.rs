//! Chatbot status and the admin probe.

use std::sync::Arc;

use super::ChatRelay;
use crate::domain::debate::{script, ChatbotMode, DebateError, MAX_MESSAGE_LENGTH};
use crate::domain::foundation::{require_text, AuthenticatedUser};
use crate::ports::{ChatRequest, ChatbotGateway};

pub const CHATBOT_SERVICE_NAME: &str = "chatbot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatbotStatus {
    pub healthy: bool,
    pub service: &'static str,
    pub active_sessions: usize,
}

pub struct ChatbotStatusHandler {
    relay: Arc<ChatRelay>,
}

impl ChatbotStatusHandler {
    pub fn new(relay: Arc<ChatRelay>) -> Self {
        Self { relay }
    }

    pub async fn handle(&self) -> ChatbotStatus {
        ChatbotStatus {
            healthy: self.relay.is_healthy().await,
            service: CHATBOT_SERVICE_NAME,
            active_sessions: self.relay.active_sessions().await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeChatbotCommand {
    pub user: AuthenticatedUser,
    pub message: String,
}

/// Sends a one-off message outside any debate and reports what came back.
pub struct ProbeChatbotHandler {
    chatbot: Arc<dyn ChatbotGateway>,
}

impl ProbeChatbotHandler {
    pub fn new(chatbot: Arc<dyn ChatbotGateway>) -> Self {
        Self { chatbot }
    }

    pub async fn handle(&self, cmd: ProbeChatbotCommand) -> Result<String, DebateError> {
        if !cmd.user.is_admin() {
            return Err(DebateError::Forbidden);
        }
        let message = require_text("message", &cmd.message, MAX_MESSAGE_LENGTH)?;

        if !self.chatbot.is_healthy().await {
            return Ok(script::PROBE_UNAVAILABLE.to_string());
        }

        let outcome = self
            .chatbot
            .chat(ChatRequest::new(message, ChatbotMode::Train))
            .await;

        tracing::info!(admin_id = %cmd.user.id, success = outcome.is_ok(), "Chatbot probed");

        Ok(match outcome {
            Ok(reply) => script::probe_success(reply.session_id.as_deref(), &reply.text),
            Err(e) => script::probe_error(&e),
        })
    }
}
