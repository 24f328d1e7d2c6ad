//! Chatbot gateway port - the external conversational service debates run
//! against.
//!
//! The service keeps its own conversation memory, keyed by an opaque session
//! id it hands back on every reply.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::debate::ChatbotMode;
use crate::domain::foundation::{DomainError, ErrorCode};

/// One conversational turn sent to the chatbot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub mode: ChatbotMode,
    /// Session to continue; `None` opens a new one.
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, mode: ChatbotMode) -> Self {
        Self {
            message: message.into(),
            mode,
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }
}

/// The chatbot's answer to a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatbotError {
    /// Could not reach the service.
    #[error("chatbot unreachable: {0}")]
    Unreachable(String),

    #[error("chatbot timed out")]
    Timeout,

    /// Non-success HTTP status.
    #[error("chatbot returned status {status}")]
    Status { status: u16 },

    #[error("empty response from chatbot")]
    EmptyResponse,

    /// Body could not be decoded.
    #[error("invalid chatbot response: {0}")]
    InvalidResponse(String),
}

impl From<ChatbotError> for DomainError {
    fn from(err: ChatbotError) -> Self {
        DomainError::new(ErrorCode::ChatbotError, err.to_string())
    }
}

#[async_trait]
pub trait ChatbotGateway: Send + Sync {
    /// Whether the service answers its health probe. Never errors.
    async fn is_healthy(&self) -> bool;

    /// Send one turn and wait for the reply.
    ///
    /// # Errors
    ///
    /// - `Unreachable` / `Timeout` on transport failures
    /// - `Status` on non-2xx answers
    /// - `EmptyResponse` / `InvalidResponse` on unusable bodies
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ChatbotError>;

    /// Ask the service to drop a session's memory.
    async fn clear_session(&self, session_id: &str) -> Result<(), ChatbotError>;
}
