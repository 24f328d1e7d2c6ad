//! Scripted chatbot for tests and offline runs.
//!
//! Replies are served from a queue; once it runs dry every turn gets a
//! canned answer bound to a stable session id.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::ports::{ChatReply, ChatRequest, ChatbotError, ChatbotGateway};

pub const DEFAULT_SESSION: &str = "scripted-session";
pub const DEFAULT_REPLY: &str = "Intéressant, mais je ne suis pas convaincu.";

#[derive(Debug, Clone)]
pub struct ScriptedChatbot {
    healthy: Arc<AtomicBool>,
    replies: Arc<Mutex<VecDeque<Result<ChatReply, ChatbotError>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
    cleared: Arc<Mutex<Vec<String>>>,
}

impl Default for ScriptedChatbot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedChatbot {
    pub fn new() -> Self {
        Self {
            healthy: Arc::new(AtomicBool::new(true)),
            replies: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            cleared: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A chatbot whose health probe fails.
    pub fn unavailable() -> Self {
        let bot = Self::new();
        bot.set_healthy(false);
        bot
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// Queue a successful reply.
    pub async fn push_reply(&self, text: impl Into<String>, session_id: Option<&str>) {
        self.replies.lock().await.push_back(Ok(ChatReply {
            text: text.into(),
            session_id: session_id.map(str::to_string),
        }));
    }

    /// Queue a failure.
    pub async fn push_error(&self, error: ChatbotError) {
        self.replies.lock().await.push_back(Err(error));
    }

    /// Every request received so far.
    pub async fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().await.clone()
    }

    /// Session ids the service was asked to clear.
    pub async fn cleared_sessions(&self) -> Vec<String> {
        self.cleared.lock().await.clone()
    }
}

#[async_trait]
impl ChatbotGateway for ScriptedChatbot {
    async fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ChatbotError> {
        self.requests.lock().await.push(request);
        match self.replies.lock().await.pop_front() {
            Some(reply) => reply,
            None => Ok(ChatReply {
                text: DEFAULT_REPLY.to_string(),
                session_id: Some(DEFAULT_SESSION.to_string()),
            }),
        }
    }

    async fn clear_session(&self, session_id: &str) -> Result<(), ChatbotError> {
        self.cleared.lock().await.push(session_id.to_string());
        Ok(())
    }
}
