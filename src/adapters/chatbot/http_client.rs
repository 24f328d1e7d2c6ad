//! HTTP client for the external debate chatbot.
//!
//! # Wire protocol
//!
//! - `GET {base}/` health probe, healthy iff 2xx
//! - `POST {base}/chat` with `{ "message", "mode", "session_id"? }`,
//!   answered by `{ "text", "session_id" }`
//! - `DELETE {base}/session/{id}` to drop a conversation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ChatReply, ChatRequest, ChatbotError, ChatbotGateway};

/// Connection settings for the chatbot service.
#[derive(Debug, Clone)]
pub struct ChatbotClientConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl ChatbotClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `ChatbotGateway` over HTTP/JSON.
pub struct HttpChatbotGateway {
    config: ChatbotClientConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatPayload<'a> {
    message: &'a str,
    mode: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ChatPayloadReply {
    #[serde(default)]
    text: String,
    #[serde(default)]
    session_id: Option<String>,
}

impl HttpChatbotGateway {
    /// Build the client.
    ///
    /// # Errors
    ///
    /// - `Unreachable` if the underlying HTTP client cannot be constructed
    pub fn new(config: ChatbotClientConfig) -> Result<Self, ChatbotError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChatbotError::Unreachable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn map_transport_error(e: reqwest::Error) -> ChatbotError {
        if e.is_timeout() {
            ChatbotError::Timeout
        } else if e.is_connect() {
            ChatbotError::Unreachable(format!("Connection failed: {}", e))
        } else {
            ChatbotError::Unreachable(e.to_string())
        }
    }
}

/// Decode a `/chat` response body.
fn decode_reply(body: &str) -> Result<ChatReply, ChatbotError> {
    if body.trim().is_empty() {
        return Err(ChatbotError::EmptyResponse);
    }
    let payload: ChatPayloadReply =
        serde_json::from_str(body).map_err(|e| ChatbotError::InvalidResponse(e.to_string()))?;
    Ok(ChatReply {
        text: payload.text,
        session_id: payload.session_id.filter(|s| !s.is_empty()),
    })
}

#[async_trait]
impl ChatbotGateway for HttpChatbotGateway {
    async fn is_healthy(&self) -> bool {
        match self.client.get(self.url("/")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Chatbot health probe failed");
                false
            }
        }
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ChatbotError> {
        let payload = ChatPayload {
            message: &request.message,
            mode: request.mode.as_str(),
            session_id: request.session_id.as_deref(),
        };

        let response = self
            .client
            .post(self.url("/chat"))
            .json(&payload)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatbotError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::map_transport_error)?;
        decode_reply(&body)
    }

    async fn clear_session(&self, session_id: &str) -> Result<(), ChatbotError> {
        let response = self
            .client
            .delete(self.url(&format!("/session/{}", session_id)))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Err(ChatbotError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}
