//! Chatbot gateway adapters.

mod http_client;
mod scripted;

pub use http_client::{ChatbotClientConfig, HttpChatbotGateway};
pub use scripted::{ScriptedChatbot, DEFAULT_REPLY, DEFAULT_SESSION};
