//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `UserRepository`, `TopicRepository`, `DebateRepository`,
//!   `MessageRepository`, `ReportRepository`
//!
//! ## Chatbot
//!
//! - `ChatbotGateway` - The external debate chatbot
//! - `ChatSessionRegistry` - Debate to chatbot session bindings
//!
//! ## Auth
//!
//! - `SessionValidator` - Bearer token validation

mod chat_session_registry;
mod chatbot_gateway;
mod debate_repository;
mod message_repository;
mod report_repository;
mod session_validator;
mod topic_repository;
mod user_repository;

pub use chat_session_registry::ChatSessionRegistry;
pub use chatbot_gateway::{ChatReply, ChatRequest, ChatbotError, ChatbotGateway};
pub use debate_repository::{DebateFilter, DebateRepository};
pub use message_repository::MessageRepository;
pub use report_repository::{ReportFilter, ReportRepository};
pub use session_validator::SessionValidator;
pub use topic_repository::{TopicFilter, TopicRepository};
pub use user_repository::UserRepository;
