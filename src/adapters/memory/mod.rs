//! In-memory adapters for every repository port.
//!
//! Used by tests and for running the service without a database.

mod chat_session_registry;
mod debate_repository;
mod message_repository;
mod report_repository;
mod topic_repository;
mod user_repository;

pub use chat_session_registry::InMemoryChatSessionRegistry;
pub use debate_repository::InMemoryDebateRepository;
pub use message_repository::InMemoryMessageRepository;
pub use report_repository::InMemoryReportRepository;
pub use topic_repository::InMemoryTopicRepository;
pub use user_repository::InMemoryUserRepository;
