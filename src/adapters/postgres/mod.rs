//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! Queries are built at runtime with `sqlx::query` so the crate compiles
//! without a live database. Schema lives in `migrations/`.

mod debate_repository;
mod message_repository;
mod report_repository;
mod rows;
mod topic_repository;
mod user_repository;

pub use debate_repository::PostgresDebateRepository;
pub use message_repository::PostgresMessageRepository;
pub use report_repository::PostgresReportRepository;
pub use topic_repository::PostgresTopicRepository;
pub use user_repository::PostgresUserRepository;
