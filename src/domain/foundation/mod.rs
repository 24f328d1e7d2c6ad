//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, roles and error types that form the vocabulary
//! of the debate arena.

mod auth;
mod errors;
mod ids;
mod role;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{require_text, DomainError, ErrorCode, ValidationError};
pub use ids::{DebateId, MessageId, ReportId, TopicId, UserId};
pub use role::Role;
pub use timestamp::Timestamp;
