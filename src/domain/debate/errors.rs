//! Debate-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DebateId, DomainError, ErrorCode, TopicId, ValidationError};
use crate::domain::user::Level;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebateError {
    /// Unknown debate, or one owned by someone else.
    #[error("Debate not found: {0}")]
    NotFound(DebateId),

    #[error("Topic not found: {0}")]
    TopicNotFound(TopicId),

    #[error("Level too low: topic requires {required}, you are {current}")]
    LevelTooLow { required: Level, current: Level },

    #[error("A debate on this topic is already in progress")]
    AlreadyInProgress(DebateId),

    #[error("Debate already finished")]
    AlreadyFinished(DebateId),

    #[error("Finish the debate before asking for its evaluation")]
    NotFinished(DebateId),

    #[error("Only test debates can be evaluated")]
    NotATest(DebateId),

    #[error("Debate already graded")]
    AlreadyGraded(DebateId),

    #[error("Only administrators can do this")]
    Forbidden,

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl DebateError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DebateError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        DebateError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DebateError::NotFound(_) => ErrorCode::DebateNotFound,
            DebateError::TopicNotFound(_) => ErrorCode::TopicNotFound,
            DebateError::LevelTooLow { .. } | DebateError::Forbidden => ErrorCode::Forbidden,
            DebateError::AlreadyInProgress(_)
            | DebateError::AlreadyFinished(_)
            | DebateError::NotFinished(_)
            | DebateError::AlreadyGraded(_) => ErrorCode::Conflict,
            DebateError::NotATest(_) | DebateError::ValidationFailed { .. } => {
                ErrorCode::ValidationFailed
            }
            DebateError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for DebateError {
    fn from(err: ValidationError) -> Self {
        DebateError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for DebateError {
    fn from(err: DomainError) -> Self {
        DebateError::Infrastructure(err.to_string())
    }
}
