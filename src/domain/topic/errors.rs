//! Topic-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, TopicId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    #[error("Topic not found: {0}")]
    NotFound(TopicId),

    #[error("Only administrators can manage topics")]
    Forbidden,

    #[error("Topic {0} is referenced by existing debates")]
    InUse(TopicId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl TopicError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TopicError::NotFound(_) => ErrorCode::TopicNotFound,
            TopicError::Forbidden => ErrorCode::Forbidden,
            TopicError::InUse(_) => ErrorCode::Conflict,
            TopicError::Validation(_) => ErrorCode::ValidationFailed,
            TopicError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for TopicError {
    fn from(err: DomainError) -> Self {
        TopicError::Infrastructure(err.to_string())
    }
}
