//! Report-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DebateId, DomainError, ErrorCode, ReportId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Report not found: {0}")]
    NotFound(ReportId),

    /// Attached debate is unknown or belongs to someone else.
    #[error("Debate not found: {0}")]
    DebateNotFound(DebateId),

    #[error("Permission denied")]
    Forbidden,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::NotFound(_) => ErrorCode::ReportNotFound,
            ReportError::DebateNotFound(_) => ErrorCode::DebateNotFound,
            ReportError::Forbidden => ErrorCode::Forbidden,
            ReportError::Validation(_) => ErrorCode::ValidationFailed,
            ReportError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for ReportError {
    fn from(err: DomainError) -> Self {
        ReportError::Infrastructure(err.to_string())
    }
}
