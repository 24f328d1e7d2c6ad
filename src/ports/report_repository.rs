//! Report repository port.

use crate::domain::foundation::{DomainError, ReportId, UserId};
use crate::domain::report::{ProblemType, Report, ReportStatus};
use async_trait::async_trait;

/// Optional narrowing of the moderation queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub status: Option<ReportStatus>,
    pub problem_type: Option<ProblemType>,
}

impl ReportFilter {
    pub fn matches(&self, report: &Report) -> bool {
        self.status.map_or(true, |s| report.status() == s)
            && self.problem_type.map_or(true, |p| report.problem_type() == p)
    }
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Save a new report.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, report: &Report) -> Result<(), DomainError>;

    /// Persist moderation changes.
    ///
    /// # Errors
    ///
    /// - `ReportNotFound` if the report doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, report: &Report) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError>;

    /// Reports filed by a user, newest first.
    async fn find_by_reporter(&self, reporter: &UserId) -> Result<Vec<Report>, DomainError>;

    /// All reports matching the filter, newest first.
    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, DomainError>;
}
