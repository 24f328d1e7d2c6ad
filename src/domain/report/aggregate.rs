//! Report aggregate.

use serde::{Deserialize, Serialize};

use super::{ProblemType, ReportStatus};
use crate::domain::foundation::{
    require_text, DebateId, ReportId, Timestamp, UserId, ValidationError,
};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// A problem raised by a user, handled by administrators.
///
/// # Invariants
///
/// - `resolved_at` is set only by a closing status change
/// - `handled_by` names the last administrator who processed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    id: ReportId,
    reporter: UserId,
    title: String,
    description: String,
    problem_type: ProblemType,
    status: ReportStatus,
    created_at: Timestamp,
    resolved_at: Option<Timestamp>,
    admin_comment: Option<String>,
    handled_by: Option<UserId>,
    debate_id: Option<DebateId>,
}

impl Report {
    /// File a new pending report.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` for a blank or oversized title or description
    pub fn file(
        reporter: UserId,
        title: &str,
        description: &str,
        problem_type: ProblemType,
        debate_id: Option<DebateId>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ReportId::new(),
            reporter,
            title: require_text("title", title, MAX_TITLE_LENGTH)?,
            description: require_text("description", description, MAX_DESCRIPTION_LENGTH)?,
            problem_type,
            status: ReportStatus::Pending,
            created_at: Timestamp::now(),
            resolved_at: None,
            admin_comment: None,
            handled_by: None,
            debate_id,
        })
    }

    /// Reconstitute a report from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ReportId,
        reporter: UserId,
        title: String,
        description: String,
        problem_type: ProblemType,
        status: ReportStatus,
        created_at: Timestamp,
        resolved_at: Option<Timestamp>,
        admin_comment: Option<String>,
        handled_by: Option<UserId>,
        debate_id: Option<DebateId>,
    ) -> Self {
        Self {
            id,
            reporter,
            title,
            description,
            problem_type,
            status,
            created_at,
            resolved_at,
            admin_comment,
            handled_by,
            debate_id,
        }
    }

    /// Record an administrator's decision.
    ///
    /// A blank comment leaves the previous one untouched. Closing statuses
    /// stamp `resolved_at`.
    pub fn process(
        &mut self,
        admin: UserId,
        status: ReportStatus,
        comment: Option<&str>,
    ) -> Result<(), ValidationError> {
        if let Some(comment) = comment.filter(|c| !c.trim().is_empty()) {
            self.admin_comment = Some(require_text("admin_comment", comment, MAX_COMMENT_LENGTH)?);
        }
        self.status = status;
        self.handled_by = Some(admin);
        if status.is_closing() {
            self.resolved_at = Some(Timestamp::now());
        }
        Ok(())
    }

    pub fn id(&self) -> ReportId {
        self.id
    }

    pub fn reporter(&self) -> &UserId {
        &self.reporter
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn problem_type(&self) -> ProblemType {
        self.problem_type
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn resolved_at(&self) -> Option<Timestamp> {
        self.resolved_at
    }

    pub fn admin_comment(&self) -> Option<&str> {
        self.admin_comment.as_deref()
    }

    pub fn handled_by(&self) -> Option<&UserId> {
        self.handled_by.as_ref()
    }

    pub fn debate_id(&self) -> Option<DebateId> {
        self.debate_id
    }

    pub fn is_filed_by(&self, user_id: &UserId) -> bool {
        &self.reporter == user_id
    }
}
