//! HTTP DTOs for report endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DebateId;
use crate::domain::report::{ProblemType, Report, ReportStatus};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReportRequest {
    pub title: String,
    pub description: String,
    pub problem_type: ProblemType,
    #[serde(default)]
    pub debate_id: Option<DebateId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListReportsParams {
    pub status: Option<ReportStatus>,
    pub problem_type: Option<ProblemType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessReportRequest {
    pub status: ReportStatus,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub reporter_id: String,
    pub title: String,
    pub description: String,
    pub problem_type: ProblemType,
    pub status: ReportStatus,
    pub created_at: String,
    pub resolved_at: Option<String>,
    pub admin_comment: Option<String>,
    pub handled_by: Option<String>,
    pub debate_id: Option<String>,
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id().to_string(),
            reporter_id: report.reporter().to_string(),
            title: report.title().to_string(),
            description: report.description().to_string(),
            problem_type: report.problem_type(),
            status: report.status(),
            created_at: report.created_at().as_datetime().to_rfc3339(),
            resolved_at: report.resolved_at().map(|t| t.as_datetime().to_rfc3339()),
            admin_comment: report.admin_comment().map(str::to_string),
            handled_by: report.handled_by().map(ToString::to_string),
            debate_id: report.debate_id().map(|id| id.to_string()),
        }
    }
}
