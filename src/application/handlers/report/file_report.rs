//! Reporter-side operations.

use std::sync::Arc;

use crate::domain::foundation::{DebateId, ReportId, UserId};
use crate::domain::report::{ProblemType, Report, ReportError};
use crate::ports::{DebateRepository, ReportRepository};

#[derive(Debug, Clone)]
pub struct CreateReportCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub problem_type: ProblemType,
    pub debate_id: Option<DebateId>,
}

pub struct CreateReportHandler {
    reports: Arc<dyn ReportRepository>,
    debates: Arc<dyn DebateRepository>,
}

impl CreateReportHandler {
    pub fn new(reports: Arc<dyn ReportRepository>, debates: Arc<dyn DebateRepository>) -> Self {
        Self { reports, debates }
    }

    pub async fn handle(&self, cmd: CreateReportCommand) -> Result<Report, ReportError> {
        // 1. Validate the content
        let report = Report::file(
            cmd.user_id.clone(),
            &cmd.title,
            &cmd.description,
            cmd.problem_type,
            cmd.debate_id,
        )?;

        // 2. An attached debate must be the reporter's own
        if let Some(debate_id) = cmd.debate_id {
            let owned = self
                .debates
                .find_by_id(&debate_id)
                .await?
                .is_some_and(|d| d.is_owned_by(&cmd.user_id));
            if !owned {
                return Err(ReportError::DebateNotFound(debate_id));
            }
        }

        self.reports.save(&report).await?;

        tracing::info!(
            report_id = %report.id(),
            user_id = %cmd.user_id,
            problem_type = %report.problem_type(),
            "Report filed"
        );
        Ok(report)
    }
}

#[derive(Debug, Clone)]
pub struct MyReportsQuery {
    pub user_id: UserId,
}

pub struct MyReportsHandler {
    reports: Arc<dyn ReportRepository>,
}

impl MyReportsHandler {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    /// Newest first.
    pub async fn handle(&self, query: MyReportsQuery) -> Result<Vec<Report>, ReportError> {
        Ok(self.reports.find_by_reporter(&query.user_id).await?)
    }
}

#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub user_id: UserId,
    pub report_id: ReportId,
}

pub struct GetReportHandler {
    reports: Arc<dyn ReportRepository>,
}

impl GetReportHandler {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    /// Only the reporter may read a report.
    pub async fn handle(&self, query: GetReportQuery) -> Result<Report, ReportError> {
        let report = self
            .reports
            .find_by_id(&query.report_id)
            .await?
            .ok_or(ReportError::NotFound(query.report_id))?;

        if !report.is_filed_by(&query.user_id) {
            return Err(ReportError::Forbidden);
        }
        Ok(report)
    }
}
