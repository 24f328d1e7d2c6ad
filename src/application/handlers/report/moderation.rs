//! Admin-side moderation of reports.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, ReportId};
use crate::domain::report::{Report, ReportError, ReportStatus};
use crate::ports::{ReportFilter, ReportRepository};

fn require_admin(user: &AuthenticatedUser) -> Result<(), ReportError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(ReportError::Forbidden)
    }
}

#[derive(Debug, Clone)]
pub struct ListReportsQuery {
    pub user: AuthenticatedUser,
    pub filter: ReportFilter,
}

pub struct ListReportsHandler {
    reports: Arc<dyn ReportRepository>,
}

impl ListReportsHandler {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    /// Newest first.
    pub async fn handle(&self, query: ListReportsQuery) -> Result<Vec<Report>, ReportError> {
        require_admin(&query.user)?;
        Ok(self.reports.list(&query.filter).await?)
    }
}

#[derive(Debug, Clone)]
pub struct ProcessReportCommand {
    pub user: AuthenticatedUser,
    pub report_id: ReportId,
    pub status: ReportStatus,
    pub comment: Option<String>,
}

pub struct ProcessReportHandler {
    reports: Arc<dyn ReportRepository>,
}

impl ProcessReportHandler {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    pub async fn handle(&self, cmd: ProcessReportCommand) -> Result<Report, ReportError> {
        require_admin(&cmd.user)?;

        let mut report = self
            .reports
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or(ReportError::NotFound(cmd.report_id))?;

        report.process(cmd.user.id.clone(), cmd.status, cmd.comment.as_deref())?;
        self.reports.update(&report).await?;

        tracing::info!(
            report_id = %report.id(),
            admin_id = %cmd.user.id,
            status = %report.status(),
            "Report processed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestWorld;
    use crate::domain::report::ProblemType;

    async fn filed(world: &TestWorld, reporter: &str, problem_type: ProblemType) -> Report {
        let user = world.user(reporter).await;
        let report = Report::file(user.id, "Titre", "Description", problem_type, None).unwrap();
        world.reports.save(&report).await.unwrap();
        report
    }

    #[tokio::test]
    async fn admin_lists_with_filter() {
        let world = TestWorld::new();
        let admin = world.admin("root").await;
        filed(&world, "alice", ProblemType::Harassment).await;
        let bug = filed(&world, "bob", ProblemType::TechnicalBug).await;

        let reports = ListReportsHandler::new(world.report_repo())
            .handle(ListReportsQuery {
                user: admin,
                filter: ReportFilter {
                    status: Some(ReportStatus::Pending),
                    problem_type: Some(ProblemType::TechnicalBug),
                },
            })
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id(), bug.id());
    }

    #[tokio::test]
    async fn non_admin_cannot_list_or_process() {
        let world = TestWorld::new();
        let user = world.user("carol").await;
        let report = filed(&world, "alice", ProblemType::Other).await;

        let list_err = ListReportsHandler::new(world.report_repo())
            .handle(ListReportsQuery {
                user: user.clone(),
                filter: ReportFilter::default(),
            })
            .await
            .unwrap_err();
        let process_err = ProcessReportHandler::new(world.report_repo())
            .handle(ProcessReportCommand {
                user,
                report_id: report.id(),
                status: ReportStatus::Resolved,
                comment: None,
            })
            .await
            .unwrap_err();

        assert_eq!(list_err, ReportError::Forbidden);
        assert_eq!(process_err, ReportError::Forbidden);
    }

    #[tokio::test]
    async fn resolving_records_admin_and_time() {
        let world = TestWorld::new();
        let admin = world.admin("root").await;
        let report = filed(&world, "alice", ProblemType::Misinformation).await;
        let h = ProcessReportHandler::new(world.report_repo());

        let in_progress = h
            .handle(ProcessReportCommand {
                user: admin.clone(),
                report_id: report.id(),
                status: ReportStatus::InProgress,
                comment: Some("On regarde".into()),
            })
            .await
            .unwrap();
        assert!(in_progress.resolved_at().is_none());

        let resolved = h
            .handle(ProcessReportCommand {
                user: admin.clone(),
                report_id: report.id(),
                status: ReportStatus::Resolved,
                comment: None,
            })
            .await
            .unwrap();

        assert_eq!(resolved.status(), ReportStatus::Resolved);
        assert_eq!(resolved.handled_by(), Some(&admin.id));
        assert_eq!(resolved.admin_comment(), Some("On regarde"));
        assert!(resolved.resolved_at().is_some());
    }

    #[tokio::test]
    async fn unknown_report_is_not_found() {
        let world = TestWorld::new();
        let admin = world.admin("root").await;
        let id = ReportId::new();

        let err = ProcessReportHandler::new(world.report_repo())
            .handle(ProcessReportCommand {
                user: admin,
                report_id: id,
                status: ReportStatus::Rejected,
                comment: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, ReportError::NotFound(id));
    }
}
