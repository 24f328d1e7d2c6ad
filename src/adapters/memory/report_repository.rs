//! In-memory report repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ReportId, UserId};
use crate::domain::report::Report;
use crate::ports::{ReportFilter, ReportRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryReportRepository {
    reports: Arc<RwLock<HashMap<ReportId, Report>>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn collect_newest_first(&self, keep: impl Fn(&Report) -> bool) -> Vec<Report> {
        let mut reports: Vec<Report> = self
            .reports
            .read()
            .await
            .values()
            .filter(|r| keep(r))
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        reports
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &Report) -> Result<(), DomainError> {
        self.reports.write().await.insert(report.id(), report.clone());
        Ok(())
    }

    async fn update(&self, report: &Report) -> Result<(), DomainError> {
        let mut reports = self.reports.write().await;
        let slot = reports.get_mut(&report.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ReportNotFound,
                format!("Report not found: {}", report.id()),
            )
        })?;
        *slot = report.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError> {
        Ok(self.reports.read().await.get(id).cloned())
    }

    async fn find_by_reporter(&self, reporter: &UserId) -> Result<Vec<Report>, DomainError> {
        Ok(self.collect_newest_first(|r| r.is_filed_by(reporter)).await)
    }

    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, DomainError> {
        Ok(self.collect_newest_first(|r| filter.matches(r)).await)
    }
}
