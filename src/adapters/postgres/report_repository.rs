//! PostgreSQL implementation of ReportRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, db_error, enum_column, timestamp_column};
use crate::domain::foundation::{
    DebateId, DomainError, ErrorCode, ReportId, Timestamp, UserId,
};
use crate::domain::report::Report;
use crate::ports::{ReportFilter, ReportRepository};

#[derive(Clone)]
pub struct PostgresReportRepository {
    pool: PgPool,
}

impl PostgresReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_REPORT: &str = r#"
    SELECT id, reporter, title, description, problem_type, status, created_at,
           resolved_at, admin_comment, handled_by, debate_id
    FROM reports
"#;

#[async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn save(&self, report: &Report) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reports (
                id, reporter, title, description, problem_type, status, created_at,
                resolved_at, admin_comment, handled_by, debate_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(report.id().as_uuid())
        .bind(report.reporter().as_str())
        .bind(report.title())
        .bind(report.description())
        .bind(report.problem_type().as_str())
        .bind(report.status().as_str())
        .bind(report.created_at().as_datetime())
        .bind(report.resolved_at().map(|t| *t.as_datetime()))
        .bind(report.admin_comment())
        .bind(report.handled_by().map(UserId::as_str))
        .bind(report.debate_id().map(|d| *d.as_uuid()))
        .execute(&self.pool)
        .await
        .map_err(db_error("insert report"))?;

        Ok(())
    }

    async fn update(&self, report: &Report) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE reports SET
                status = $2,
                resolved_at = $3,
                admin_comment = $4,
                handled_by = $5
            WHERE id = $1
            "#,
        )
        .bind(report.id().as_uuid())
        .bind(report.status().as_str())
        .bind(report.resolved_at().map(|t| *t.as_datetime()))
        .bind(report.admin_comment())
        .bind(report.handled_by().map(UserId::as_str))
        .execute(&self.pool)
        .await
        .map_err(db_error("update report"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ReportNotFound,
                format!("Report not found: {}", report.id()),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_REPORT))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch report"))?;

        row.as_ref().map(row_to_report).transpose()
    }

    async fn find_by_reporter(&self, reporter: &UserId) -> Result<Vec<Report>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE reporter = $1 ORDER BY created_at DESC",
            SELECT_REPORT
        ))
        .bind(reporter.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list reports"))?;

        rows.iter().map(row_to_report).collect()
    }

    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"{}
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::TEXT IS NULL OR problem_type = $2)
            ORDER BY created_at DESC"#,
            SELECT_REPORT
        ))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.problem_type.map(|p| p.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list reports"))?;

        rows.iter().map(row_to_report).collect()
    }
}

fn row_to_report(row: &PgRow) -> Result<Report, DomainError> {
    let reporter: String = column(row, "reporter")?;
    let handled_by: Option<String> = column(row, "handled_by")?;
    let resolved_at: Option<chrono::DateTime<chrono::Utc>> = column(row, "resolved_at")?;
    let debate_id: Option<uuid::Uuid> = column(row, "debate_id")?;

    let to_user = |raw: String| UserId::new(raw).map_err(|e| DomainError::database(e.to_string()));

    Ok(Report::reconstitute(
        ReportId::from_uuid(column(row, "id")?),
        to_user(reporter)?,
        column(row, "title")?,
        column(row, "description")?,
        enum_column(row, "problem_type")?,
        enum_column(row, "status")?,
        timestamp_column(row, "created_at")?,
        resolved_at.map(Timestamp::from_datetime),
        column(row, "admin_comment")?,
        handled_by.map(to_user).transpose()?,
        debate_id.map(DebateId::from_uuid),
    ))
}
