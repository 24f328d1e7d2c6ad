//! PostgreSQL implementation of DebateRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, db_error, enum_column, timestamp_column, to_i32, u32_column};
use crate::domain::debate::Debate;
use crate::domain::foundation::{DebateId, DomainError, ErrorCode, TopicId, UserId};
use crate::ports::{DebateFilter, DebateRepository};

#[derive(Clone)]
pub struct PostgresDebateRepository {
    pool: PgPool,
}

impl PostgresDebateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_DEBATE: &str = r#"
    SELECT id, user_id, topic_id, stance, kind, started_at, duration_secs, grade
    FROM debates
"#;

fn not_found(id: &DebateId) -> DomainError {
    DomainError::new(ErrorCode::DebateNotFound, format!("Debate not found: {}", id))
}

#[async_trait]
impl DebateRepository for PostgresDebateRepository {
    async fn save(&self, debate: &Debate) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO debates (
                id, user_id, topic_id, stance, kind, started_at, duration_secs, grade
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(debate.id().as_uuid())
        .bind(debate.user_id().as_str())
        .bind(debate.topic_id().as_uuid())
        .bind(debate.stance().as_str())
        .bind(debate.kind().as_str())
        .bind(debate.started_at().as_datetime())
        .bind(optional_i32(debate.duration_secs(), "duration_secs")?)
        .bind(optional_i32(debate.grade(), "grade")?)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::new(
                ErrorCode::Conflict,
                "A debate on this topic is already in progress",
            ),
            _ => DomainError::database(format!("Failed to insert debate: {}", e)),
        })?;

        Ok(())
    }

    async fn update(&self, debate: &Debate) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE debates SET
                duration_secs = $2,
                grade = $3
            WHERE id = $1
            "#,
        )
        .bind(debate.id().as_uuid())
        .bind(optional_i32(debate.duration_secs(), "duration_secs")?)
        .bind(optional_i32(debate.grade(), "grade")?)
        .execute(&self.pool)
        .await
        .map_err(db_error("update debate"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(&debate.id()));
        }
        Ok(())
    }

    async fn record_grade(&self, debate: &Debate, grade: u32) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin grading"))?;

        let graded = sqlx::query("UPDATE debates SET grade = $2 WHERE id = $1 AND grade IS NULL")
            .bind(debate.id().as_uuid())
            .bind(to_i32(grade, "grade")?)
            .execute(&mut *tx)
            .await
            .map_err(db_error("store grade"))?;

        if graded.rows_affected() == 0 {
            tx.rollback().await.map_err(db_error("rollback grading"))?;
            return match self.find_by_id(&debate.id()).await? {
                Some(_) => Ok(false),
                None => Err(not_found(&debate.id())),
            };
        }

        let credited = sqlx::query("UPDATE users SET score = score + $2 WHERE id = $1")
            .bind(debate.user_id().as_str())
            .bind(to_i32(grade, "points")?)
            .execute(&mut *tx)
            .await
            .map_err(db_error("credit grade"))?;

        // Dropping the transaction rolls the grade back.
        if credited.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", debate.user_id()),
            ));
        }

        tx.commit().await.map_err(db_error("commit grading"))?;
        Ok(true)
    }

    async fn find_by_id(&self, id: &DebateId) -> Result<Option<Debate>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_DEBATE))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch debate"))?;

        row.as_ref().map(row_to_debate).transpose()
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        filter: DebateFilter,
    ) -> Result<Vec<Debate>, DomainError> {
        let state_clause = match filter {
            DebateFilter::All => "",
            DebateFilter::InProgress => "AND duration_secs IS NULL",
            DebateFilter::Finished => "AND duration_secs IS NOT NULL",
        };
        let sql = format!(
            "{} WHERE user_id = $1 {} ORDER BY started_at DESC",
            SELECT_DEBATE, state_clause
        );

        let rows = sqlx::query(&sql)
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list debates"))?;

        rows.iter().map(row_to_debate).collect()
    }

    async fn find_in_progress(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<Debate>, DomainError> {
        let sql = format!(
            "{} WHERE user_id = $1 AND topic_id = $2 AND duration_secs IS NULL LIMIT 1",
            SELECT_DEBATE
        );
        let row = sqlx::query(&sql)
            .bind(user_id.as_str())
            .bind(topic_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch running debate"))?;

        row.as_ref().map(row_to_debate).transpose()
    }

    async fn count_by_topic(&self, topic_id: &TopicId) -> Result<u32, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM debates WHERE topic_id = $1")
            .bind(topic_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count debates"))?;

        Ok(u32::try_from(result.0).unwrap_or(u32::MAX))
    }

    async fn delete(&self, id: &DebateId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM debates WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete debate"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn optional_i32(value: Option<u32>, name: &str) -> Result<Option<i32>, DomainError> {
    value.map(|v| to_i32(v, name)).transpose()
}

fn row_to_debate(row: &PgRow) -> Result<Debate, DomainError> {
    let user_id: String = column(row, "user_id")?;

    Ok(Debate::reconstitute(
        DebateId::from_uuid(column(row, "id")?),
        UserId::new(user_id).map_err(|e| DomainError::database(e.to_string()))?,
        TopicId::from_uuid(column(row, "topic_id")?),
        enum_column(row, "stance")?,
        enum_column(row, "kind")?,
        timestamp_column(row, "started_at")?,
        u32_column(row, "duration_secs")?,
        u32_column(row, "grade")?,
    ))
}
