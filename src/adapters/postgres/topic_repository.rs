//! PostgreSQL implementation of TopicRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, db_error, enum_column, timestamp_column};
use crate::domain::foundation::{DomainError, ErrorCode, TopicId};
use crate::domain::topic::Topic;
use crate::ports::{TopicFilter, TopicRepository};

#[derive(Clone)]
pub struct PostgresTopicRepository {
    pool: PgPool,
}

impl PostgresTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: &TopicId) -> DomainError {
    DomainError::new(ErrorCode::TopicNotFound, format!("Topic not found: {}", id))
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn save(&self, topic: &Topic) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO topics (id, title, category, difficulty, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(topic.id().as_uuid())
        .bind(topic.title())
        .bind(topic.category().as_str())
        .bind(topic.difficulty().as_str())
        .bind(topic.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert topic"))?;

        Ok(())
    }

    async fn update(&self, topic: &Topic) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE topics SET
                title = $2,
                category = $3,
                difficulty = $4
            WHERE id = $1
            "#,
        )
        .bind(topic.id().as_uuid())
        .bind(topic.title())
        .bind(topic.category().as_str())
        .bind(topic.difficulty().as_str())
        .execute(&self.pool)
        .await
        .map_err(db_error("update topic"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(&topic.id()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, DomainError> {
        let row = sqlx::query(
            "SELECT id, title, category, difficulty, created_at FROM topics WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("fetch topic"))?;

        row.as_ref().map(row_to_topic).transpose()
    }

    async fn list(&self, filter: &TopicFilter) -> Result<Vec<Topic>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, category, difficulty, created_at
            FROM topics
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND ($2::TEXT IS NULL OR difficulty = $2)
            ORDER BY title
            "#,
        )
        .bind(filter.category.map(|c| c.as_str()))
        .bind(filter.difficulty.map(|d| d.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list topics"))?;

        rows.iter().map(row_to_topic).collect()
    }

    async fn delete(&self, id: &TopicId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete topic"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn row_to_topic(row: &PgRow) -> Result<Topic, DomainError> {
    Ok(Topic::reconstitute(
        TopicId::from_uuid(column(row, "id")?),
        column(row, "title")?,
        enum_column(row, "category")?,
        enum_column(row, "difficulty")?,
        timestamp_column(row, "created_at")?,
    ))
}
