//! PostgreSQL implementation of MessageRepository.
//!
//! Chatbot messages are stored with a NULL `author_id`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, db_error, timestamp_column};
use crate::domain::debate::{Author, Message};
use crate::domain::foundation::{DebateId, DomainError, MessageId, UserId};
use crate::ports::MessageRepository;

#[derive(Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn save(&self, message: &Message) -> Result<(), DomainError> {
        let author_id = match message.author() {
            Author::Participant(id) => Some(id.as_str()),
            Author::Chatbot => None,
        };

        sqlx::query(
            r#"
            INSERT INTO messages (id, debate_id, author_id, content, sent_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id().as_uuid())
        .bind(message.debate_id().as_uuid())
        .bind(author_id)
        .bind(message.content())
        .bind(message.sent_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert message"))?;

        Ok(())
    }

    async fn find_by_debate(&self, debate_id: &DebateId) -> Result<Vec<Message>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, debate_id, author_id, content, sent_at
            FROM messages
            WHERE debate_id = $1
            ORDER BY sent_at, seq
            "#,
        )
        .bind(debate_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list messages"))?;

        rows.iter().map(row_to_message).collect()
    }

    async fn delete_by_debate(&self, debate_id: &DebateId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM messages WHERE debate_id = $1")
            .bind(debate_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete messages"))?;

        Ok(result.rows_affected())
    }
}

fn row_to_message(row: &PgRow) -> Result<Message, DomainError> {
    let author_id: Option<String> = column(row, "author_id")?;
    let author = match author_id {
        Some(id) => Author::Participant(
            UserId::new(id).map_err(|e| DomainError::database(e.to_string()))?,
        ),
        None => Author::Chatbot,
    };

    Ok(Message::reconstitute(
        MessageId::from_uuid(column(row, "id")?),
        DebateId::from_uuid(column(row, "debate_id")?),
        author,
        column(row, "content")?,
        timestamp_column(row, "sent_at")?,
    ))
}
