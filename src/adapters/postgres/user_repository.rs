//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, db_error, enum_column, timestamp_column, to_i32};
use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, UserId};
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn ensure_registered(&self, user: &AuthenticatedUser) -> Result<UserProfile, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, email, display_name, role, score, registered_at)
            VALUES ($1, $2, $3, $4, 0, NOW())
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                display_name = EXCLUDED.display_name,
                role = EXCLUDED.role
            RETURNING id, email, display_name, role, score, registered_at
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.email)
        .bind(user.display_name.as_deref())
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("register user"))?;

        row_to_profile(&row)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, display_name, role, score, registered_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("fetch user"))?;

        row.as_ref().map(row_to_profile).transpose()
    }

    async fn add_points(&self, id: &UserId, points: u32) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET score = score + $2 WHERE id = $1")
            .bind(id.as_str())
            .bind(to_i32(points, "points")?)
            .execute(&self.pool)
            .await
            .map_err(db_error("update user score"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", id),
            ));
        }
        Ok(())
    }
}

fn row_to_profile(row: &PgRow) -> Result<UserProfile, DomainError> {
    let id: String = column(row, "id")?;
    let score: i32 = column(row, "score")?;

    Ok(UserProfile::reconstitute(
        UserId::new(id).map_err(|e| DomainError::database(e.to_string()))?,
        column(row, "email")?,
        column(row, "display_name")?,
        enum_column(row, "role")?,
        u32::try_from(score).unwrap_or(0),
        timestamp_column(row, "registered_at")?,
    ))
}
