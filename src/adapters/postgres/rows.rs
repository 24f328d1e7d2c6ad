//! Row decoding helpers shared by the PostgreSQL repositories.

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};
use std::fmt::Display;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, Timestamp};

/// Maps a sqlx error to a database `DomainError` naming the failed action.
pub(super) fn db_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::database(format!("Failed to {}: {}", action, e))
}

pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

/// Reads a text column holding an enum wire name.
pub(super) fn enum_column<T>(row: &PgRow, name: &str) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = column(row, name)?;
    raw.parse()
        .map_err(|e| DomainError::database(format!("Invalid {} '{}': {}", name, raw, e)))
}

pub(super) fn timestamp_column(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    column::<chrono::DateTime<chrono::Utc>>(row, name).map(Timestamp::from_datetime)
}

pub(super) fn u32_column(row: &PgRow, name: &str) -> Result<Option<u32>, DomainError> {
    let raw: Option<i32> = column(row, name)?;
    raw.map(|v| {
        u32::try_from(v)
            .map_err(|_| DomainError::database(format!("Negative {} in database: {}", name, v)))
    })
    .transpose()
}

pub(super) fn to_i32(value: u32, name: &str) -> Result<i32, DomainError> {
    i32::try_from(value)
        .map_err(|_| DomainError::database(format!("{} out of range: {}", name, value)))
}
