use crate::{DbError, Result as DbErrorResult};

use bday_core::{
    BirthRecord, DATE_FORMAT, RecordStore, Result as CoreErrorResult, Username, format_date,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::NaiveDate;
use error_location::ErrorLocation;
use log::debug;
use sqlx::SqlitePool;

/// `RecordStore` over the `users` table
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn upsert_record(&self, record: &BirthRecord) -> DbErrorResult<()> {
        let dob = format_date(record.date_of_birth);

        // Single statement: readers see the old row or the new one, never a mix
        sqlx::query(
            r#"
              INSERT INTO users (username, dob)
              VALUES (?, ?)
              ON CONFLICT(username) DO UPDATE SET dob = excluded.dob
              "#,
        )
        .bind(record.username.as_str())
        .bind(&dob)
        .execute(&self.pool)
        .await?;

        debug!("Upserted {} -> {}", record.username, dob);
        Ok(())
    }

    pub async fn find_by_username(&self, username: &Username) -> DbErrorResult<Option<BirthRecord>> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
              SELECT dob
              FROM users
              WHERE username = ?
              "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(dob,)| {
            NaiveDate::parse_from_str(&dob, DATE_FORMAT)
                .map(|date_of_birth| BirthRecord::new(username.clone(), date_of_birth))
                .map_err(|e| DbError::CorruptRecord {
                    username: username.to_string(),
                    message: format!("unparseable dob {:?}: {}", dob, e),
                    location: ErrorLocation::from(Location::caller()),
                })
        })
        .transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn upsert(&self, record: &BirthRecord) -> CoreErrorResult<()> {
        Ok(self.upsert_record(record).await?)
    }

    async fn lookup(&self, username: &Username) -> CoreErrorResult<Option<BirthRecord>> {
        Ok(self.find_by_username(username).await?)
    }

    async fn ping(&self) -> CoreErrorResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
