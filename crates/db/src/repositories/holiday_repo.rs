//! Repository for the `holidays` table.

use chrono::NaiveDate;
use drip_core::types::DbId;
use sqlx::PgPool;

use crate::models::holiday::Holiday;

const COLUMNS: &str = "id, holiday_date, reason, created_at, updated_at";

/// Provides CRUD operations for the global holiday calendar.
pub struct HolidayRepo;

impl HolidayRepo {
    /// Declare a holiday, or replace the reason of an existing one.
    ///
    /// Uses `ON CONFLICT (holiday_date) DO UPDATE` so repeating a date keeps
    /// a single row.
    pub async fn upsert(
        pool: &PgPool,
        holiday_date: NaiveDate,
        reason: &str,
    ) -> Result<Holiday, sqlx::Error> {
        let query = format!(
            "INSERT INTO holidays (holiday_date, reason) \
             VALUES ($1, $2) \
             ON CONFLICT (holiday_date) DO UPDATE SET reason = EXCLUDED.reason \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Holiday>(&query)
            .bind(holiday_date)
            .bind(reason)
            .fetch_one(pool)
            .await
    }

    /// List all holidays ordered by date.
    pub async fn list(pool: &PgPool) -> Result<Vec<Holiday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM holidays ORDER BY holiday_date");
        sqlx::query_as::<_, Holiday>(&query).fetch_all(pool).await
    }

    /// All declared dates, for working-day counting.
    pub async fn list_dates(pool: &PgPool) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar::<_, NaiveDate>("SELECT holiday_date FROM holidays")
            .fetch_all(pool)
            .await
    }

    /// Delete a holiday by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
