//! Repository for the `courses` table (read-only apart from row locks).

use drip_core::types::DbId;
use sqlx::{PgConnection, PgPool};

/// Provides read access to courses.
pub struct CourseRepo;

impl CourseRepo {
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Take a row lock on the course for the rest of the transaction.
    ///
    /// Serializes whole-course writers (unlock-order assign/clear). Returns
    /// `false` if the course does not exist.
    pub async fn lock_for_update(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let locked = sqlx::query_scalar::<_, DbId>("SELECT id FROM courses WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(locked.is_some())
    }
}
