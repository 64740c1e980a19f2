//! Repository for the `students` table.

use drip_core::types::DbId;
use sqlx::PgPool;

/// Provides existence checks for students.
pub struct StudentRepo;

impl StudentRepo {
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
