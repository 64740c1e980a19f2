//! Repository for the `enrollments` table.

use drip_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::ActiveEnrollment;

/// Provides the active-enrollment lookup the drip resolver depends on.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// The enrollment of `student_id` in `course_id`, joined with its batch.
    ///
    /// `uq_enrollments_student_course` guarantees at most one row.
    pub async fn find_active(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<ActiveEnrollment>, sqlx::Error> {
        sqlx::query_as::<_, ActiveEnrollment>(
            "SELECT e.id, e.student_id, e.course_id, e.batch_id, e.enrolled_at, \
                    b.start_date AS batch_start_date \
             FROM enrollments e \
             JOIN batches b ON b.id = e.batch_id \
             WHERE e.student_id = $1 AND e.course_id = $2",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(pool)
        .await
    }
}
