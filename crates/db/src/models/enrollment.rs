//! Enrollment directory rows.

use drip_core::calendar::to_utc_day;
use drip_core::drip::EnrollmentInfo;
use drip_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An `enrollments` row joined with its batch's start date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActiveEnrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub batch_id: DbId,
    pub enrolled_at: Timestamp,
    pub batch_start_date: Option<Timestamp>,
}

impl From<ActiveEnrollment> for EnrollmentInfo {
    fn from(row: ActiveEnrollment) -> Self {
        EnrollmentInfo {
            batch_id: row.batch_id,
            enrolled_on: to_utc_day(row.enrolled_at),
            batch_start: row.batch_start_date.map(to_utc_day),
        }
    }
}
