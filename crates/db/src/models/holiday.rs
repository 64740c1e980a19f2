//! Holiday calendar rows and DTOs.

use chrono::NaiveDate;
use drip_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Maximum length of a holiday reason.
pub const MAX_REASON_LEN: u64 = 255;

/// A row from the `holidays` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Holiday {
    pub id: DbId,
    pub holiday_date: NaiveDate,
    pub reason: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for declaring (or re-declaring) a holiday.
///
/// `date` is parsed by the handler with `drip_core::calendar::parse_day`,
/// so both `2024-01-03` and full RFC 3339 timestamps are accepted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHoliday {
    pub date: String,
    #[validate(
        length(min = 1, max = MAX_REASON_LEN),
        custom(function = "validate_not_blank")
    )]
    pub reason: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("reason must not be blank".into()));
    }
    Ok(())
}
