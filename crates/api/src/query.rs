//! Shared query parameter types for API handlers.

use drip_core::calendar::{parse_day, today_utc};
use drip_core::error::CoreError;
use drip_core::types::Day;
use serde::Deserialize;

/// Optional `?as_of=YYYY-MM-DD` override of "today" for previewing drip
/// state on another day.
#[derive(Debug, Default, Deserialize)]
pub struct AsOfParams {
    pub as_of: Option<String>,
}

impl AsOfParams {
    /// The requested day, or the current UTC day when absent.
    pub fn day(&self) -> Result<Day, CoreError> {
        match self.as_of.as_deref() {
            Some(raw) => parse_day(raw),
            None => Ok(today_utc()),
        }
    }
}
