//! Results of the bulk unlock-order operations.

use drip_core::drip::UnlockAssignment;
use drip_core::types::DbId;
use serde::Serialize;

/// Outcome of numbering every topic of a course.
#[derive(Debug, Clone, Serialize)]
pub struct UnlockOrderUpdate {
    pub course_id: DbId,
    /// The full mapping now stored, in unlock order.
    pub assignments: Vec<UnlockAssignment>,
    /// Topics whose stored value actually changed.
    pub changed: usize,
}

/// Outcome of clearing a course's numbering.
#[derive(Debug, Clone, Serialize)]
pub struct UnlockOrderClear {
    pub course_id: DbId,
    pub cleared: u64,
}
