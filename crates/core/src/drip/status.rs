//! Per-course numbering health.

use serde::Serialize;

use crate::types::DbId;

use super::assigner::{pending_changes, plan_unlock_order};
use super::TopicNode;

/// Whether a course's `unlock_order` values are usable as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingState {
    /// No topic is numbered; drip is off.
    Disabled,
    /// Every topic carries exactly the number a fresh assignment would give.
    Complete,
    /// Some topics are unnumbered or out of sequence; re-run assignment.
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DripStatus {
    pub course_id: DbId,
    pub topic_count: usize,
    pub numbered_count: usize,
    pub state: NumberingState,
}

pub fn numbering_state(topics: &[TopicNode]) -> NumberingState {
    if topics.iter().all(|t| t.unlock_order.is_none()) {
        return NumberingState::Disabled;
    }
    if pending_changes(topics, &plan_unlock_order(topics)) == 0 {
        NumberingState::Complete
    } else {
        NumberingState::Partial
    }
}

pub fn drip_status(course_id: DbId, topics: &[TopicNode]) -> DripStatus {
    DripStatus {
        course_id,
        topic_count: topics.len(),
        numbered_count: topics.iter().filter(|t| t.unlock_order.is_some()).count(),
        state: numbering_state(topics),
    }
}
