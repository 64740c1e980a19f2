//! Planning of the course-global `unlock_order` sequence.
//!
//! The plan is computed in memory from the full topic list and committed by
//! the caller as one write, so a course is never left half-numbered.

use serde::Serialize;

use crate::types::DbId;

use super::TopicNode;

/// One row of an unlock-order plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnlockAssignment {
    pub topic_id: DbId,
    pub unlock_order: i32,
}

/// Number every topic 1..N in hierarchy order.
///
/// Order is module `sort_order`, then topic `sort_order`; ids break ties so
/// the plan is deterministic. Existing `unlock_order` values are ignored.
pub fn plan_unlock_order(topics: &[TopicNode]) -> Vec<UnlockAssignment> {
    let mut ordered: Vec<&TopicNode> = topics.iter().collect();
    ordered.sort_by_key(|t| (t.module_order, t.module_id, t.topic_order, t.id));

    (1..)
        .zip(ordered)
        .map(|(unlock_order, t)| UnlockAssignment {
            topic_id: t.id,
            unlock_order,
        })
        .collect()
}

/// How many topics would change if `plan` were applied.
pub fn pending_changes(topics: &[TopicNode], plan: &[UnlockAssignment]) -> usize {
    plan.iter()
        .filter(|a| {
            topics
                .iter()
                .find(|t| t.id == a.topic_id)
                .map_or(true, |t| t.unlock_order != Some(a.unlock_order))
        })
        .count()
}
