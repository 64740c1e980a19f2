//! Unlock resolution over already-loaded inputs.
//!
//! Resolution order:
//!
//! 1. No topics: `EMPTY_COURSE`.
//! 2. No numbered topic: everything, `NO_DRIP_CONFIGURED`.
//! 3. No active enrollment: everything, `NO_BATCH`.
//! 4. Otherwise count working days since the reference date and unlock every
//!    topic whose `unlock_order` is within that count. The lowest-numbered
//!    topic is always unlocked.

use std::sync::Arc;

use crate::calendar::{count_working_days, HolidaySet};
use crate::types::{DbId, Day};

use super::{EnrollmentInfo, TopicNode, UnlockReason, UnlockedSet, UnnumberedTopicPolicy};

/// Everything a resolution looked at, plus its result.
///
/// Kept together so the schedule projection and status checks can reuse the
/// same inputs without reloading them.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Course topics in hierarchy order.
    pub topics: Vec<TopicNode>,
    /// Day drip counting starts from; `None` unless `unlocked.reason` is `Ok`.
    pub reference_date: Option<Day>,
    /// Holidays used for counting; empty unless `unlocked.reason` is `Ok`.
    pub holidays: Arc<HolidaySet>,
    pub unlocked: UnlockedSet,
}

impl Evaluation {
    pub(crate) fn fail_open(topics: Vec<TopicNode>, unlocked: UnlockedSet) -> Self {
        Self {
            topics,
            reference_date: None,
            holidays: Arc::default(),
            unlocked,
        }
    }
}

/// The day a student's drip counting starts.
///
/// A batch that started before the student joined pulls the reference back
/// to the batch start so late joiners catch up with their cohort. A batch
/// starting after enrollment does not push it forward.
pub fn reference_date(enrollment: &EnrollmentInfo) -> Day {
    match enrollment.batch_start {
        Some(start) if start < enrollment.enrolled_on => start,
        _ => enrollment.enrolled_on,
    }
}

/// Outcomes decided by the topic list alone.
pub(crate) fn content_outcome(topics: &[TopicNode]) -> Option<UnlockedSet> {
    if topics.is_empty() {
        return Some(UnlockedSet::empty_course());
    }
    if topics.iter().all(|t| t.unlock_order.is_none()) {
        return Some(UnlockedSet::all(topics, UnlockReason::NoDripConfigured));
    }
    None
}

/// The gated set for a known working-day count.
pub(crate) fn gate_topics(
    topics: &[TopicNode],
    unlocked_count: i64,
    policy: UnnumberedTopicPolicy,
) -> UnlockedSet {
    let first = topics
        .iter()
        .filter_map(|t| t.unlock_order.map(|order| (order, t.id)))
        .min()
        .map(|(_, id)| id);

    let mut ids: Vec<DbId> = topics
        .iter()
        .filter(|t| match t.unlock_order {
            Some(order) => i64::from(order) <= unlocked_count,
            None => policy == UnnumberedTopicPolicy::Unlocked,
        })
        .map(|t| t.id)
        .collect();

    if let Some(first) = first {
        if !ids.contains(&first) {
            ids.push(first);
        }
    }
    ids.sort_unstable();

    UnlockedSet {
        unlocked_topic_ids: ids,
        unlocked_count,
        reason: UnlockReason::Ok,
    }
}

/// Resolution for a student with an active enrollment in a drip course.
pub(crate) fn evaluate_enrolled(
    topics: Vec<TopicNode>,
    enrollment: &EnrollmentInfo,
    holidays: Arc<HolidaySet>,
    today: Day,
    policy: UnnumberedTopicPolicy,
) -> Evaluation {
    let reference = reference_date(enrollment);
    let count = count_working_days(reference, today, &holidays);
    let unlocked = gate_topics(&topics, count, policy);
    Evaluation {
        topics,
        reference_date: Some(reference),
        holidays,
        unlocked,
    }
}

/// Resolve the unlocked set from fully loaded inputs.
pub fn evaluate(
    topics: Vec<TopicNode>,
    enrollment: Option<&EnrollmentInfo>,
    holidays: Arc<HolidaySet>,
    today: Day,
    policy: UnnumberedTopicPolicy,
) -> Evaluation {
    if let Some(unlocked) = content_outcome(&topics) {
        return Evaluation::fail_open(topics, unlocked);
    }
    match enrollment {
        Some(enrollment) => evaluate_enrolled(topics, enrollment, holidays, today, policy),
        None => {
            let unlocked = UnlockedSet::all(&topics, UnlockReason::NoBatch);
            Evaluation::fail_open(topics, unlocked)
        }
    }
}
