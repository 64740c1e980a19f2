//! Drip release: which topics of a course a student can currently see.
//!
//! - [`resolver`]: pure unlock resolution over already-loaded inputs.
//! - [`assigner`]: planning of the course-global `unlock_order` sequence.
//! - [`schedule`]: per-topic projected unlock dates.
//! - [`status`]: per-course numbering health.
//! - [`sources`]: async data-source traits and the [`UnlockResolver`] that
//!   drives them.

pub mod assigner;
pub mod resolver;
pub mod schedule;
pub mod sources;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Day};

pub use assigner::{pending_changes, plan_unlock_order, UnlockAssignment};
pub use resolver::{evaluate, reference_date, Evaluation};
pub use schedule::{build_schedule, TopicSchedule, UnlockSchedule};
pub use sources::{ContentHierarchy, EnrollmentDirectory, HolidayCalendar, UnlockResolver};
pub use status::{drip_status, numbering_state, DripStatus, NumberingState};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A topic as seen by the drip engine, with its position in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicNode {
    pub id: DbId,
    pub module_id: DbId,
    /// `sort_order` of the owning module.
    pub module_order: i32,
    /// `sort_order` of the topic within its module.
    pub topic_order: i32,
    /// Course-global release index; `None` when not numbered.
    pub unlock_order: Option<i32>,
}

/// The active enrollment of one student in one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentInfo {
    pub batch_id: DbId,
    /// UTC day the student was enrolled.
    pub enrolled_on: Day,
    /// UTC day the batch starts, if the batch has one.
    pub batch_start: Option<Day>,
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Why a particular unlocked set was produced.
///
/// Only `Ok` reflects drip gating; the others are fail-open business states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnlockReason {
    Ok,
    EmptyCourse,
    NoDripConfigured,
    NoBatch,
}

impl UnlockReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::EmptyCourse => "EMPTY_COURSE",
            Self::NoDripConfigured => "NO_DRIP_CONFIGURED",
            Self::NoBatch => "NO_BATCH",
        }
    }
}

/// The derived visibility set for one student in one course. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnlockedSet {
    /// Visible topic ids, ascending.
    pub unlocked_topic_ids: Vec<DbId>,
    /// Elapsed working days when `reason` is `Ok`; otherwise the number of
    /// topics returned.
    pub unlocked_count: i64,
    pub reason: UnlockReason,
}

impl UnlockedSet {
    /// Every topic of the course, for the fail-open reasons.
    pub fn all(topics: &[TopicNode], reason: UnlockReason) -> Self {
        let mut ids: Vec<DbId> = topics.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        Self {
            unlocked_count: ids.len() as i64,
            unlocked_topic_ids: ids,
            reason,
        }
    }

    pub fn empty_course() -> Self {
        Self {
            unlocked_topic_ids: Vec::new(),
            unlocked_count: 0,
            reason: UnlockReason::EmptyCourse,
        }
    }

    pub fn contains(&self, topic_id: DbId) -> bool {
        self.unlocked_topic_ids.binary_search(&topic_id).is_ok()
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// How a drip-enabled course treats topics whose `unlock_order` is null
/// (typically added after numbering and not yet renumbered).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnnumberedTopicPolicy {
    /// Visible immediately.
    #[default]
    Unlocked,
    /// Hidden until the course is renumbered.
    Locked,
}

impl UnnumberedTopicPolicy {
    /// Parse from the `DRIP_UNNUMBERED_TOPICS` setting.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "unlocked" => Ok(Self::Unlocked),
            "locked" => Ok(Self::Locked),
            other => Err(CoreError::Validation(format!(
                "Unknown unnumbered topic policy '{other}'. Must be one of: unlocked, locked"
            ))),
        }
    }
}
