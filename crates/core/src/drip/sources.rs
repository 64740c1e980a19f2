//! Data sources the drip engine reads, and the resolver that drives them.
//!
//! The traits describe the collaborators the engine depends on: the
//! content hierarchy, the enrollment directory and the holiday calendar.
//! `drip-db` implements them over PostgreSQL; tests use in-memory fakes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::calendar::HolidaySet;
use crate::error::CoreError;
use crate::types::{DbId, Day};

use super::resolver::{content_outcome, evaluate_enrolled, Evaluation};
use super::schedule::{build_schedule, UnlockSchedule};
use super::{EnrollmentInfo, TopicNode, UnlockReason, UnlockedSet, UnnumberedTopicPolicy};

/// Ordered course -> module -> topic tree.
#[async_trait]
pub trait ContentHierarchy: Send + Sync {
    async fn course_exists(&self, course_id: DbId) -> Result<bool, CoreError>;

    /// All topics of the course in hierarchy order (module order, then topic
    /// order).
    async fn course_topics(&self, course_id: DbId) -> Result<Vec<TopicNode>, CoreError>;
}

/// Student-to-batch assignments.
#[async_trait]
pub trait EnrollmentDirectory: Send + Sync {
    async fn student_exists(&self, student_id: DbId) -> Result<bool, CoreError>;

    /// The single active enrollment of `student_id` in `course_id`, if any.
    async fn active_enrollment(
        &self,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<EnrollmentInfo>, CoreError>;
}

/// Global set of non-working dates.
#[async_trait]
pub trait HolidayCalendar: Send + Sync {
    async fn holiday_dates(&self) -> Result<Arc<HolidaySet>, CoreError>;
}

/// Resolves unlocked topics for one student in one course.
///
/// Holds borrowed sources only; build one per request.
pub struct UnlockResolver<'a> {
    content: &'a dyn ContentHierarchy,
    enrollments: &'a dyn EnrollmentDirectory,
    holidays: &'a dyn HolidayCalendar,
    policy: UnnumberedTopicPolicy,
}

impl<'a> UnlockResolver<'a> {
    pub fn new(
        content: &'a dyn ContentHierarchy,
        enrollments: &'a dyn EnrollmentDirectory,
        holidays: &'a dyn HolidayCalendar,
        policy: UnnumberedTopicPolicy,
    ) -> Self {
        Self {
            content,
            enrollments,
            holidays,
            policy,
        }
    }

    /// Load inputs lazily and evaluate.
    ///
    /// Unknown course or student is `NotFound`. Enrollment and holidays are
    /// only read when the topic list alone does not decide the outcome.
    pub async fn evaluate(
        &self,
        student_id: DbId,
        course_id: DbId,
        today: Day,
    ) -> Result<Evaluation, CoreError> {
        if !self.content.course_exists(course_id).await? {
            return Err(CoreError::NotFound {
                entity: "Course",
                id: course_id,
            });
        }
        if !self.enrollments.student_exists(student_id).await? {
            return Err(CoreError::NotFound {
                entity: "Student",
                id: student_id,
            });
        }

        let topics = self.content.course_topics(course_id).await?;
        if let Some(unlocked) = content_outcome(&topics) {
            return Ok(Evaluation::fail_open(topics, unlocked));
        }

        let Some(enrollment) = self
            .enrollments
            .active_enrollment(student_id, course_id)
            .await?
        else {
            let unlocked = UnlockedSet::all(&topics, UnlockReason::NoBatch);
            return Ok(Evaluation::fail_open(topics, unlocked));
        };

        let holidays = self.holidays.holiday_dates().await?;
        Ok(evaluate_enrolled(
            topics,
            &enrollment,
            holidays,
            today,
            self.policy,
        ))
    }

    pub async fn resolve(
        &self,
        student_id: DbId,
        course_id: DbId,
        today: Day,
    ) -> Result<UnlockedSet, CoreError> {
        Ok(self.evaluate(student_id, course_id, today).await?.unlocked)
    }

    pub async fn schedule(
        &self,
        student_id: DbId,
        course_id: DbId,
        today: Day,
    ) -> Result<UnlockSchedule, CoreError> {
        let evaluation = self.evaluate(student_id, course_id, today).await?;
        Ok(build_schedule(&evaluation, today))
    }
}
