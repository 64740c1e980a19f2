//! Projected unlock dates for one student.
//!
//! Built from an [`Evaluation`] so the dates always agree with the unlocked
//! set computed in the same request.

use serde::Serialize;

use crate::calendar::nth_working_day;
use crate::types::{DbId, Day};

use super::{Evaluation, UnlockReason};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSchedule {
    pub topic_id: DbId,
    pub unlock_order: Option<i32>,
    pub unlocked: bool,
    /// Day the topic becomes (or became) visible; `None` when the topic is
    /// not gated. A topic already unlocked ahead of its projected day (the
    /// always-visible first topic) reports `today`.
    pub unlocks_on: Option<Day>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnlockSchedule {
    pub reason: UnlockReason,
    pub reference_date: Option<Day>,
    pub unlocked_count: i64,
    /// Topics in hierarchy order.
    pub topics: Vec<TopicSchedule>,
}

pub fn build_schedule(evaluation: &Evaluation, today: Day) -> UnlockSchedule {
    let gated_from = match evaluation.unlocked.reason {
        UnlockReason::Ok => evaluation.reference_date,
        _ => None,
    };

    let topics = evaluation
        .topics
        .iter()
        .map(|t| {
            let unlocked = evaluation.unlocked.contains(t.id);
            let projected = gated_from.zip(t.unlock_order).and_then(|(reference, order)| {
                nth_working_day(reference, i64::from(order), &evaluation.holidays)
            });
            TopicSchedule {
                topic_id: t.id,
                unlock_order: t.unlock_order,
                unlocked,
                unlocks_on: match projected {
                    Some(day) if unlocked && day > today => Some(today),
                    other => other,
                },
            }
        })
        .collect();

    UnlockSchedule {
        reason: evaluation.unlocked.reason,
        reference_date: evaluation.reference_date,
        unlocked_count: evaluation.unlocked.unlocked_count,
        topics,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::drip::{evaluate, EnrollmentInfo, TopicNode, UnnumberedTopicPolicy};

    fn d(y: i32, m: u32, day: u32) -> Day {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn topics(numbered: bool) -> Vec<TopicNode> {
        (1..=5)
            .map(|i| TopicNode {
                id: i,
                module_id: if i <= 3 { 1 } else { 2 },
                module_order: if i <= 3 { 1 } else { 2 },
                topic_order: i as i32,
                unlock_order: numbered.then_some(i as i32),
            })
            .collect()
    }

    fn enrollment() -> EnrollmentInfo {
        EnrollmentInfo {
            batch_id: 1,
            enrolled_on: d(2024, 1, 1),
            batch_start: None,
        }
    }

    #[test]
    fn projects_dates_around_holidays_and_weekends() {
        let holidays = Arc::new([d(2024, 1, 3)].into_iter().collect());
        let eval = evaluate(
            topics(true),
            Some(&enrollment()),
            holidays,
            d(2024, 1, 5),
            UnnumberedTopicPolicy::default(),
        );
        let schedule = build_schedule(&eval, d(2024, 1, 5));

        assert_eq!(schedule.reason, UnlockReason::Ok);
        assert_eq!(schedule.reference_date, Some(d(2024, 1, 1)));
        let dates: Vec<_> = schedule.topics.iter().map(|t| t.unlocks_on).collect();
        assert_eq!(
            dates,
            vec![
                Some(d(2024, 1, 1)),
                Some(d(2024, 1, 2)),
                Some(d(2024, 1, 4)),
                Some(d(2024, 1, 5)),
                Some(d(2024, 1, 8)),
            ]
        );
        let unlocked: Vec<_> = schedule.topics.iter().map(|t| t.unlocked).collect();
        assert_eq!(unlocked, vec![true, true, true, true, false]);
    }

    #[test]
    fn fail_open_schedule_has_no_dates() {
        let eval = evaluate(
            topics(true),
            None,
            Arc::default(),
            d(2024, 1, 1),
            UnnumberedTopicPolicy::default(),
        );
        let schedule = build_schedule(&eval, d(2024, 1, 1));

        assert_eq!(schedule.reason, UnlockReason::NoBatch);
        assert_eq!(schedule.reference_date, None);
        assert!(schedule.topics.iter().all(|t| t.unlocked && t.unlocks_on.is_none()));
    }

    #[test]
    fn first_topic_before_reference_date_unlocks_today() {
        let future = EnrollmentInfo {
            enrolled_on: d(2024, 1, 8),
            ..enrollment()
        };
        let today = d(2024, 1, 3);
        let eval = evaluate(
            topics(true),
            Some(&future),
            Arc::default(),
            today,
            UnnumberedTopicPolicy::default(),
        );
        let schedule = build_schedule(&eval, today);

        assert_eq!(schedule.unlocked_count, 0);
        assert!(schedule.topics[0].unlocked);
        assert_eq!(schedule.topics[0].unlocks_on, Some(today));
        assert!(!schedule.topics[1].unlocked);
        assert_eq!(schedule.topics[1].unlocks_on, Some(d(2024, 1, 9)));
    }
}
