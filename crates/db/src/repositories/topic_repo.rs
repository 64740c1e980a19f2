//! Repository for `topics.unlock_order`.
//!
//! Assign and clear treat a course's topics as one unit of work: each runs
//! in a single transaction holding the course row lock, so concurrent calls
//! on the same course serialize and a failure leaves the previous numbering
//! untouched.

use drip_core::drip::{pending_changes, plan_unlock_order, TopicNode};
use drip_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::course::CourseTopicRow;
use crate::models::drip::{UnlockOrderClear, UnlockOrderUpdate};
use crate::repositories::CourseRepo;

/// Provides the drip engine's view of course topics.
pub struct TopicRepo;

impl TopicRepo {
    /// All topics of a course in hierarchy order.
    pub async fn list_for_course<'e, E>(
        executor: E,
        course_id: DbId,
    ) -> Result<Vec<CourseTopicRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, CourseTopicRow>(
            "SELECT t.id, t.module_id, m.sort_order AS module_order, \
                    t.sort_order AS topic_order, t.unlock_order \
             FROM topics t \
             JOIN course_modules m ON m.id = t.module_id \
             WHERE m.course_id = $1 \
             ORDER BY m.sort_order, m.id, t.sort_order, t.id",
        )
        .bind(course_id)
        .fetch_all(executor)
        .await
    }

    /// Number every topic of the course 1..N, replacing any previous values.
    ///
    /// Returns `None` if the course does not exist.
    pub async fn assign_unlock_order(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Option<UnlockOrderUpdate>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !CourseRepo::lock_for_update(&mut tx, course_id).await? {
            return Ok(None);
        }

        let topics: Vec<TopicNode> = Self::list_for_course(&mut *tx, course_id)
            .await?
            .into_iter()
            .map(TopicNode::from)
            .collect();
        let plan = plan_unlock_order(&topics);
        let changed = pending_changes(&topics, &plan);

        if changed > 0 {
            let ids: Vec<DbId> = plan.iter().map(|a| a.topic_id).collect();
            let orders: Vec<i32> = plan.iter().map(|a| a.unlock_order).collect();
            sqlx::query(
                "UPDATE topics AS t SET unlock_order = u.unlock_order \
                 FROM UNNEST($1::BIGINT[], $2::INTEGER[]) AS u(id, unlock_order) \
                 WHERE t.id = u.id",
            )
            .bind(&ids)
            .bind(&orders)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Some(UnlockOrderUpdate {
            course_id,
            assignments: plan,
            changed,
        }))
    }

    /// Set every topic's `unlock_order` in the course to NULL.
    ///
    /// Returns `None` if the course does not exist.
    pub async fn clear_unlock_order(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Option<UnlockOrderClear>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !CourseRepo::lock_for_update(&mut tx, course_id).await? {
            return Ok(None);
        }

        let result = sqlx::query(
            "UPDATE topics SET unlock_order = NULL \
             WHERE unlock_order IS NOT NULL \
               AND module_id IN (SELECT id FROM course_modules WHERE course_id = $1)",
        )
        .bind(course_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(UnlockOrderClear {
            course_id,
            cleared: result.rows_affected(),
        }))
    }
}
