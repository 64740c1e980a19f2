//! Content hierarchy rows as the drip engine reads them.

use drip_core::drip::TopicNode;
use drip_core::types::DbId;
use sqlx::FromRow;

/// A topic joined with its module's ordering, as the drip engine needs it.
#[derive(Debug, Clone, FromRow)]
pub struct CourseTopicRow {
    pub id: DbId,
    pub module_id: DbId,
    pub module_order: i32,
    pub topic_order: i32,
    pub unlock_order: Option<i32>,
}

impl From<CourseTopicRow> for TopicNode {
    fn from(row: CourseTopicRow) -> Self {
        TopicNode {
            id: row.id,
            module_id: row.module_id,
            module_order: row.module_order,
            topic_order: row.topic_order,
            unlock_order: row.unlock_order,
        }
    }
}
