//! PostgreSQL-backed drip data sources.

use std::sync::Arc;

use async_trait::async_trait;
use drip_core::calendar::HolidaySet;
use drip_core::drip::{
    ContentHierarchy, EnrollmentDirectory, EnrollmentInfo, HolidayCalendar, TopicNode,
};
use drip_core::error::CoreError;
use drip_core::holiday::HolidayCache;
use drip_core::types::DbId;
use sqlx::PgPool;

use crate::repositories::{CourseRepo, EnrollmentRepo, HolidayRepo, StudentRepo, TopicRepo};

/// Implements every drip source trait over one pool.
///
/// Holiday reads go through the shared [`HolidayCache`].
pub struct PgDripSources<'a> {
    pool: &'a PgPool,
    holiday_cache: &'a HolidayCache,
}

impl<'a> PgDripSources<'a> {
    pub fn new(pool: &'a PgPool, holiday_cache: &'a HolidayCache) -> Self {
        Self {
            pool,
            holiday_cache,
        }
    }
}

/// Map a sqlx failure into the engine's persistence error.
fn persistence(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Drip source query failed");
    CoreError::Persistence(err.to_string())
}

#[async_trait]
impl ContentHierarchy for PgDripSources<'_> {
    async fn course_exists(&self, course_id: DbId) -> Result<bool, CoreError> {
        CourseRepo::exists(self.pool, course_id)
            .await
            .map_err(persistence)
    }

    async fn course_topics(&self, course_id: DbId) -> Result<Vec<TopicNode>, CoreError> {
        let rows = TopicRepo::list_for_course(self.pool, course_id)
            .await
            .map_err(persistence)?;
        Ok(rows.into_iter().map(TopicNode::from).collect())
    }
}

#[async_trait]
impl EnrollmentDirectory for PgDripSources<'_> {
    async fn student_exists(&self, student_id: DbId) -> Result<bool, CoreError> {
        StudentRepo::exists(self.pool, student_id)
            .await
            .map_err(persistence)
    }

    async fn active_enrollment(
        &self,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<EnrollmentInfo>, CoreError> {
        let row = EnrollmentRepo::find_active(self.pool, student_id, course_id)
            .await
            .map_err(persistence)?;
        Ok(row.map(EnrollmentInfo::from))
    }
}

#[async_trait]
impl HolidayCalendar for PgDripSources<'_> {
    async fn holiday_dates(&self) -> Result<Arc<HolidaySet>, CoreError> {
        let pool = self.pool;
        self.holiday_cache
            .get_or_load(|| async move {
                let dates = HolidayRepo::list_dates(pool).await.map_err(persistence)?;
                tracing::debug!(count = dates.len(), "Loaded holiday calendar");
                Ok::<HolidaySet, CoreError>(dates.into_iter().collect())
            })
            .await
    }
}
