//! Handlers for the `/drip` resource.
//!
//! Resolution endpoints are read-only and computed fresh per request; the
//! assign/clear endpoints are the engine's only writers.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use drip_core::drip::{drip_status, numbering_state, NumberingState, TopicNode};
use drip_core::error::CoreError;
use drip_core::types::DbId;
use drip_db::repositories::{CourseRepo, TopicRepo};

use crate::error::{AppError, AppResult};
use crate::query::AsOfParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn course_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Course",
        id,
    })
}

/// Log courses whose numbering no longer matches their topics.
fn warn_if_partial(course_id: DbId, topics: &[TopicNode]) {
    if numbering_state(topics) == NumberingState::Partial {
        tracing::warn!(
            course_id,
            "Course has partial unlock numbering; re-run unlock order assignment"
        );
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// GET /api/v1/drip/unlocked/{student_id}/{course_id}?as_of=YYYY-MM-DD
///
/// Topics currently visible to the student. "No drip", "no batch" and
/// "empty course" are 200 responses distinguished by `reason`.
pub async fn unlocked(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(DbId, DbId)>,
    Query(params): Query<AsOfParams>,
) -> AppResult<impl IntoResponse> {
    let today = params.day()?;
    let sources = state.drip_sources();
    let evaluation = state
        .unlock_resolver(&sources)
        .evaluate(student_id, course_id, today)
        .await?;

    warn_if_partial(course_id, &evaluation.topics);
    tracing::debug!(
        student_id,
        course_id,
        %today,
        reason = evaluation.unlocked.reason.as_str(),
        unlocked_count = evaluation.unlocked.unlocked_count,
        "Resolved drip unlocks"
    );

    Ok(Json(DataResponse {
        data: evaluation.unlocked,
    }))
}

/// GET /api/v1/drip/schedule/{student_id}/{course_id}?as_of=YYYY-MM-DD
///
/// Per-topic unlock dates for the student.
pub async fn schedule(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(DbId, DbId)>,
    Query(params): Query<AsOfParams>,
) -> AppResult<impl IntoResponse> {
    let today = params.day()?;
    let sources = state.drip_sources();
    let schedule = state
        .unlock_resolver(&sources)
        .schedule(student_id, course_id, today)
        .await?;
    Ok(Json(DataResponse { data: schedule }))
}

/// GET /api/v1/drip/courses/{course_id}
///
/// Numbering state of the course (disabled / complete / partial).
pub async fn status(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CourseRepo::exists(&state.pool, course_id).await? {
        return Err(course_not_found(course_id));
    }
    let topics: Vec<TopicNode> = TopicRepo::list_for_course(&state.pool, course_id)
        .await?
        .into_iter()
        .map(TopicNode::from)
        .collect();
    Ok(Json(DataResponse {
        data: drip_status(course_id, &topics),
    }))
}

// ---------------------------------------------------------------------------
// Unlock order
// ---------------------------------------------------------------------------

/// POST /api/v1/drip/assign/{course_id}
///
/// Enable drip: number every topic of the course 1..N in hierarchy order.
pub async fn assign(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let update = TopicRepo::assign_unlock_order(&state.pool, course_id)
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    tracing::info!(
        course_id,
        topics = update.assignments.len(),
        changed = update.changed,
        "Assigned unlock order"
    );
    Ok(Json(DataResponse { data: update }))
}

/// DELETE /api/v1/drip/assign/{course_id}
///
/// Disable drip: clear every topic's unlock order.
pub async fn clear(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cleared = TopicRepo::clear_unlock_order(&state.pool, course_id)
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    tracing::info!(course_id, cleared = cleared.cleared, "Cleared unlock order");
    Ok(Json(DataResponse { data: cleared }))
}
