//! Route definitions for drip resolution and unlock numbering.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::drip;
use crate::state::AppState;

/// Routes mounted at `/drip`.
///
/// ```text
/// GET    /unlocked/{student_id}/{course_id}  -> unlocked
/// GET    /schedule/{student_id}/{course_id}  -> schedule
/// GET    /courses/{course_id}                -> status
/// POST   /assign/{course_id}                 -> assign
/// DELETE /assign/{course_id}                 -> clear
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/unlocked/{student_id}/{course_id}", get(drip::unlocked))
        .route("/schedule/{student_id}/{course_id}", get(drip::schedule))
        .route("/courses/{course_id}", get(drip::status))
        .route("/assign/{course_id}", post(drip::assign).delete(drip::clear))
}
