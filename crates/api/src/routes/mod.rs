pub mod drip;
pub mod health;
pub mod holidays;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /drip/unlocked/{student_id}/{course_id}          unlocked topics (GET)
/// /drip/schedule/{student_id}/{course_id}          per-topic unlock dates (GET)
/// /drip/courses/{course_id}                        numbering state (GET)
/// /drip/assign/{course_id}                         assign (POST), clear (DELETE)
///
/// /holidays                                        list, declare
/// /holidays/{id}                                   remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/drip", drip::router())
        .nest("/holidays", holidays::router())
}
