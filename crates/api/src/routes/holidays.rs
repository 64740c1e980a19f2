//! Route definitions for the holiday calendar.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::holidays;
use crate::state::AppState;

/// Routes mounted at `/holidays`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(holidays::list).post(holidays::create))
        .route("/{id}", delete(holidays::delete))
}
