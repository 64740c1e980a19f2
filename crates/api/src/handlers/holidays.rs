//! Handlers for the `/holidays` resource.
//!
//! Every mutation invalidates the shared holiday cache before responding,
//! so the next resolution sees the change.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use drip_core::calendar::parse_day;
use drip_core::error::CoreError;
use drip_core::types::DbId;
use drip_db::models::holiday::CreateHoliday;
use drip_db::repositories::HolidayRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/holidays
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let holidays = HolidayRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: holidays }))
}

/// POST /api/v1/holidays
///
/// Declare a holiday. Re-declaring an existing date replaces its reason.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHoliday>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let date = parse_day(&input.date)?;

    let holiday = HolidayRepo::upsert(&state.pool, date, input.reason.trim()).await?;
    state.holiday_cache.invalidate().await;

    tracing::info!(holiday_id = holiday.id, %date, "Holiday declared");
    Ok((StatusCode::CREATED, Json(DataResponse { data: holiday })))
}

/// DELETE /api/v1/holidays/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !HolidayRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Holiday",
            id,
        }));
    }
    state.holiday_cache.invalidate().await;

    tracing::info!(holiday_id = id, "Holiday removed");
    Ok(StatusCode::NO_CONTENT)
}
