//! Handlers for the `/milestones/` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use milestones_core::error::CoreError;
use milestones_db::models::milestone::CreateMilestone;
use milestones_db::repositories::MilestoneRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /milestones/
///
/// List all milestones as a flat array, in storage order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let milestones = MilestoneRepo::list(&state.pool).await?;
    Ok(Json(milestones))
}

/// POST /milestones/
///
/// Create a milestone from the creation payload and return the stored row,
/// generated id included. Missing or mistyped fields surface as 422; a
/// `group_id` that references no existing group as 409.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMilestone>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) =
        payload.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;

    let milestone = MilestoneRepo::create(&state.pool, &input).await?;
    Ok(Json(milestone))
}
