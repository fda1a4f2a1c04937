use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        schedule::{
            ScheduleActivityRequest, ScheduledActivityDto, UpdateScheduledActivityRequest,
        },
    },
    error::AppError,
    services::{schedule_service, session::SessionContext},
    state::SharedState,
};

/// Routes handling the activity schedule.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/games/scheduled",
            get(list_scheduled).post(schedule_activity),
        )
        .route(
            "/games/scheduled/{id}",
            put(update_scheduled).delete(delete_scheduled),
        )
}

/// List every scheduled activity, soonest first.
#[utoipa::path(
    get,
    path = "/api/games/scheduled",
    tag = "schedule",
    responses(
        (status = 200, description = "All scheduled activities", body = Vec<ScheduledActivityDto>)
    )
)]
pub async fn list_scheduled(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ScheduledActivityDto>>, AppError> {
    let entries = schedule_service::list_scheduled_activities(&state).await?;
    Ok(Json(entries))
}

/// Put a new activity on the schedule.
#[utoipa::path(
    post,
    path = "/api/games/scheduled",
    tag = "schedule",
    request_body = ScheduleActivityRequest,
    responses(
        (status = 200, description = "Activity scheduled", body = ScheduledActivityDto)
    )
)]
pub async fn schedule_activity(
    State(state): State<SharedState>,
    session: SessionContext,
    Json(payload): Json<ScheduleActivityRequest>,
) -> Result<Json<ScheduledActivityDto>, AppError> {
    payload.validate()?;
    let entry = schedule_service::schedule_activity(&state, &session, payload).await?;
    Ok(Json(entry))
}

/// Edit a scheduled activity.
#[utoipa::path(
    put,
    path = "/api/games/scheduled/{id}",
    tag = "schedule",
    params(("id" = String, Path, description = "Identifier of the scheduled activity")),
    request_body = UpdateScheduledActivityRequest,
    responses(
        (status = 200, description = "Activity updated", body = ScheduledActivityDto)
    )
)]
pub async fn update_scheduled(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScheduledActivityRequest>,
) -> Result<Json<ScheduledActivityDto>, AppError> {
    payload.validate()?;
    let entry = schedule_service::update_scheduled_activity(&state, &session, id, payload).await?;
    Ok(Json(entry))
}

/// Take an activity off the schedule.
#[utoipa::path(
    delete,
    path = "/api/games/scheduled/{id}",
    tag = "schedule",
    params(("id" = String, Path, description = "Identifier of the scheduled activity")),
    responses(
        (status = 200, description = "Activity deleted", body = MessageResponse)
    )
)]
pub async fn delete_scheduled(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let outcome = schedule_service::delete_scheduled_activity(&state, &session, id).await?;
    Ok(Json(outcome))
}
