use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::activity::{ActivityDto, ActivityPageDto, ActivityPageQuery, RecordActivityRequest},
    error::AppError,
    services::{activity_service, session::SessionContext},
    state::SharedState,
};

/// Routes handling the audit trail.
pub fn router() -> Router<SharedState> {
    Router::new().route("/activities", get(list_activities).post(record_activity))
}

/// Return one page of the audit trail, newest entries first.
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = "activities",
    params(ActivityPageQuery),
    responses(
        (status = 200, description = "One page of audit entries", body = ActivityPageDto)
    )
)]
pub async fn list_activities(
    State(state): State<SharedState>,
    Query(query): Query<ActivityPageQuery>,
) -> Result<Json<ActivityPageDto>, AppError> {
    let page = activity_service::list_activities(&state, query).await?;
    Ok(Json(page))
}

/// Record an audit entry directly.
#[utoipa::path(
    post,
    path = "/api/activities",
    tag = "activities",
    request_body = RecordActivityRequest,
    responses(
        (status = 200, description = "Entry recorded", body = ActivityDto)
    )
)]
pub async fn record_activity(
    State(state): State<SharedState>,
    session: SessionContext,
    Json(payload): Json<RecordActivityRequest>,
) -> Result<Json<ActivityDto>, AppError> {
    payload.validate()?;
    let entry = activity_service::record_activity(&state, &session, payload).await?;
    Ok(Json(entry))
}
