use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::daily::{DailyTaskDto, SubmitMitRequest, SubmitOttRequest},
    error::AppError,
    services::{daily_task_service, session::SessionContext},
    state::SharedState,
};

/// Routes handling the daily task planner.
///
/// The `{date}` segment of the submission routes is the page day the
/// user is acting from, not necessarily the day the write lands on.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/daily-tasks", get(list_records))
        .route("/daily-tasks/{date}", get(get_record))
        .route("/daily-tasks/{date}/ott", post(submit_ott))
        .route("/daily-tasks/{date}/ott/edit", post(edit_ott))
        .route("/daily-tasks/{date}/mit", post(submit_mit))
        .route("/daily-tasks/{date}/mit/edit", post(edit_mit))
}

/// List every stored planner record, oldest day first.
#[utoipa::path(
    get,
    path = "/api/daily-tasks",
    tag = "daily-tasks",
    responses(
        (status = 200, description = "All planner records", body = Vec<DailyTaskDto>)
    )
)]
pub async fn list_records(
    State(state): State<SharedState>,
) -> Result<Json<Vec<DailyTaskDto>>, AppError> {
    let records = daily_task_service::list_records(&state).await?;
    Ok(Json(records))
}

/// Fetch the planner record for one day.
#[utoipa::path(
    get,
    path = "/api/daily-tasks/{date}",
    tag = "daily-tasks",
    params(("date" = String, Path, description = "Calendar day, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Planner record for the day", body = DailyTaskDto)
    )
)]
pub async fn get_record(
    State(state): State<SharedState>,
    Path(date): Path<String>,
) -> Result<Json<DailyTaskDto>, AppError> {
    let record = daily_task_service::get_record(&state, date).await?;
    Ok(Json(record))
}

/// Submit tomorrow's task list from today's page.
#[utoipa::path(
    post,
    path = "/api/daily-tasks/{date}/ott",
    tag = "daily-tasks",
    params(("date" = String, Path, description = "Page day, YYYY-MM-DD")),
    request_body = SubmitOttRequest,
    responses(
        (status = 200, description = "Task list stored under tomorrow's date", body = DailyTaskDto)
    )
)]
pub async fn submit_ott(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(date): Path<String>,
    Json(payload): Json<SubmitOttRequest>,
) -> Result<Json<DailyTaskDto>, AppError> {
    payload.validate()?;
    let record = daily_task_service::submit_ott(&state, &session, date, payload).await?;
    Ok(Json(record))
}

/// Reopen tomorrow's task list for editing.
#[utoipa::path(
    post,
    path = "/api/daily-tasks/{date}/ott/edit",
    tag = "daily-tasks",
    params(("date" = String, Path, description = "Page day, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Task list reopened", body = DailyTaskDto)
    )
)]
pub async fn edit_ott(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(date): Path<String>,
) -> Result<Json<DailyTaskDto>, AppError> {
    let record = daily_task_service::edit_ott(&state, &session, date).await?;
    Ok(Json(record))
}

/// Pick today's focus task from yesterday's submitted list.
#[utoipa::path(
    post,
    path = "/api/daily-tasks/{date}/mit",
    tag = "daily-tasks",
    params(("date" = String, Path, description = "Page day, YYYY-MM-DD")),
    request_body = SubmitMitRequest,
    responses(
        (status = 200, description = "Focus task stored", body = DailyTaskDto)
    )
)]
pub async fn submit_mit(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(date): Path<String>,
    Json(payload): Json<SubmitMitRequest>,
) -> Result<Json<DailyTaskDto>, AppError> {
    payload.validate()?;
    let record = daily_task_service::submit_mit(&state, &session, date, payload).await?;
    Ok(Json(record))
}

/// Reopen today's focus task pick.
#[utoipa::path(
    post,
    path = "/api/daily-tasks/{date}/mit/edit",
    tag = "daily-tasks",
    params(("date" = String, Path, description = "Page day, YYYY-MM-DD")),
    responses(
        (status = 200, description = "Focus task reopened", body = DailyTaskDto)
    )
)]
pub async fn edit_mit(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(date): Path<String>,
) -> Result<Json<DailyTaskDto>, AppError> {
    let record = daily_task_service::edit_mit(&state, &session, date).await?;
    Ok(Json(record))
}
