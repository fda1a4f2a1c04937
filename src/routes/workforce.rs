use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        workforce::{
            AddWorkforceMemberRequest, CreateWorkforceTeamRequest, UpdateWorkforceTeamRequest,
            WorkforceTeamDto,
        },
    },
    error::AppError,
    services::{session::SessionContext, workforce_service},
    state::SharedState,
};

/// Routes handling organisational teams.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/workforce-teams",
            get(list_workforce_teams).post(create_workforce_team),
        )
        .route(
            "/workforce-teams/{id}",
            put(update_workforce_team).delete(delete_workforce_team),
        )
        .route("/workforce-teams/{id}/members", post(add_workforce_member))
        .route(
            "/workforce-teams/{id}/members/{employee_id}",
            delete(remove_workforce_member),
        )
}

/// List every organisational team.
#[utoipa::path(
    get,
    path = "/api/workforce-teams",
    tag = "workforce",
    responses(
        (status = 200, description = "All workforce teams", body = Vec<WorkforceTeamDto>)
    )
)]
pub async fn list_workforce_teams(
    State(state): State<SharedState>,
) -> Result<Json<Vec<WorkforceTeamDto>>, AppError> {
    let teams = workforce_service::list_workforce_teams(&state).await?;
    Ok(Json(teams))
}

/// Create an organisational team.
#[utoipa::path(
    post,
    path = "/api/workforce-teams",
    tag = "workforce",
    request_body = CreateWorkforceTeamRequest,
    responses(
        (status = 200, description = "Workforce team created", body = WorkforceTeamDto)
    )
)]
pub async fn create_workforce_team(
    State(state): State<SharedState>,
    session: SessionContext,
    Json(payload): Json<CreateWorkforceTeamRequest>,
) -> Result<Json<WorkforceTeamDto>, AppError> {
    payload.validate()?;
    let team = workforce_service::create_workforce_team(&state, &session, payload).await?;
    Ok(Json(team))
}

/// Edit an organisational team.
#[utoipa::path(
    put,
    path = "/api/workforce-teams/{id}",
    tag = "workforce",
    params(("id" = String, Path, description = "Identifier of the workforce team")),
    request_body = UpdateWorkforceTeamRequest,
    responses(
        (status = 200, description = "Workforce team updated", body = WorkforceTeamDto)
    )
)]
pub async fn update_workforce_team(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWorkforceTeamRequest>,
) -> Result<Json<WorkforceTeamDto>, AppError> {
    payload.validate()?;
    let team = workforce_service::update_workforce_team(&state, &session, id, payload).await?;
    Ok(Json(team))
}

/// Delete an organisational team.
#[utoipa::path(
    delete,
    path = "/api/workforce-teams/{id}",
    tag = "workforce",
    params(("id" = String, Path, description = "Identifier of the workforce team")),
    responses(
        (status = 200, description = "Workforce team deleted", body = MessageResponse)
    )
)]
pub async fn delete_workforce_team(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let outcome = workforce_service::delete_workforce_team(&state, &session, id).await?;
    Ok(Json(outcome))
}

/// Add one employee to an organisational team.
#[utoipa::path(
    post,
    path = "/api/workforce-teams/{id}/members",
    tag = "workforce",
    params(("id" = String, Path, description = "Identifier of the workforce team")),
    request_body = AddWorkforceMemberRequest,
    responses(
        (status = 200, description = "Member added", body = WorkforceTeamDto)
    )
)]
pub async fn add_workforce_member(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddWorkforceMemberRequest>,
) -> Result<Json<WorkforceTeamDto>, AppError> {
    let team = workforce_service::add_member(&state, &session, id, payload).await?;
    Ok(Json(team))
}

/// Take one employee off an organisational team.
#[utoipa::path(
    delete,
    path = "/api/workforce-teams/{id}/members/{employee_id}",
    tag = "workforce",
    params(
        ("id" = String, Path, description = "Identifier of the workforce team"),
        ("employee_id" = String, Path, description = "Identifier of the employee")
    ),
    responses(
        (status = 200, description = "Member removed", body = WorkforceTeamDto)
    )
)]
pub async fn remove_workforce_member(
    State(state): State<SharedState>,
    session: SessionContext,
    Path((id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<WorkforceTeamDto>, AppError> {
    let team = workforce_service::remove_member(&state, &session, id, employee_id).await?;
    Ok(Json(team))
}
