use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        common::{AwardPointsRequest, MessageResponse, SetPointsRequest},
        team::{AddTeamMemberRequest, CreateTeamRequest, TeamDto, UpdateTeamRequest},
    },
    error::AppError,
    services::{session::SessionContext, team_service},
    state::SharedState,
};

/// Routes handling scoring teams and their rosters.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/{id}", put(update_team).delete(delete_team))
        .route("/teams/{id}/points", patch(set_team_points))
        .route("/teams/{id}/points/award", post(award_team_points))
        .route("/teams/{id}/members", post(assign_member))
        .route(
            "/teams/{id}/members/{employee_id}",
            delete(remove_team_member),
        )
}

/// List every scoring team with its roster.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = "teams",
    responses(
        (status = 200, description = "All teams", body = Vec<TeamDto>)
    )
)]
pub async fn list_teams(State(state): State<SharedState>) -> Result<Json<Vec<TeamDto>>, AppError> {
    let teams = team_service::list_teams(&state).await?;
    Ok(Json(teams))
}

/// Create a scoring team.
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = "teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 200, description = "Team created", body = TeamDto)
    )
)]
pub async fn create_team(
    State(state): State<SharedState>,
    session: SessionContext,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<Json<TeamDto>, AppError> {
    payload.validate()?;
    let team = team_service::create_team(&state, &session, payload).await?;
    Ok(Json(team))
}

/// Rename a scoring team.
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = "teams",
    params(("id" = String, Path, description = "Identifier of the team")),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated", body = TeamDto)
    )
)]
pub async fn update_team(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTeamRequest>,
) -> Result<Json<TeamDto>, AppError> {
    payload.validate()?;
    let team = team_service::update_team(&state, &session, id, payload).await?;
    Ok(Json(team))
}

/// Delete a scoring team, detaching every member first.
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = "teams",
    params(("id" = String, Path, description = "Identifier of the team")),
    responses(
        (status = 200, description = "Team deleted", body = MessageResponse)
    )
)]
pub async fn delete_team(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let outcome = team_service::delete_team(&state, &session, id).await?;
    Ok(Json(outcome))
}

/// Overwrite a team's point tally.
#[utoipa::path(
    patch,
    path = "/api/teams/{id}/points",
    tag = "teams",
    params(("id" = String, Path, description = "Identifier of the team")),
    request_body = SetPointsRequest,
    responses(
        (status = 200, description = "Points updated", body = TeamDto)
    )
)]
pub async fn set_team_points(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetPointsRequest>,
) -> Result<Json<TeamDto>, AppError> {
    let team = team_service::set_team_points(&state, &session, id, payload).await?;
    Ok(Json(team))
}

/// Award a signed point delta to a team.
#[utoipa::path(
    post,
    path = "/api/teams/{id}/points/award",
    tag = "teams",
    params(("id" = String, Path, description = "Identifier of the team")),
    request_body = AwardPointsRequest,
    responses(
        (status = 200, description = "Points awarded", body = TeamDto)
    )
)]
pub async fn award_team_points(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<AwardPointsRequest>,
) -> Result<Json<TeamDto>, AppError> {
    let team = team_service::award_team_points(&state, &session, id, payload).await?;
    Ok(Json(team))
}

/// Place an employee on a team, optionally with a leadership role.
#[utoipa::path(
    post,
    path = "/api/teams/{id}/members",
    tag = "teams",
    params(("id" = String, Path, description = "Identifier of the team")),
    request_body = AddTeamMemberRequest,
    responses(
        (status = 200, description = "Member assigned", body = TeamDto)
    )
)]
pub async fn assign_member(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddTeamMemberRequest>,
) -> Result<Json<TeamDto>, AppError> {
    let team = team_service::assign_member(&state, &session, id, payload).await?;
    Ok(Json(team))
}

/// Take an employee off a team.
#[utoipa::path(
    delete,
    path = "/api/teams/{id}/members/{employee_id}",
    tag = "teams",
    params(
        ("id" = String, Path, description = "Identifier of the team"),
        ("employee_id" = String, Path, description = "Identifier of the employee")
    ),
    responses(
        (status = 200, description = "Member removed", body = TeamDto)
    )
)]
pub async fn remove_team_member(
    State(state): State<SharedState>,
    session: SessionContext,
    Path((id, employee_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TeamDto>, AppError> {
    let team = team_service::remove_member(&state, &session, id, employee_id).await?;
    Ok(Json(team))
}
