//! Scoring team operations.
//!
//! `Employee.team_id` is the authoritative side of membership. Every
//! operation here updates the team's `members` mirror in the same call so
//! reads stay cheap.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

use tracing::warn;
use uuid::Uuid;

use crate::{
    dao::{
        directory_store::DirectoryStore,
        models::{ActivityKind, EmployeeEntity, EmployeeRole, TeamEntity, TeamScoreEntity},
    },
    dto::{
        common::{AwardPointsRequest, MessageResponse, SetPointsRequest},
        team::{AddTeamMemberRequest, CreateTeamRequest, TeamDto, TeamMemberDto, UpdateTeamRequest},
    },
    error::ServiceError,
    services::{activity_service, game_service, session::SessionContext},
    state::SharedState,
};

/// List every scoring team with its roster resolved.
pub async fn list_teams(state: &SharedState) -> Result<Vec<TeamDto>, ServiceError> {
    let store = state.require_store().await?;

    let employees = store.list_employees().await?;
    let teams = store.list_teams().await?;

    Ok(teams
        .into_iter()
        .map(|team| team_with_members(team, &employees))
        .collect())
}

/// Create a scoring team. The display name must be unused.
pub async fn create_team(
    state: &SharedState,
    session: &SessionContext,
    payload: CreateTeamRequest,
) -> Result<TeamDto, ServiceError> {
    let store = state.require_store().await?;

    let name = payload.name.trim().to_owned();
    if store.find_team_by_name(name.clone()).await?.is_some() {
        return Err(ServiceError::InvalidState(format!(
            "team name `{name}` already exists"
        )));
    }

    let now = SystemTime::now();
    let team = TeamEntity {
        id: Uuid::new_v4(),
        name,
        points: 0,
        members: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    store.save_team(team.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Created new team: {}", team.name),
    )
    .await;

    Ok(TeamDto::from_entity(team, Vec::new()))
}

/// Rename a scoring team. The new name must be unused.
pub async fn update_team(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: UpdateTeamRequest,
) -> Result<TeamDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(mut team) = store.find_team(id).await? else {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    };

    let name = payload.name.trim().to_owned();
    if name != team.name {
        if store.find_team_by_name(name.clone()).await?.is_some() {
            return Err(ServiceError::InvalidState(format!(
                "team name `{name}` already exists"
            )));
        }
        team.name = name;
    }
    team.updated_at = SystemTime::now();

    store.save_team(team.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Updated team: {}", team.name),
    )
    .await;

    populate_team(&store, team).await
}

/// Delete a scoring team, detaching every member first.
pub async fn delete_team(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
) -> Result<MessageResponse, ServiceError> {
    let store = state.require_store().await?;

    let Some(team) = store.find_team(id).await? else {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    };

    store.clear_team_assignments(id).await?;
    store.delete_team(id).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Deleted team: {}", team.name),
    )
    .await;

    Ok(MessageResponse::new("Team deleted successfully"))
}

/// Overwrite a team's point tally with an absolute value.
pub async fn set_team_points(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: SetPointsRequest,
) -> Result<TeamDto, ServiceError> {
    if payload.points < 0 {
        return Err(ServiceError::InvalidInput(
            "points cannot be negative".to_owned(),
        ));
    }

    let store = state.require_store().await?;
    if !store.set_team_points(id, payload.points).await? {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    }

    let dto = reload_team(&store, id).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Updated points for {}: {} points", dto.name, dto.points),
    )
    .await;

    Ok(dto)
}

/// Award a signed point delta to a team and record it in the ledger.
pub async fn award_team_points(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: AwardPointsRequest,
) -> Result<TeamDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(team) = store.find_team(id).await? else {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    };

    if !store.increment_team_points(id, payload.points).await? {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    }

    let ledger = game_service::direct_award_entry(
        state.config(),
        format!("Direct award to {}", team.name),
        vec![TeamScoreEntity {
            team_id: id,
            points: payload.points,
        }],
        Vec::new(),
    );
    if let Err(err) = store.insert_game(ledger).await {
        warn!(error = %err, team = %id, "points applied but ledger append failed");
        return Err(err.into());
    }

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Awarded {} points to {}", payload.points, team.name),
    )
    .await;

    reload_team(&store, id).await
}

/// Place an employee on a team, moving them off their previous team first.
///
/// Team Lead and Vice Lead are single-holder roles: assigning a second
/// incumbent is rejected, re-assigning the current one is allowed.
pub async fn assign_member(
    state: &SharedState,
    session: &SessionContext,
    team_id: Uuid,
    payload: AddTeamMemberRequest,
) -> Result<TeamDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(team) = store.find_team(team_id).await? else {
        return Err(ServiceError::NotFound(format!("team `{team_id}` not found")));
    };
    let Some(employee) = store.find_employee(payload.employee_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "employee `{}` not found",
            payload.employee_id
        )));
    };

    let role = payload.role.unwrap_or(EmployeeRole::Member);

    if matches!(role, EmployeeRole::TeamLead | EmployeeRole::ViceLead) {
        let employees = store.list_employees().await?;
        let occupied = employees.iter().any(|other| {
            other.id != employee.id && other.team_id == Some(team_id) && other.role == role
        });
        if occupied {
            return Err(ServiceError::InvalidState(format!(
                "team `{}` already has a {}",
                team.name,
                role.label()
            )));
        }
    }

    if let Some(previous) = employee.team_id {
        if previous != team_id {
            store.remove_team_member(previous, employee.id).await?;
        }
    }

    store
        .set_employee_assignment(employee.id, Some(team_id), role)
        .await?;
    store.add_team_member(team_id, employee.id).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Added {} to team {}", employee.name, team.name),
    )
    .await;

    reload_team(&store, team_id).await
}

/// Take an employee off a team, resetting their role to member.
///
/// Removing someone who is not on the team is a no-op that still returns
/// the current roster.
pub async fn remove_member(
    state: &SharedState,
    session: &SessionContext,
    team_id: Uuid,
    employee_id: Uuid,
) -> Result<TeamDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(team) = store.find_team(team_id).await? else {
        return Err(ServiceError::NotFound(format!("team `{team_id}` not found")));
    };

    store.remove_team_member(team_id, employee_id).await?;
    if let Some(employee) = store.find_employee(employee_id).await? {
        if employee.team_id == Some(team_id) {
            store
                .set_employee_assignment(employee_id, None, EmployeeRole::Member)
                .await?;
        }

        activity_service::log(
            state,
            ActivityKind::Team,
            &session.actor,
            format!("Removed {} from team {}", employee.name, team.name),
        )
        .await;
    }

    reload_team(&store, team_id).await
}

async fn reload_team(store: &Arc<dyn DirectoryStore>, team_id: Uuid) -> Result<TeamDto, ServiceError> {
    let Some(team) = store.find_team(team_id).await? else {
        return Err(ServiceError::NotFound(format!("team `{team_id}` not found")));
    };
    populate_team(store, team).await
}

async fn populate_team(
    store: &Arc<dyn DirectoryStore>,
    team: TeamEntity,
) -> Result<TeamDto, ServiceError> {
    let employees = store.list_employees().await?;
    Ok(team_with_members(team, &employees))
}

fn team_with_members(team: TeamEntity, employees: &[EmployeeEntity]) -> TeamDto {
    let by_id: HashMap<Uuid, &EmployeeEntity> =
        employees.iter().map(|employee| (employee.id, employee)).collect();
    let members = team
        .members
        .iter()
        .filter_map(|member_id| by_id.get(member_id).copied())
        .map(TeamMemberDto::from)
        .collect();
    TeamDto::from_entity(team, members)
}
