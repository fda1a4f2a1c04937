//! Organisational team operations.
//!
//! Unlike scoring teams, workforce membership lives only on the team
//! record; employees carry no back-reference. A team's lead is always
//! also listed as a member.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    dao::{
        directory_store::DirectoryStore,
        models::{ActivityKind, EmployeeEntity, WorkforceTeamEntity},
    },
    dto::{
        common::MessageResponse,
        workforce::{
            AddWorkforceMemberRequest, CreateWorkforceTeamRequest, UpdateWorkforceTeamRequest,
            WorkforceMemberDto, WorkforceTeamDto,
        },
    },
    error::ServiceError,
    services::{activity_service, session::SessionContext},
    state::SharedState,
};

/// List every organisational team with members and lead resolved.
pub async fn list_workforce_teams(
    state: &SharedState,
) -> Result<Vec<WorkforceTeamDto>, ServiceError> {
    let store = state.require_store().await?;

    let employees = store.list_employees().await?;
    let teams = store.list_workforce_teams().await?;

    Ok(teams
        .into_iter()
        .map(|team| with_roster(team, &employees))
        .collect())
}

/// Create an organisational team.
pub async fn create_workforce_team(
    state: &SharedState,
    session: &SessionContext,
    payload: CreateWorkforceTeamRequest,
) -> Result<WorkforceTeamDto, ServiceError> {
    let store = state.require_store().await?;

    let mut members = dedupe_members(payload.members);
    ensure_employees_exist(&store, &members).await?;
    if let Some(lead) = payload.lead {
        if store.find_employee(lead).await?.is_none() {
            return Err(ServiceError::InvalidInput(format!(
                "employee `{lead}` does not exist"
            )));
        }
        if !members.contains(&lead) {
            members.push(lead);
        }
    }

    let now = SystemTime::now();
    let team = WorkforceTeamEntity {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_owned(),
        description: payload.description.trim().to_owned(),
        members,
        lead: payload.lead,
        created_at: now,
        updated_at: now,
    };
    store.save_workforce_team(team.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Created workforce team: {}", team.name),
    )
    .await;

    populate(&store, team).await
}

/// Edit an organisational team. Absent fields keep their value.
pub async fn update_workforce_team(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: UpdateWorkforceTeamRequest,
) -> Result<WorkforceTeamDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(mut team) = store.find_workforce_team(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "workforce team `{id}` not found"
        )));
    };

    if let Some(name) = payload.name {
        team.name = name.trim().to_owned();
    }
    if let Some(description) = payload.description {
        team.description = description.trim().to_owned();
    }
    if let Some(members) = payload.members {
        let members = dedupe_members(members);
        ensure_employees_exist(&store, &members).await?;
        team.members = members;
    }
    if let Some(lead) = payload.lead {
        if let Some(lead) = lead {
            if store.find_employee(lead).await?.is_none() {
                return Err(ServiceError::InvalidInput(format!(
                    "employee `{lead}` does not exist"
                )));
            }
        }
        team.lead = lead;
    }
    if let Some(lead) = team.lead {
        if !team.members.contains(&lead) {
            team.members.push(lead);
        }
    }
    team.updated_at = SystemTime::now();

    store.save_workforce_team(team.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Updated workforce team: {}", team.name),
    )
    .await;

    populate(&store, team).await
}

/// Delete an organisational team. Employees themselves are untouched.
pub async fn delete_workforce_team(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
) -> Result<MessageResponse, ServiceError> {
    let store = state.require_store().await?;

    let Some(team) = store.find_workforce_team(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "workforce team `{id}` not found"
        )));
    };

    store.delete_workforce_team(id).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Deleted workforce team: {}", team.name),
    )
    .await;

    Ok(MessageResponse::new("Workforce team deleted successfully"))
}

/// Add one employee to an organisational team. Already-present is a no-op.
pub async fn add_member(
    state: &SharedState,
    session: &SessionContext,
    team_id: Uuid,
    payload: AddWorkforceMemberRequest,
) -> Result<WorkforceTeamDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(team) = store.find_workforce_team(team_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "workforce team `{team_id}` not found"
        )));
    };
    let Some(employee) = store.find_employee(payload.employee_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "employee `{}` not found",
            payload.employee_id
        )));
    };

    store.add_workforce_member(team_id, employee.id).await?;

    activity_service::log(
        state,
        ActivityKind::Team,
        &session.actor,
        format!("Added {} to workforce team {}", employee.name, team.name),
    )
    .await;

    reload(&store, team_id).await
}

/// Take one employee off an organisational team.
///
/// A departing member also vacates the lead slot if they held it.
pub async fn remove_member(
    state: &SharedState,
    session: &SessionContext,
    team_id: Uuid,
    employee_id: Uuid,
) -> Result<WorkforceTeamDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(team) = store.find_workforce_team(team_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "workforce team `{team_id}` not found"
        )));
    };

    store.remove_workforce_member(team_id, employee_id).await?;

    if let Some(employee) = store.find_employee(employee_id).await? {
        activity_service::log(
            state,
            ActivityKind::Team,
            &session.actor,
            format!("Removed {} from workforce team {}", employee.name, team.name),
        )
        .await;
    }

    reload(&store, team_id).await
}

async fn ensure_employees_exist(
    store: &Arc<dyn DirectoryStore>,
    members: &[Uuid],
) -> Result<(), ServiceError> {
    for employee_id in members {
        if store.find_employee(*employee_id).await?.is_none() {
            return Err(ServiceError::InvalidInput(format!(
                "employee `{employee_id}` does not exist"
            )));
        }
    }
    Ok(())
}

async fn reload(
    store: &Arc<dyn DirectoryStore>,
    team_id: Uuid,
) -> Result<WorkforceTeamDto, ServiceError> {
    let Some(team) = store.find_workforce_team(team_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "workforce team `{team_id}` not found"
        )));
    };
    populate(store, team).await
}

async fn populate(
    store: &Arc<dyn DirectoryStore>,
    team: WorkforceTeamEntity,
) -> Result<WorkforceTeamDto, ServiceError> {
    let employees = store.list_employees().await?;
    Ok(with_roster(team, &employees))
}

fn with_roster(team: WorkforceTeamEntity, employees: &[EmployeeEntity]) -> WorkforceTeamDto {
    let by_id: HashMap<Uuid, &EmployeeEntity> =
        employees.iter().map(|employee| (employee.id, employee)).collect();
    let members = team
        .members
        .iter()
        .filter_map(|member_id| by_id.get(member_id).copied())
        .map(WorkforceMemberDto::from)
        .collect();
    let lead = team
        .lead
        .and_then(|lead_id| by_id.get(&lead_id).copied())
        .map(WorkforceMemberDto::from);
    WorkforceTeamDto::from_entity(team, members, lead)
}

fn dedupe_members(members: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    members
        .into_iter()
        .filter(|member| seen.insert(*member))
        .collect()
}
