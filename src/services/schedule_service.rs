//! Scheduled activity operations.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    dao::{
        directory_store::DirectoryStore,
        models::{ActivityKind, ScheduleStatus, ScheduledActivityEntity},
    },
    dto::{
        common::MessageResponse,
        schedule::{
            ScheduleActivityRequest, ScheduleTeamDto, ScheduledActivityDto,
            UpdateScheduledActivityRequest,
        },
    },
    error::ServiceError,
    services::{activity_service, session::SessionContext},
    state::SharedState,
};

/// List every scheduled activity, soonest first, with team names resolved.
pub async fn list_scheduled_activities(
    state: &SharedState,
) -> Result<Vec<ScheduledActivityDto>, ServiceError> {
    let store = state.require_store().await?;

    let team_names = team_name_table(&store).await?;
    let entries = store.list_scheduled_activities().await?;

    Ok(entries
        .into_iter()
        .map(|entry| {
            let teams = resolve_teams(&entry.teams, &team_names);
            ScheduledActivityDto::from_entity(entry, teams)
        })
        .collect())
}

/// Put a new activity on the schedule.
pub async fn schedule_activity(
    state: &SharedState,
    session: &SessionContext,
    payload: ScheduleActivityRequest,
) -> Result<ScheduledActivityDto, ServiceError> {
    let store = state.require_store().await?;

    ensure_teams_exist(&store, &payload.teams).await?;

    let now = SystemTime::now();
    let entry = ScheduledActivityEntity {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_owned(),
        date: payload.date,
        time: payload.time,
        teams: payload.teams,
        description: payload.description.trim().to_owned(),
        status: ScheduleStatus::Scheduled,
        created_at: now,
        updated_at: now,
    };
    store.save_scheduled_activity(entry.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::Game,
        &session.actor,
        format!("Scheduled activity: {}", entry.name),
    )
    .await;

    let team_names = team_name_table(&store).await?;
    let teams = resolve_teams(&entry.teams, &team_names);
    Ok(ScheduledActivityDto::from_entity(entry, teams))
}

/// Edit a scheduled activity. Absent fields keep their value.
///
/// Status moves freely within the enum; there is no workflow constraint.
pub async fn update_scheduled_activity(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: UpdateScheduledActivityRequest,
) -> Result<ScheduledActivityDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(mut entry) = store.find_scheduled_activity(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "scheduled activity `{id}` not found"
        )));
    };

    if let Some(name) = payload.name {
        entry.name = name.trim().to_owned();
    }
    if let Some(date) = payload.date {
        entry.date = date;
    }
    if let Some(time) = payload.time {
        entry.time = time;
    }
    if let Some(teams) = payload.teams {
        ensure_teams_exist(&store, &teams).await?;
        entry.teams = teams;
    }
    if let Some(description) = payload.description {
        entry.description = description.trim().to_owned();
    }
    if let Some(status) = payload.status {
        entry.status = status;
    }
    entry.updated_at = SystemTime::now();

    store.save_scheduled_activity(entry.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::Game,
        &session.actor,
        format!("Updated scheduled activity: {}", entry.name),
    )
    .await;

    let team_names = team_name_table(&store).await?;
    let teams = resolve_teams(&entry.teams, &team_names);
    Ok(ScheduledActivityDto::from_entity(entry, teams))
}

/// Take an activity off the schedule.
pub async fn delete_scheduled_activity(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
) -> Result<MessageResponse, ServiceError> {
    let store = state.require_store().await?;

    let Some(entry) = store.find_scheduled_activity(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "scheduled activity `{id}` not found"
        )));
    };

    store.delete_scheduled_activity(id).await?;

    activity_service::log(
        state,
        ActivityKind::Game,
        &session.actor,
        format!("Deleted scheduled activity: {}", entry.name),
    )
    .await;

    Ok(MessageResponse::new("Scheduled activity deleted successfully"))
}

async fn team_name_table(
    store: &Arc<dyn DirectoryStore>,
) -> Result<HashMap<Uuid, String>, ServiceError> {
    Ok(store
        .list_teams()
        .await?
        .into_iter()
        .map(|team| (team.id, team.name))
        .collect())
}

async fn ensure_teams_exist(
    store: &Arc<dyn DirectoryStore>,
    teams: &[Uuid],
) -> Result<(), ServiceError> {
    for team_id in teams {
        if store.find_team(*team_id).await?.is_none() {
            return Err(ServiceError::InvalidInput(format!(
                "team `{team_id}` does not exist"
            )));
        }
    }
    Ok(())
}

fn resolve_teams(ids: &[Uuid], names: &HashMap<Uuid, String>) -> Vec<ScheduleTeamDto> {
    ids.iter()
        .filter_map(|id| {
            names.get(id).map(|name| ScheduleTeamDto {
                id: *id,
                name: name.clone(),
            })
        })
        .collect()
}
