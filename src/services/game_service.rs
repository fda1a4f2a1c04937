//! Game ledger operations.
//!
//! Games are the append-only record behind every point total. Recording
//! one applies its score lines as storage-level increments and appends the
//! ledger entry; reconciliation (admin surface) can re-derive totals from
//! the ledger alone.

use std::collections::HashMap;
use std::time::SystemTime;

use time::OffsetDateTime;
use tracing::warn;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    dao::models::{ActivityKind, EmployeeScoreEntity, GameEntity, TeamScoreEntity},
    dto::game::{GameDto, RecordGameRequest},
    error::ServiceError,
    services::{activity_service, session::SessionContext},
    state::{SharedState, daily},
};

/// List every recorded game, newest first, with score names resolved.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameDto>, ServiceError> {
    let store = state.require_store().await?;

    let team_names: HashMap<Uuid, String> = store
        .list_teams()
        .await?
        .into_iter()
        .map(|team| (team.id, team.name))
        .collect();
    let employee_names: HashMap<Uuid, String> = store
        .list_employees()
        .await?
        .into_iter()
        .map(|employee| (employee.id, employee.name))
        .collect();

    let games = store.list_games().await?;
    Ok(games
        .into_iter()
        .map(|game| GameDto::from_entity(game, &team_names, &employee_names))
        .collect())
}

/// Record a finished game and apply every score line to its target.
///
/// All referenced teams and employees are resolved before any increment is
/// applied, so an unknown id rejects the whole request with no state
/// change.
pub async fn record_game(
    state: &SharedState,
    session: &SessionContext,
    payload: RecordGameRequest,
) -> Result<GameDto, ServiceError> {
    let store = state.require_store().await?;

    let mut team_names = HashMap::new();
    for score in &payload.team_scores {
        if team_names.contains_key(&score.team_id) {
            continue;
        }
        let Some(team) = store.find_team(score.team_id).await? else {
            return Err(ServiceError::InvalidInput(format!(
                "team `{}` in scores does not exist",
                score.team_id
            )));
        };
        team_names.insert(team.id, team.name);
    }

    let mut employee_names = HashMap::new();
    for score in &payload.employee_scores {
        if employee_names.contains_key(&score.employee_id) {
            continue;
        }
        let Some(employee) = store.find_employee(score.employee_id).await? else {
            return Err(ServiceError::InvalidInput(format!(
                "employee `{}` in scores does not exist",
                score.employee_id
            )));
        };
        employee_names.insert(employee.id, employee.name);
    }

    let game = GameEntity {
        id: Uuid::new_v4(),
        name: payload.name.trim().to_owned(),
        date: payload.date,
        team_scores: payload
            .team_scores
            .into_iter()
            .map(|score| TeamScoreEntity {
                team_id: score.team_id,
                points: score.points,
            })
            .collect(),
        employee_scores: payload
            .employee_scores
            .into_iter()
            .map(|score| EmployeeScoreEntity {
                employee_id: score.employee_id,
                points: score.points,
            })
            .collect(),
        recorded_at: SystemTime::now(),
    };

    for score in &game.team_scores {
        if !store
            .increment_team_points(score.team_id, score.points)
            .await?
        {
            warn!(team = %score.team_id, "score target vanished while recording game");
        }
    }
    for score in &game.employee_scores {
        if !store
            .increment_employee_points(score.employee_id, score.points)
            .await?
        {
            warn!(employee = %score.employee_id, "score target vanished while recording game");
        }
    }

    if let Err(err) = store.insert_game(game.clone()).await {
        warn!(error = %err, "scores applied but ledger append failed");
        return Err(err.into());
    }

    activity_service::log(
        state,
        ActivityKind::Game,
        &session.actor,
        format!("Recorded game: {}", game.name),
    )
    .await;

    Ok(GameDto::from_entity(game, &team_names, &employee_names))
}

/// Ledger entry representing a single direct award outside a recorded game.
pub(crate) fn direct_award_entry(
    config: &AppConfig,
    name: String,
    team_scores: Vec<TeamScoreEntity>,
    employee_scores: Vec<EmployeeScoreEntity>,
) -> GameEntity {
    let today = daily::local_date(OffsetDateTime::now_utc(), config.utc_offset_hours);
    GameEntity {
        id: Uuid::new_v4(),
        name,
        date: daily::format_date(today),
        team_scores,
        employee_scores,
        recorded_at: SystemTime::now(),
    }
}
