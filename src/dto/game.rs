//! Game ledger payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::GameEntity,
    dto::{
        format_system_time,
        validation::{validate_date_key, validate_not_blank},
    },
};

/// Payload recording a finished game and its point awards.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RecordGameRequest {
    #[validate(custom(function = validate_not_blank))]
    pub name: String,
    /// Calendar day the game was played, `YYYY-MM-DD`.
    #[validate(custom(function = validate_date_key))]
    pub date: String,
    #[serde(default)]
    pub team_scores: Vec<TeamScoreInput>,
    #[serde(default)]
    pub employee_scores: Vec<EmployeeScoreInput>,
}

/// Points awarded to one team.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TeamScoreInput {
    pub team_id: Uuid,
    pub points: i64,
}

/// Points awarded to one employee.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EmployeeScoreInput {
    pub employee_id: Uuid,
    pub points: i64,
}

/// Team award line with the name resolved at read time.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamScoreDto {
    pub team_id: Uuid,
    /// `null` when the team has since been deleted.
    pub team_name: Option<String>,
    pub points: i64,
}

/// Employee award line with the name resolved at read time.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeScoreDto {
    pub employee_id: Uuid,
    /// `null` when the employee has since been deleted.
    pub employee_name: Option<String>,
    pub points: i64,
}

/// Ledger entry returned by the REST API.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameDto {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub team_scores: Vec<TeamScoreDto>,
    pub employee_scores: Vec<EmployeeScoreDto>,
    pub recorded_at: String,
}

impl GameDto {
    /// Build the projection, resolving names from the supplied lookup tables.
    pub fn from_entity(
        entity: GameEntity,
        team_names: &HashMap<Uuid, String>,
        employee_names: &HashMap<Uuid, String>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            date: entity.date,
            team_scores: entity
                .team_scores
                .into_iter()
                .map(|score| TeamScoreDto {
                    team_name: team_names.get(&score.team_id).cloned(),
                    team_id: score.team_id,
                    points: score.points,
                })
                .collect(),
            employee_scores: entity
                .employee_scores
                .into_iter()
                .map(|score| EmployeeScoreDto {
                    employee_name: employee_names.get(&score.employee_id).cloned(),
                    employee_id: score.employee_id,
                    points: score.points,
                })
                .collect(),
            recorded_at: format_system_time(entity.recorded_at),
        }
    }
}
