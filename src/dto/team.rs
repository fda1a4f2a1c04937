//! Scoring team payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{EmployeeEntity, EmployeeRole, TeamEntity},
    dto::{format_system_time, validation::validate_not_blank},
};

/// Payload used to create a scoring team.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTeamRequest {
    /// Display name, unique across the registry.
    #[validate(custom(function = validate_not_blank))]
    pub name: String,
}

/// Payload used to rename a scoring team.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateTeamRequest {
    #[validate(custom(function = validate_not_blank))]
    pub name: String,
}

/// Payload used to place an employee on a team.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTeamMemberRequest {
    pub employee_id: Uuid,
    /// Defaults to `Member` when omitted.
    #[serde(default)]
    pub role: Option<EmployeeRole>,
}

/// Member projection embedded in [`TeamDto`].
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamMemberDto {
    pub id: Uuid,
    pub emp_id: String,
    pub name: String,
    pub designation: String,
    pub role: EmployeeRole,
}

impl From<&EmployeeEntity> for TeamMemberDto {
    fn from(entity: &EmployeeEntity) -> Self {
        Self {
            id: entity.id,
            emp_id: entity.emp_id.clone(),
            name: entity.name.clone(),
            designation: entity.designation.clone(),
            role: entity.role,
        }
    }
}

/// Scoring team projection with members resolved from the employee registry.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamDto {
    pub id: Uuid,
    pub name: String,
    pub points: i64,
    pub members: Vec<TeamMemberDto>,
    pub created_at: String,
    pub updated_at: String,
}

impl TeamDto {
    /// Build the projection with members resolved by the caller.
    pub fn from_entity(entity: TeamEntity, members: Vec<TeamMemberDto>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            points: entity.points,
            members,
            created_at: format_system_time(entity.created_at),
            updated_at: format_system_time(entity.updated_at),
        }
    }
}
