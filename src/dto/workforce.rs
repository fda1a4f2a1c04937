//! Workforce team payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{EmployeeEntity, WorkforceTeamEntity},
    dto::{format_system_time, validation::validate_not_blank},
};

/// Payload used to create an organisational team.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateWorkforceTeamRequest {
    #[validate(custom(function = validate_not_blank))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub members: Vec<Uuid>,
    #[serde(default)]
    pub lead: Option<Uuid>,
}

/// Payload editing an organisational team. Absent fields keep their value.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateWorkforceTeamRequest {
    #[validate(custom(function = validate_not_blank))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub members: Option<Vec<Uuid>>,
    /// Omitted keeps the current lead, an explicit `null` clears it.
    #[serde(default)]
    #[schema(value_type = Option<Uuid>)]
    pub lead: Option<Option<Uuid>>,
}

/// Payload used to add one member to an organisational team.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddWorkforceMemberRequest {
    pub employee_id: Uuid,
}

/// Member projection embedded in [`WorkforceTeamDto`].
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkforceMemberDto {
    pub id: Uuid,
    pub emp_id: String,
    pub name: String,
    pub designation: String,
}

impl From<&EmployeeEntity> for WorkforceMemberDto {
    fn from(entity: &EmployeeEntity) -> Self {
        Self {
            id: entity.id,
            emp_id: entity.emp_id.clone(),
            name: entity.name.clone(),
            designation: entity.designation.clone(),
        }
    }
}

/// Organisational team projection with members and lead resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkforceTeamDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub members: Vec<WorkforceMemberDto>,
    pub lead: Option<WorkforceMemberDto>,
    pub created_at: String,
    pub updated_at: String,
}

impl WorkforceTeamDto {
    /// Build the projection with members and lead resolved by the caller.
    pub fn from_entity(
        entity: WorkforceTeamEntity,
        members: Vec<WorkforceMemberDto>,
        lead: Option<WorkforceMemberDto>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            members,
            lead,
            created_at: format_system_time(entity.created_at),
            updated_at: format_system_time(entity.updated_at),
        }
    }
}
