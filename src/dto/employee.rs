//! Employee registry payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{EmployeeEntity, EmployeeRole, EmployeeStatus},
    dto::{format_system_time, validation::validate_not_blank},
};

/// Payload used to enroll a single employee.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateEmployeeRequest {
    /// Human-assigned badge identifier, unique across the registry.
    #[validate(custom(function = validate_not_blank))]
    pub emp_id: String,
    #[validate(custom(function = validate_not_blank))]
    pub name: String,
    #[validate(custom(function = validate_not_blank))]
    pub designation: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Defaults to `Member` when omitted.
    #[serde(default)]
    pub role: Option<EmployeeRole>,
    /// Defaults to `Active` when omitted.
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
}

/// Payload used to edit an existing employee. Absent fields keep their value.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(custom(function = validate_not_blank))]
    pub emp_id: Option<String>,
    #[validate(custom(function = validate_not_blank))]
    pub name: Option<String>,
    #[validate(custom(function = validate_not_blank))]
    pub designation: Option<String>,
    /// Omitted keeps the current address, an explicit `null` clears it.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    pub role: Option<EmployeeRole>,
    pub status: Option<EmployeeStatus>,
}

/// One row of a bulk import request.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ImportEmployeeInput {
    #[validate(custom(function = validate_not_blank))]
    pub emp_id: String,
    #[validate(custom(function = validate_not_blank))]
    pub name: String,
    #[validate(custom(function = validate_not_blank))]
    pub designation: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Bulk import payload. Rows whose badge identifier already exists are skipped.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ImportEmployeesRequest {
    #[validate(nested)]
    pub employees: Vec<ImportEmployeeInput>,
}

/// Employee projection returned by the REST API.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub emp_id: String,
    pub name: String,
    pub designation: String,
    pub email: Option<String>,
    pub points: i64,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
    pub team_id: Option<Uuid>,
    /// Resolved from the team registry; `null` when unassigned.
    pub team_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl EmployeeDto {
    /// Build the projection with the team name resolved by the caller.
    pub fn from_entity(entity: EmployeeEntity, team_name: Option<String>) -> Self {
        Self {
            id: entity.id,
            emp_id: entity.emp_id,
            name: entity.name,
            designation: entity.designation,
            email: entity.email,
            points: entity.points,
            role: entity.role,
            status: entity.status,
            team_id: entity.team_id,
            team_name,
            created_at: format_system_time(entity.created_at),
            updated_at: format_system_time(entity.updated_at),
        }
    }
}

/// Outcome of a bulk import run.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImportEmployeesResponse {
    pub message: String,
    /// Rows that were actually enrolled.
    pub employees: Vec<EmployeeDto>,
    /// Badge identifiers skipped because they already exist.
    pub skipped: Vec<String>,
}
