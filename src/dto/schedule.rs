//! Scheduled activity payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{ScheduleStatus, ScheduledActivityEntity},
    dto::{
        format_system_time,
        validation::{validate_clock_time, validate_date_key, validate_not_blank},
    },
};

/// Payload scheduling an upcoming activity.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ScheduleActivityRequest {
    #[validate(custom(function = validate_not_blank))]
    pub name: String,
    /// Planned day, `YYYY-MM-DD`.
    #[validate(custom(function = validate_date_key))]
    pub date: String,
    /// Planned start, 24-hour `HH:MM`.
    #[validate(custom(function = validate_clock_time))]
    pub time: String,
    #[serde(default)]
    pub teams: Vec<Uuid>,
    #[serde(default)]
    pub description: String,
}

/// Payload editing a scheduled activity. Absent fields keep their value.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateScheduledActivityRequest {
    #[validate(custom(function = validate_not_blank))]
    pub name: Option<String>,
    #[validate(custom(function = validate_date_key))]
    pub date: Option<String>,
    #[validate(custom(function = validate_clock_time))]
    pub time: Option<String>,
    pub teams: Option<Vec<Uuid>>,
    pub description: Option<String>,
    pub status: Option<ScheduleStatus>,
}

/// Team reference embedded in [`ScheduledActivityDto`].
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleTeamDto {
    pub id: Uuid,
    pub name: String,
}

/// Scheduled activity projection with team names resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduledActivityDto {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub time: String,
    pub teams: Vec<ScheduleTeamDto>,
    pub description: String,
    pub status: ScheduleStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl ScheduledActivityDto {
    /// Build the projection with participating teams resolved by the caller.
    pub fn from_entity(entity: ScheduledActivityEntity, teams: Vec<ScheduleTeamDto>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            date: entity.date,
            time: entity.time,
            teams,
            description: entity.description,
            status: entity.status,
            created_at: format_system_time(entity.created_at),
            updated_at: format_system_time(entity.updated_at),
        }
    }
}
