//! Daily task planner payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::DailyTaskEntity,
    dto::{format_system_time, validation::validate_not_blank},
};

/// Payload submitting tomorrow's task list.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SubmitOttRequest {
    /// Up to three entries; at least one must be non-blank.
    #[validate(length(min = 1, max = 3))]
    pub tasks: Vec<String>,
}

/// Payload picking today's focus task.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SubmitMitRequest {
    /// Must match one of yesterday's submitted entries.
    #[validate(custom(function = validate_not_blank))]
    pub task: String,
}

/// One planner record keyed by calendar day.
#[derive(Debug, Serialize, ToSchema)]
pub struct DailyTaskDto {
    pub date: String,
    /// Task list submitted the evening before this day.
    pub ott: Vec<String>,
    pub ott_submitted: bool,
    /// Focus task picked during this day, if any.
    pub mit: Option<String>,
    pub mit_submitted: bool,
    pub updated_at: String,
}

impl From<DailyTaskEntity> for DailyTaskDto {
    fn from(entity: DailyTaskEntity) -> Self {
        Self {
            date: entity.date,
            ott: entity.ott,
            ott_submitted: entity.ott_submitted,
            mit: entity.mit,
            mit_submitted: entity.mit_submitted,
            updated_at: format_system_time(entity.updated_at),
        }
    }
}
