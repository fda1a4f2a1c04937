//! Audit trail payloads.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{ActivityEntity, ActivityKind},
    dto::{format_system_time, validation::validate_not_blank},
};

/// Payload recording an audit entry directly.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RecordActivityRequest {
    /// Defaults to `user` when omitted.
    #[serde(default)]
    pub kind: Option<ActivityKind>,
    /// Defaults to the session actor when omitted.
    #[serde(default)]
    pub actor: Option<String>,
    #[validate(custom(function = validate_not_blank))]
    pub action: String,
}

/// Query parameters for the paginated audit trail listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ActivityPageQuery {
    /// 1-based page number, defaults to 1.
    pub page: Option<u64>,
    /// Page size, defaults to 100.
    pub limit: Option<u64>,
}

/// Audit entry returned by the REST API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityDto {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub actor: String,
    pub action: String,
    pub recorded_at: String,
}

impl From<ActivityEntity> for ActivityDto {
    fn from(entity: ActivityEntity) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
            actor: entity.actor,
            action: entity.action,
            recorded_at: format_system_time(entity.recorded_at),
        }
    }
}

/// One page of the audit trail, newest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityPageDto {
    pub activities: Vec<ActivityDto>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total: u64,
}
