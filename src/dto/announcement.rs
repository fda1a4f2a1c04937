//! Announcement payloads.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{AnnouncementEntity, AnnouncementPriority},
    dto::{format_system_time, validation::validate_not_blank},
};

/// Payload publishing a new announcement.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateAnnouncementRequest {
    #[validate(custom(function = validate_not_blank))]
    pub title: String,
    #[validate(custom(function = validate_not_blank))]
    pub content: String,
    /// Defaults to `medium` when omitted.
    #[serde(default)]
    pub priority: Option<AnnouncementPriority>,
    /// Defaults to the session actor when omitted.
    #[serde(default)]
    pub author: Option<String>,
}

/// Payload editing an announcement. Absent fields keep their value.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateAnnouncementRequest {
    #[validate(custom(function = validate_not_blank))]
    pub title: Option<String>,
    #[validate(custom(function = validate_not_blank))]
    pub content: Option<String>,
    pub priority: Option<AnnouncementPriority>,
}

/// Payload toggling one employee's emoji reaction.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ReactionRequest {
    #[validate(custom(function = validate_not_blank))]
    pub emoji: String,
    pub employee_id: Uuid,
}

/// Announcement projection returned by the REST API.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnnouncementDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: AnnouncementPriority,
    pub author: String,
    /// Employee ids that reacted, keyed by emoji. Emojis nobody uses are absent.
    pub reactions: IndexMap<String, Vec<Uuid>>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AnnouncementEntity> for AnnouncementDto {
    fn from(entity: AnnouncementEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            priority: entity.priority,
            author: entity.author,
            reactions: entity.reactions,
            created_at: format_system_time(entity.created_at),
            updated_at: format_system_time(entity.updated_at),
        }
    }
}
