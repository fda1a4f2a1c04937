//! Announcement board operations.

use std::time::SystemTime;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::{
    dao::models::{ActivityKind, AnnouncementEntity, AnnouncementPriority},
    dto::{
        announcement::{
            AnnouncementDto, CreateAnnouncementRequest, ReactionRequest, UpdateAnnouncementRequest,
        },
        common::MessageResponse,
    },
    error::ServiceError,
    services::{activity_service, session::SessionContext},
    state::SharedState,
};

/// List every announcement, newest first.
pub async fn list_announcements(state: &SharedState) -> Result<Vec<AnnouncementDto>, ServiceError> {
    let store = state.require_store().await?;

    let announcements = store.list_announcements().await?;
    Ok(announcements
        .into_iter()
        .map(AnnouncementDto::from)
        .collect())
}

/// Publish a new announcement. Authorship defaults to the session actor.
pub async fn create_announcement(
    state: &SharedState,
    session: &SessionContext,
    payload: CreateAnnouncementRequest,
) -> Result<AnnouncementDto, ServiceError> {
    let store = state.require_store().await?;

    let author = payload
        .author
        .map(|author| author.trim().to_owned())
        .filter(|author| !author.is_empty())
        .unwrap_or_else(|| session.actor.clone());

    let now = SystemTime::now();
    let announcement = AnnouncementEntity {
        id: Uuid::new_v4(),
        title: payload.title.trim().to_owned(),
        content: payload.content.trim().to_owned(),
        priority: payload.priority.unwrap_or(AnnouncementPriority::Medium),
        author,
        reactions: IndexMap::new(),
        created_at: now,
        updated_at: now,
    };
    store.save_announcement(announcement.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::System,
        &session.actor,
        format!("Posted announcement: {}", announcement.title),
    )
    .await;

    Ok(AnnouncementDto::from(announcement))
}

/// Edit an announcement. Absent fields keep their value.
pub async fn update_announcement(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: UpdateAnnouncementRequest,
) -> Result<AnnouncementDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(mut announcement) = store.find_announcement(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "announcement `{id}` not found"
        )));
    };

    if let Some(title) = payload.title {
        announcement.title = title.trim().to_owned();
    }
    if let Some(content) = payload.content {
        announcement.content = content.trim().to_owned();
    }
    if let Some(priority) = payload.priority {
        announcement.priority = priority;
    }
    announcement.updated_at = SystemTime::now();

    store.save_announcement(announcement.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::System,
        &session.actor,
        format!("Updated announcement: {}", announcement.title),
    )
    .await;

    Ok(AnnouncementDto::from(announcement))
}

/// Take an announcement down.
pub async fn delete_announcement(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
) -> Result<MessageResponse, ServiceError> {
    let store = state.require_store().await?;

    let Some(announcement) = store.find_announcement(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "announcement `{id}` not found"
        )));
    };

    store.delete_announcement(id).await?;

    activity_service::log(
        state,
        ActivityKind::System,
        &session.actor,
        format!("Deleted announcement: {}", announcement.title),
    )
    .await;

    Ok(MessageResponse::new("Announcement deleted successfully"))
}

/// Toggle one employee's emoji reaction.
///
/// Reacting twice in a row restores the original state. Emojis nobody
/// uses anymore are dropped from the map entirely.
pub async fn react(
    state: &SharedState,
    id: Uuid,
    payload: ReactionRequest,
) -> Result<AnnouncementDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(mut announcement) = store.find_announcement(id).await? else {
        return Err(ServiceError::NotFound(format!(
            "announcement `{id}` not found"
        )));
    };
    if store.find_employee(payload.employee_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "employee `{}` not found",
            payload.employee_id
        )));
    }

    let emoji = payload.emoji.trim().to_owned();
    let reactors = announcement.reactions.entry(emoji.clone()).or_default();
    if let Some(index) = reactors
        .iter()
        .position(|reactor| *reactor == payload.employee_id)
    {
        reactors.remove(index);
    } else {
        reactors.push(payload.employee_id);
    }
    if reactors.is_empty() {
        announcement.reactions.shift_remove(&emoji);
    }
    announcement.updated_at = SystemTime::now();

    store.save_announcement(announcement.clone()).await?;
    Ok(AnnouncementDto::from(announcement))
}
