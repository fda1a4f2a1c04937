use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        announcement::{
            AnnouncementDto, CreateAnnouncementRequest, ReactionRequest, UpdateAnnouncementRequest,
        },
        common::MessageResponse,
    },
    error::AppError,
    services::{announcement_service, session::SessionContext},
    state::SharedState,
};

/// Routes handling the announcement board.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/announcements",
            get(list_announcements).post(create_announcement),
        )
        .route(
            "/announcements/{id}",
            put(update_announcement).delete(delete_announcement),
        )
        .route("/announcements/{id}/reactions", post(react))
}

/// List every announcement, newest first.
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = "announcements",
    responses(
        (status = 200, description = "All announcements", body = Vec<AnnouncementDto>)
    )
)]
pub async fn list_announcements(
    State(state): State<SharedState>,
) -> Result<Json<Vec<AnnouncementDto>>, AppError> {
    let announcements = announcement_service::list_announcements(&state).await?;
    Ok(Json(announcements))
}

/// Publish a new announcement.
#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = "announcements",
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 200, description = "Announcement published", body = AnnouncementDto)
    )
)]
pub async fn create_announcement(
    State(state): State<SharedState>,
    session: SessionContext,
    Json(payload): Json<CreateAnnouncementRequest>,
) -> Result<Json<AnnouncementDto>, AppError> {
    payload.validate()?;
    let announcement =
        announcement_service::create_announcement(&state, &session, payload).await?;
    Ok(Json(announcement))
}

/// Edit an announcement.
#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    tag = "announcements",
    params(("id" = String, Path, description = "Identifier of the announcement")),
    request_body = UpdateAnnouncementRequest,
    responses(
        (status = 200, description = "Announcement updated", body = AnnouncementDto)
    )
)]
pub async fn update_announcement(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAnnouncementRequest>,
) -> Result<Json<AnnouncementDto>, AppError> {
    payload.validate()?;
    let announcement =
        announcement_service::update_announcement(&state, &session, id, payload).await?;
    Ok(Json(announcement))
}

/// Take an announcement down.
#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = "announcements",
    params(("id" = String, Path, description = "Identifier of the announcement")),
    responses(
        (status = 200, description = "Announcement deleted", body = MessageResponse)
    )
)]
pub async fn delete_announcement(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let outcome = announcement_service::delete_announcement(&state, &session, id).await?;
    Ok(Json(outcome))
}

/// Toggle one employee's emoji reaction.
#[utoipa::path(
    post,
    path = "/api/announcements/{id}/reactions",
    tag = "announcements",
    params(("id" = String, Path, description = "Identifier of the announcement")),
    request_body = ReactionRequest,
    responses(
        (status = 200, description = "Reaction toggled", body = AnnouncementDto)
    )
)]
pub async fn react(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReactionRequest>,
) -> Result<Json<AnnouncementDto>, AppError> {
    payload.validate()?;
    let announcement = announcement_service::react(&state, id, payload).await?;
    Ok(Json(announcement))
}
