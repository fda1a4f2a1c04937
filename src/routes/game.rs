use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::game::{GameDto, RecordGameRequest},
    error::AppError,
    services::{game_service, session::SessionContext},
    state::SharedState,
};

/// Routes handling the game ledger.
pub fn router() -> Router<SharedState> {
    Router::new().route("/games", get(list_games).post(record_game))
}

/// List every recorded game, newest first.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    responses(
        (status = 200, description = "All recorded games", body = Vec<GameDto>)
    )
)]
pub async fn list_games(State(state): State<SharedState>) -> Result<Json<Vec<GameDto>>, AppError> {
    let games = game_service::list_games(&state).await?;
    Ok(Json(games))
}

/// Record a finished game and apply its score lines.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    request_body = RecordGameRequest,
    responses(
        (status = 200, description = "Game recorded", body = GameDto)
    )
)]
pub async fn record_game(
    State(state): State<SharedState>,
    session: SessionContext,
    Json(payload): Json<RecordGameRequest>,
) -> Result<Json<GameDto>, AppError> {
    payload.validate()?;
    let game = game_service::record_game(&state, &session, payload).await?;
    Ok(Json(game))
}
