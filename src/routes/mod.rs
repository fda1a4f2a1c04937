use axum::Router;

use crate::state::SharedState;

pub mod activity;
pub mod admin;
pub mod announcement;
pub mod daily;
pub mod docs;
pub mod employee;
pub mod game;
pub mod health;
pub mod schedule;
pub mod team;
pub mod workforce;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = employee::router()
        .merge(team::router())
        .merge(game::router())
        .merge(schedule::router())
        .merge(workforce::router())
        .merge(announcement::router())
        .merge(daily::router())
        .merge(activity::router())
        .merge(admin::router());

    let app_router = Router::new()
        .nest("/api", api_router)
        .merge(health::router());

    app_router.merge(docs::router()).with_state(state)
}
