use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::admin::ReconcileResponse,
    error::AppError,
    services::{admin_service, session::SessionContext},
    state::SharedState,
};

/// Maintenance endpoints.
pub fn router() -> Router<SharedState> {
    Router::new().route("/admin/reconcile", post(reconcile))
}

/// Re-derive point totals from the game ledger and rebuild team rosters.
#[utoipa::path(
    post,
    path = "/api/admin/reconcile",
    tag = "admin",
    responses(
        (status = 200, description = "Reconciliation outcome", body = ReconcileResponse)
    )
)]
pub async fn reconcile(
    State(state): State<SharedState>,
    session: SessionContext,
) -> Result<Json<ReconcileResponse>, AppError> {
    let outcome = admin_service::reconcile(&state, &session).await?;
    Ok(Json(outcome))
}
