//! Audit trail operations.
//!
//! Every mutating operation in the other services appends an entry here.
//! Appends are best effort: a failed audit write is logged and swallowed so
//! it never fails the operation that triggered it.

use std::time::SystemTime;

use tracing::warn;
use uuid::Uuid;

use crate::dao::models::{ActivityEntity, ActivityKind};
use crate::dto::activity::{ActivityDto, ActivityPageDto, ActivityPageQuery, RecordActivityRequest};
use crate::error::ServiceError;
use crate::services::session::SessionContext;
use crate::state::SharedState;

/// Page size applied when the client does not ask for one.
const DEFAULT_PAGE_SIZE: u64 = 100;

/// Return one page of the audit trail, newest entries first.
pub async fn list_activities(
    state: &SharedState,
    query: ActivityPageQuery,
) -> Result<ActivityPageDto, ServiceError> {
    let store = state.require_store().await?;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let skip = (page - 1) * limit;

    let entries = store.list_activities(skip, limit as i64).await?;
    let total = store.count_activities().await?;

    Ok(ActivityPageDto {
        activities: entries.into_iter().map(ActivityDto::from).collect(),
        total_pages: total.div_ceil(limit),
        current_page: page,
        total,
    })
}

/// Record an audit entry supplied directly by a client.
pub async fn record_activity(
    state: &SharedState,
    session: &SessionContext,
    payload: RecordActivityRequest,
) -> Result<ActivityDto, ServiceError> {
    let store = state.require_store().await?;

    let entry = ActivityEntity {
        id: Uuid::new_v4(),
        kind: payload.kind.unwrap_or(ActivityKind::User),
        actor: payload
            .actor
            .map(|actor| actor.trim().to_owned())
            .filter(|actor| !actor.is_empty())
            .unwrap_or_else(|| session.actor.clone()),
        action: payload.action.trim().to_owned(),
        recorded_at: SystemTime::now(),
    };

    store.insert_activity(entry.clone()).await?;
    Ok(ActivityDto::from(entry))
}

/// Append an audit entry on behalf of another service.
///
/// Failures are logged and swallowed so audit writes never fail the
/// operation that produced them.
pub async fn log(state: &SharedState, kind: ActivityKind, actor: &str, action: String) {
    let Ok(store) = state.require_store().await else {
        warn!(action = %action, "skipping audit entry, storage unavailable");
        return;
    };

    let entry = ActivityEntity {
        id: Uuid::new_v4(),
        kind,
        actor: actor.to_owned(),
        action,
        recorded_at: SystemTime::now(),
    };

    if let Err(err) = store.insert_activity(entry).await {
        warn!(error = %err, "failed to append audit entry");
    }
}
