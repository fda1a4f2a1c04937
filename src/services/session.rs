//! Resolves who is performing a request.
//!
//! The frontend sends the acting user's display name in the `x-actor`
//! header. Requests without it are attributed to the configured default
//! author so every audit entry carries a name.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::state::SharedState;

/// Header carrying the acting user's display name.
const ACTOR_HEADER: &str = "x-actor";

/// The acting user attached to the current request.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Display name used for audit entries and default authorship.
    pub actor: String,
}

impl FromRequestParts<SharedState> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| state.config().default_author.clone());

        Ok(Self { actor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{extract::FromRequestParts, http::Request};

    use crate::config::AppConfig;
    use crate::state::AppState;

    fn test_state() -> SharedState {
        AppState::new(AppConfig {
            ott_cutoff_hour: 20,
            mit_open_hour: 6,
            mit_close_hour: 22,
            utc_offset_hours: 0,
            default_author: "Admin".to_owned(),
        })
    }

    #[tokio::test]
    async fn test_actor_header_is_used_when_present() {
        let state = test_state();
        let request = Request::builder()
            .header("x-actor", "Priya")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let session = SessionContext::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(session.actor, "Priya");
    }

    #[tokio::test]
    async fn test_blank_header_falls_back_to_default_author() {
        let state = test_state();
        let request = Request::builder().header("x-actor", "   ").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let session = SessionContext::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(session.actor, "Admin");
    }

    #[tokio::test]
    async fn test_missing_header_falls_back_to_default_author() {
        let state = test_state();
        let request = Request::builder().body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let session = SessionContext::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(session.actor, "Admin");
    }
}
