//! Payloads shared by several route groups.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic acknowledgement returned by mutating endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Wrap a human-readable confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Overwrite a point tally with an absolute value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetPointsRequest {
    pub points: i64,
}

/// Adjust a point tally by a signed delta.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AwardPointsRequest {
    pub points: i64,
}
