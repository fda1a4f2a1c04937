//! Wire-level request and response types for the REST API.

use std::time::SystemTime;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod activity;
pub mod admin;
pub mod announcement;
pub mod common;
pub mod daily;
pub mod employee;
pub mod game;
pub mod health;
pub mod schedule;
pub mod team;
pub mod validation;
pub mod workforce;

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
