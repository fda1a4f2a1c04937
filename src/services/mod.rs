/// Audit trail recording and paginated listing.
pub mod activity_service;
/// Maintenance operations that repair derived data.
pub mod admin_service;
/// Announcement board management and emoji reactions.
pub mod announcement_service;
/// Daily planner submissions and their time gates.
pub mod daily_task_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Employee registry management and point awards.
pub mod employee_service;
/// Game ledger recording and score application.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Scheduled activity management.
pub mod schedule_service;
/// Request actor resolution.
pub mod session;
/// Storage connection supervision and reconnection.
pub mod storage_supervisor;
/// Scoring team management and roster assignments.
pub mod team_service;
/// Organisational team management.
pub mod workforce_service;
