use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Role an employee holds inside their competitive team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum EmployeeRole {
    /// Regular team member without extra responsibilities.
    Member,
    /// Second in command of a team. At most one per team.
    #[serde(rename = "Vice Lead")]
    ViceLead,
    /// Leader of a team. At most one per team.
    #[serde(rename = "Team Lead")]
    TeamLead,
    /// Manager overseeing several teams.
    Manager,
    /// Administrator of the whole directory.
    Admin,
}

impl EmployeeRole {
    /// Human readable label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeRole::Member => "Member",
            EmployeeRole::ViceLead => "Vice Lead",
            EmployeeRole::TeamLead => "Team Lead",
            EmployeeRole::Manager => "Manager",
            EmployeeRole::Admin => "Admin",
        }
    }
}

/// Whether an employee is currently active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum EmployeeStatus {
    /// Employee is active and participates in games.
    Active,
    /// Employee left or is on a long leave.
    Inactive,
}

/// Lifecycle status of a scheduled activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleStatus {
    /// Activity is planned but has not started yet.
    Scheduled,
    /// Activity is currently running.
    InProgress,
    /// Activity finished normally.
    Completed,
    /// Activity was called off.
    Cancelled,
}

/// Importance level of an announcement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementPriority {
    /// Informational, no action expected.
    Low,
    /// Default priority.
    Medium,
    /// Should be read soon.
    High,
    /// Requires immediate attention.
    Urgent,
}

/// Category of an audit trail entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Changes to employee records.
    User,
    /// System-level events such as reconciliation runs.
    System,
    /// Game ledger events.
    Game,
    /// Team and workforce team changes.
    Team,
}

/// Canonical person record shared across layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeEntity {
    /// Stable identifier for the employee.
    pub id: Uuid,
    /// Human-readable employee identifier, unique across the registry.
    pub emp_id: String,
    /// Full display name.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Accumulated gamification points.
    pub points: i64,
    /// Role inside the competitive team, if any.
    pub role: EmployeeRole,
    /// Active/inactive flag.
    pub status: EmployeeStatus,
    /// Competitive team this employee belongs to. Authoritative side of membership.
    pub team_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last modification timestamp.
    pub updated_at: SystemTime,
}

/// Competitive team with an accumulated point total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamEntity {
    /// Stable identifier for the team.
    pub id: Uuid,
    /// Display name, unique across the registry.
    pub name: String,
    /// Accumulated point total.
    pub points: i64,
    /// Cached membership mirror. `EmployeeEntity::team_id` is the source of truth.
    pub members: Vec<Uuid>,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last modification timestamp.
    pub updated_at: SystemTime,
}

/// Points distributed to a team by a single game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamScoreEntity {
    /// Team receiving the points.
    pub team_id: Uuid,
    /// Signed point delta.
    pub points: i64,
}

/// Points distributed to an employee by a single game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeScoreEntity {
    /// Employee receiving the points.
    pub employee_id: Uuid,
    /// Signed point delta.
    pub points: i64,
}

/// Immutable ledger entry recording one point-awarding event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Primary key of the ledger entry.
    pub id: Uuid,
    /// Display name of the game or activity that awarded the points.
    pub name: String,
    /// Calendar date the game took place (`YYYY-MM-DD`).
    pub date: String,
    /// Per-team point deltas.
    pub team_scores: Vec<TeamScoreEntity>,
    /// Per-employee point deltas.
    pub employee_scores: Vec<EmployeeScoreEntity>,
    /// Timestamp the entry was recorded.
    pub recorded_at: SystemTime,
}

/// Calendar entry for an upcoming game or event. Never awards points by itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledActivityEntity {
    /// Stable identifier for the scheduled activity.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Start time (`HH:MM`).
    pub time: String,
    /// Teams expected to participate.
    pub teams: Vec<Uuid>,
    /// Free-text description.
    pub description: String,
    /// Lifecycle status.
    pub status: ScheduleStatus,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last modification timestamp.
    pub updated_at: SystemTime,
}

/// Non-competitive grouping with its own membership list and a single optional lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkforceTeamEntity {
    /// Stable identifier for the workforce team.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Member employees. Stored only on this side, unlike competitive teams.
    pub members: Vec<Uuid>,
    /// Optional lead employee.
    pub lead: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last modification timestamp.
    pub updated_at: SystemTime,
}

/// Announcement with emoji reactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnouncementEntity {
    /// Stable identifier for the announcement.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Importance level.
    pub priority: AnnouncementPriority,
    /// Author name recorded at creation time.
    pub author: String,
    /// Emoji to reacting employees. Never holds an empty member list.
    pub reactions: IndexMap<String, Vec<Uuid>>,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last modification timestamp.
    pub updated_at: SystemTime,
}

/// Per-date OTT/MIT planning record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyTaskEntity {
    /// Calendar date this record belongs to (`YYYY-MM-DD`), unique key.
    pub date: String,
    /// Up to three tasks submitted the prior evening for this date.
    pub ott: Vec<String>,
    /// Whether the OTT list has been submitted and locked.
    pub ott_submitted: bool,
    /// Single most-important task chosen for this date.
    pub mit: Option<String>,
    /// Whether the MIT choice has been submitted and locked.
    pub mit_submitted: bool,
    /// Last modification timestamp.
    pub updated_at: SystemTime,
}

/// Append-only audit trail row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntity {
    /// Primary key of the trail row.
    pub id: Uuid,
    /// Category of the event.
    pub kind: ActivityKind,
    /// Actor that triggered the event.
    pub actor: String,
    /// Free-text description of what happened.
    pub action: String,
    /// Timestamp the event was recorded.
    pub recorded_at: SystemTime,
}
