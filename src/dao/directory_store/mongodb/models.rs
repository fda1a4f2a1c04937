use indexmap::IndexMap;
use mongodb::bson::{Binary, DateTime, Document, doc, spec::BinarySubtype};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::{
    ActivityEntity, ActivityKind, AnnouncementEntity, AnnouncementPriority, DailyTaskEntity,
    EmployeeEntity, EmployeeRole, EmployeeScoreEntity, EmployeeStatus, GameEntity,
    ScheduleStatus, ScheduledActivityEntity, TeamEntity, TeamScoreEntity, WorkforceTeamEntity,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoEmployeeDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    emp_id: String,
    name: String,
    designation: String,
    email: Option<String>,
    points: i64,
    role: EmployeeRole,
    status: EmployeeStatus,
    team_id: Option<Uuid>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<EmployeeEntity> for MongoEmployeeDocument {
    fn from(value: EmployeeEntity) -> Self {
        Self {
            id: value.id,
            emp_id: value.emp_id,
            name: value.name,
            designation: value.designation,
            email: value.email,
            points: value.points,
            role: value.role,
            status: value.status,
            team_id: value.team_id,
            created_at: DateTime::from_system_time(value.created_at),
            updated_at: DateTime::from_system_time(value.updated_at),
        }
    }
}

impl From<MongoEmployeeDocument> for EmployeeEntity {
    fn from(value: MongoEmployeeDocument) -> Self {
        Self {
            id: value.id,
            emp_id: value.emp_id,
            name: value.name,
            designation: value.designation,
            email: value.email,
            points: value.points,
            role: value.role,
            status: value.status,
            team_id: value.team_id,
            created_at: value.created_at.to_system_time(),
            updated_at: value.updated_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoTeamDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    points: i64,
    members: Vec<Uuid>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<TeamEntity> for MongoTeamDocument {
    fn from(value: TeamEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            points: value.points,
            members: value.members,
            created_at: DateTime::from_system_time(value.created_at),
            updated_at: DateTime::from_system_time(value.updated_at),
        }
    }
}

impl From<MongoTeamDocument> for TeamEntity {
    fn from(value: MongoTeamDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            points: value.points,
            members: value.members,
            created_at: value.created_at.to_system_time(),
            updated_at: value.updated_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGameDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    date: String,
    team_scores: Vec<TeamScoreEntity>,
    employee_scores: Vec<EmployeeScoreEntity>,
    recorded_at: DateTime,
}

impl From<GameEntity> for MongoGameDocument {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            date: value.date,
            team_scores: value.team_scores,
            employee_scores: value.employee_scores,
            recorded_at: DateTime::from_system_time(value.recorded_at),
        }
    }
}

impl From<MongoGameDocument> for GameEntity {
    fn from(value: MongoGameDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            date: value.date,
            team_scores: value.team_scores,
            employee_scores: value.employee_scores,
            recorded_at: value.recorded_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoScheduledActivityDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    date: String,
    time: String,
    teams: Vec<Uuid>,
    description: String,
    status: ScheduleStatus,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<ScheduledActivityEntity> for MongoScheduledActivityDocument {
    fn from(value: ScheduledActivityEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            date: value.date,
            time: value.time,
            teams: value.teams,
            description: value.description,
            status: value.status,
            created_at: DateTime::from_system_time(value.created_at),
            updated_at: DateTime::from_system_time(value.updated_at),
        }
    }
}

impl From<MongoScheduledActivityDocument> for ScheduledActivityEntity {
    fn from(value: MongoScheduledActivityDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            date: value.date,
            time: value.time,
            teams: value.teams,
            description: value.description,
            status: value.status,
            created_at: value.created_at.to_system_time(),
            updated_at: value.updated_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoWorkforceTeamDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    description: String,
    members: Vec<Uuid>,
    lead: Option<Uuid>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<WorkforceTeamEntity> for MongoWorkforceTeamDocument {
    fn from(value: WorkforceTeamEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            members: value.members,
            lead: value.lead,
            created_at: DateTime::from_system_time(value.created_at),
            updated_at: DateTime::from_system_time(value.updated_at),
        }
    }
}

impl From<MongoWorkforceTeamDocument> for WorkforceTeamEntity {
    fn from(value: MongoWorkforceTeamDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            members: value.members,
            lead: value.lead,
            created_at: value.created_at.to_system_time(),
            updated_at: value.updated_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoAnnouncementDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    title: String,
    content: String,
    priority: AnnouncementPriority,
    author: String,
    #[serde(default)]
    reactions: IndexMap<String, Vec<Uuid>>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<AnnouncementEntity> for MongoAnnouncementDocument {
    fn from(value: AnnouncementEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            priority: value.priority,
            author: value.author,
            reactions: value.reactions,
            created_at: DateTime::from_system_time(value.created_at),
            updated_at: DateTime::from_system_time(value.updated_at),
        }
    }
}

impl From<MongoAnnouncementDocument> for AnnouncementEntity {
    fn from(value: MongoAnnouncementDocument) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            priority: value.priority,
            author: value.author,
            reactions: value.reactions,
            created_at: value.created_at.to_system_time(),
            updated_at: value.updated_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoDailyTaskDocument {
    /// The calendar date doubles as the primary key.
    #[serde(rename = "_id")]
    date: String,
    ott: Vec<String>,
    ott_submitted: bool,
    mit: Option<String>,
    mit_submitted: bool,
    updated_at: DateTime,
}

impl From<DailyTaskEntity> for MongoDailyTaskDocument {
    fn from(value: DailyTaskEntity) -> Self {
        Self {
            date: value.date,
            ott: value.ott,
            ott_submitted: value.ott_submitted,
            mit: value.mit,
            mit_submitted: value.mit_submitted,
            updated_at: DateTime::from_system_time(value.updated_at),
        }
    }
}

impl From<MongoDailyTaskDocument> for DailyTaskEntity {
    fn from(value: MongoDailyTaskDocument) -> Self {
        Self {
            date: value.date,
            ott: value.ott,
            ott_submitted: value.ott_submitted,
            mit: value.mit,
            mit_submitted: value.mit_submitted,
            updated_at: value.updated_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoActivityDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    kind: ActivityKind,
    actor: String,
    action: String,
    recorded_at: DateTime,
}

impl From<ActivityEntity> for MongoActivityDocument {
    fn from(value: ActivityEntity) -> Self {
        Self {
            id: value.id,
            kind: value.kind,
            actor: value.actor,
            action: value.action,
            recorded_at: DateTime::from_system_time(value.recorded_at),
        }
    }
}

impl From<MongoActivityDocument> for ActivityEntity {
    fn from(value: MongoActivityDocument) -> Self {
        Self {
            id: value.id,
            kind: value.kind,
            actor: value.actor,
            action: value.action,
            recorded_at: value.recorded_at.to_system_time(),
        }
    }
}

pub(super) fn uuid_as_binary(id: Uuid) -> Binary {
    Binary {
        subtype: BinarySubtype::Uuid,
        bytes: id.into_bytes().to_vec(),
    }
}

pub(super) fn doc_id(id: Uuid) -> Document {
    doc! {"_id": uuid_as_binary(id)}
}
