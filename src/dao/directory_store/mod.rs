pub mod memory;
#[cfg(feature = "mongo-store")]
pub mod mongodb;

use crate::dao::models::{
    ActivityEntity, AnnouncementEntity, DailyTaskEntity, EmployeeEntity, EmployeeRole, GameEntity,
    ScheduledActivityEntity, TeamEntity, WorkforceTeamEntity,
};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;
use uuid::Uuid;

/// Abstraction over the persistence layer for every directory registry.
///
/// Point increments and membership assignments are dedicated operations so
/// backends can perform them in place instead of replacing whole documents,
/// which would lose concurrent updates.
pub trait DirectoryStore: Send + Sync {
    // Employees.
    fn save_employee(&self, employee: EmployeeEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn find_employee(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<EmployeeEntity>>>;
    fn find_employee_by_emp_id(
        &self,
        emp_id: String,
    ) -> BoxFuture<'static, StorageResult<Option<EmployeeEntity>>>;
    fn list_employees(&self) -> BoxFuture<'static, StorageResult<Vec<EmployeeEntity>>>;
    fn delete_employee(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;
    fn increment_employee_points(
        &self,
        id: Uuid,
        delta: i64,
    ) -> BoxFuture<'static, StorageResult<bool>>;
    fn set_employee_points(&self, id: Uuid, points: i64)
    -> BoxFuture<'static, StorageResult<bool>>;
    fn set_employee_assignment(
        &self,
        id: Uuid,
        team_id: Option<Uuid>,
        role: EmployeeRole,
    ) -> BoxFuture<'static, StorageResult<bool>>;
    fn clear_team_assignments(&self, team_id: Uuid) -> BoxFuture<'static, StorageResult<u64>>;

    // Teams.
    fn save_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>>;
    fn find_team_by_name(
        &self,
        name: String,
    ) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>>;
    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>>;
    fn delete_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;
    fn increment_team_points(&self, id: Uuid, delta: i64)
    -> BoxFuture<'static, StorageResult<bool>>;
    fn set_team_points(&self, id: Uuid, points: i64) -> BoxFuture<'static, StorageResult<bool>>;
    fn add_team_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>>;
    fn remove_team_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>>;

    // Game ledger.
    fn insert_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;

    // Scheduled activities.
    fn save_scheduled_activity(
        &self,
        activity: ScheduledActivityEntity,
    ) -> BoxFuture<'static, StorageResult<()>>;
    fn find_scheduled_activity(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<ScheduledActivityEntity>>>;
    fn list_scheduled_activities(
        &self,
    ) -> BoxFuture<'static, StorageResult<Vec<ScheduledActivityEntity>>>;
    fn delete_scheduled_activity(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    // Workforce teams.
    fn save_workforce_team(
        &self,
        team: WorkforceTeamEntity,
    ) -> BoxFuture<'static, StorageResult<()>>;
    fn find_workforce_team(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<WorkforceTeamEntity>>>;
    fn list_workforce_teams(&self)
    -> BoxFuture<'static, StorageResult<Vec<WorkforceTeamEntity>>>;
    fn delete_workforce_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;
    fn add_workforce_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>>;
    fn remove_workforce_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>>;
    fn detach_employee_from_workforce(
        &self,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<u64>>;

    // Announcements.
    fn save_announcement(
        &self,
        announcement: AnnouncementEntity,
    ) -> BoxFuture<'static, StorageResult<()>>;
    fn find_announcement(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<AnnouncementEntity>>>;
    fn list_announcements(&self) -> BoxFuture<'static, StorageResult<Vec<AnnouncementEntity>>>;
    fn delete_announcement(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    // Daily task records.
    fn save_daily_record(&self, record: DailyTaskEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn find_daily_record(
        &self,
        date: String,
    ) -> BoxFuture<'static, StorageResult<Option<DailyTaskEntity>>>;
    fn list_daily_records(&self) -> BoxFuture<'static, StorageResult<Vec<DailyTaskEntity>>>;

    // Audit trail.
    fn insert_activity(&self, activity: ActivityEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn list_activities(
        &self,
        skip: u64,
        limit: i64,
    ) -> BoxFuture<'static, StorageResult<Vec<ActivityEntity>>>;
    fn count_activities(&self) -> BoxFuture<'static, StorageResult<u64>>;

    // Backend lifecycle.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
