use std::{sync::Arc, time::SystemTime};

use futures::future::BoxFuture;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dao::{
    directory_store::DirectoryStore,
    models::{
        ActivityEntity, AnnouncementEntity, DailyTaskEntity, EmployeeEntity, EmployeeRole,
        GameEntity, ScheduledActivityEntity, TeamEntity, WorkforceTeamEntity,
    },
    storage::{StorageError, StorageResult},
};

/// Volatile [`DirectoryStore`] backed by in-process maps.
#[derive(Clone, Default)]
pub struct MemoryDirectoryStore {
    inner: Arc<RwLock<Registries>>,
}

#[derive(Default)]
struct Registries {
    employees: IndexMap<Uuid, EmployeeEntity>,
    teams: IndexMap<Uuid, TeamEntity>,
    games: Vec<GameEntity>,
    scheduled: IndexMap<Uuid, ScheduledActivityEntity>,
    workforce: IndexMap<Uuid, WorkforceTeamEntity>,
    announcements: IndexMap<Uuid, AnnouncementEntity>,
    daily: IndexMap<String, DailyTaskEntity>,
    activities: Vec<ActivityEntity>,
}

impl MemoryDirectoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn save_employee(&self, employee: EmployeeEntity) -> StorageResult<()> {
        let mut registries = self.inner.write().await;
        let duplicate = registries
            .employees
            .values()
            .any(|existing| existing.id != employee.id && existing.emp_id == employee.emp_id);
        if duplicate {
            return Err(StorageError::conflict(format!(
                "employee ID `{}` already exists",
                employee.emp_id
            )));
        }
        registries.employees.insert(employee.id, employee);
        Ok(())
    }

    async fn save_team(&self, team: TeamEntity) -> StorageResult<()> {
        let mut registries = self.inner.write().await;
        let duplicate = registries
            .teams
            .values()
            .any(|existing| existing.id != team.id && existing.name == team.name);
        if duplicate {
            return Err(StorageError::conflict(format!(
                "team name `{}` already exists",
                team.name
            )));
        }
        registries.teams.insert(team.id, team);
        Ok(())
    }

    async fn increment_employee_points(&self, id: Uuid, delta: i64) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.employees.get_mut(&id) {
            Some(employee) => {
                employee.points += delta;
                employee.updated_at = SystemTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_employee_points(&self, id: Uuid, points: i64) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.employees.get_mut(&id) {
            Some(employee) => {
                employee.points = points;
                employee.updated_at = SystemTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_employee_assignment(
        &self,
        id: Uuid,
        team_id: Option<Uuid>,
        role: EmployeeRole,
    ) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.employees.get_mut(&id) {
            Some(employee) => {
                employee.team_id = team_id;
                employee.role = role;
                employee.updated_at = SystemTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear_team_assignments(&self, team_id: Uuid) -> StorageResult<u64> {
        let mut registries = self.inner.write().await;
        let mut cleared = 0;
        for employee in registries.employees.values_mut() {
            if employee.team_id == Some(team_id) {
                employee.team_id = None;
                employee.role = EmployeeRole::Member;
                employee.updated_at = SystemTime::now();
                cleared += 1;
            }
        }
        Ok(cleared)
    }

    async fn increment_team_points(&self, id: Uuid, delta: i64) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.teams.get_mut(&id) {
            Some(team) => {
                team.points += delta;
                team.updated_at = SystemTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_team_points(&self, id: Uuid, points: i64) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.teams.get_mut(&id) {
            Some(team) => {
                team.points = points;
                team.updated_at = SystemTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_team_member(&self, team_id: Uuid, employee_id: Uuid) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.teams.get_mut(&team_id) {
            Some(team) => {
                if !team.members.contains(&employee_id) {
                    team.members.push(employee_id);
                    team.updated_at = SystemTime::now();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_team_member(&self, team_id: Uuid, employee_id: Uuid) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.teams.get_mut(&team_id) {
            Some(team) => {
                team.members.retain(|member| *member != employee_id);
                team.updated_at = SystemTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_workforce_member(&self, team_id: Uuid, employee_id: Uuid) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.workforce.get_mut(&team_id) {
            Some(team) => {
                if !team.members.contains(&employee_id) {
                    team.members.push(employee_id);
                    team.updated_at = SystemTime::now();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_workforce_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> StorageResult<bool> {
        let mut registries = self.inner.write().await;
        match registries.workforce.get_mut(&team_id) {
            Some(team) => {
                team.members.retain(|member| *member != employee_id);
                if team.lead == Some(employee_id) {
                    team.lead = None;
                }
                team.updated_at = SystemTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn detach_employee_from_workforce(&self, employee_id: Uuid) -> StorageResult<u64> {
        let mut registries = self.inner.write().await;
        let mut touched = 0;
        for team in registries.workforce.values_mut() {
            let was_member = team.members.contains(&employee_id);
            let was_lead = team.lead == Some(employee_id);
            if was_member || was_lead {
                team.members.retain(|member| *member != employee_id);
                if was_lead {
                    team.lead = None;
                }
                team.updated_at = SystemTime::now();
                touched += 1;
            }
        }
        Ok(touched)
    }

    async fn list_games(&self) -> StorageResult<Vec<GameEntity>> {
        let registries = self.inner.read().await;
        let mut games = registries.games.clone();
        games.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.recorded_at.cmp(&a.recorded_at))
        });
        Ok(games)
    }

    async fn list_scheduled_activities(&self) -> StorageResult<Vec<ScheduledActivityEntity>> {
        let registries = self.inner.read().await;
        let mut activities = registries.scheduled.values().cloned().collect::<Vec<_>>();
        activities.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        Ok(activities)
    }

    async fn list_announcements(&self) -> StorageResult<Vec<AnnouncementEntity>> {
        let registries = self.inner.read().await;
        let mut announcements = registries
            .announcements
            .values()
            .cloned()
            .collect::<Vec<_>>();
        announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(announcements)
    }

    async fn list_activities(&self, skip: u64, limit: i64) -> StorageResult<Vec<ActivityEntity>> {
        let registries = self.inner.read().await;
        let mut rows = registries.activities.clone();
        rows.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(rows
            .into_iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

impl DirectoryStore for MemoryDirectoryStore {
    fn save_employee(&self, employee: EmployeeEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_employee(employee).await })
    }

    fn find_employee(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<EmployeeEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.employees.get(&id).cloned())
        })
    }

    fn find_employee_by_emp_id(
        &self,
        emp_id: String,
    ) -> BoxFuture<'static, StorageResult<Option<EmployeeEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries
                .employees
                .values()
                .find(|employee| employee.emp_id == emp_id)
                .cloned())
        })
    }

    fn list_employees(&self) -> BoxFuture<'static, StorageResult<Vec<EmployeeEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.employees.values().cloned().collect())
        })
    }

    fn delete_employee(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            Ok(registries.employees.shift_remove(&id).is_some())
        })
    }

    fn increment_employee_points(
        &self,
        id: Uuid,
        delta: i64,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.increment_employee_points(id, delta).await })
    }

    fn set_employee_points(
        &self,
        id: Uuid,
        points: i64,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.set_employee_points(id, points).await })
    }

    fn set_employee_assignment(
        &self,
        id: Uuid,
        team_id: Option<Uuid>,
        role: EmployeeRole,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.set_employee_assignment(id, team_id, role).await })
    }

    fn clear_team_assignments(&self, team_id: Uuid) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.clear_team_assignments(team_id).await })
    }

    fn save_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_team(team).await })
    }

    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.teams.get(&id).cloned())
        })
    }

    fn find_team_by_name(
        &self,
        name: String,
    ) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries
                .teams
                .values()
                .find(|team| team.name == name)
                .cloned())
        })
    }

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.teams.values().cloned().collect())
        })
    }

    fn delete_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            Ok(registries.teams.shift_remove(&id).is_some())
        })
    }

    fn increment_team_points(
        &self,
        id: Uuid,
        delta: i64,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.increment_team_points(id, delta).await })
    }

    fn set_team_points(&self, id: Uuid, points: i64) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.set_team_points(id, points).await })
    }

    fn add_team_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.add_team_member(team_id, employee_id).await })
    }

    fn remove_team_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.remove_team_member(team_id, employee_id).await })
    }

    fn insert_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            registries.games.push(game);
            Ok(())
        })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await })
    }

    fn save_scheduled_activity(
        &self,
        activity: ScheduledActivityEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            registries.scheduled.insert(activity.id, activity);
            Ok(())
        })
    }

    fn find_scheduled_activity(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<ScheduledActivityEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.scheduled.get(&id).cloned())
        })
    }

    fn list_scheduled_activities(
        &self,
    ) -> BoxFuture<'static, StorageResult<Vec<ScheduledActivityEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_scheduled_activities().await })
    }

    fn delete_scheduled_activity(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            Ok(registries.scheduled.shift_remove(&id).is_some())
        })
    }

    fn save_workforce_team(
        &self,
        team: WorkforceTeamEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            registries.workforce.insert(team.id, team);
            Ok(())
        })
    }

    fn find_workforce_team(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<WorkforceTeamEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.workforce.get(&id).cloned())
        })
    }

    fn list_workforce_teams(
        &self,
    ) -> BoxFuture<'static, StorageResult<Vec<WorkforceTeamEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.workforce.values().cloned().collect())
        })
    }

    fn delete_workforce_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            Ok(registries.workforce.shift_remove(&id).is_some())
        })
    }

    fn add_workforce_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.add_workforce_member(team_id, employee_id).await })
    }

    fn remove_workforce_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.remove_workforce_member(team_id, employee_id).await })
    }

    fn detach_employee_from_workforce(
        &self,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.detach_employee_from_workforce(employee_id).await })
    }

    fn save_announcement(
        &self,
        announcement: AnnouncementEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            registries.announcements.insert(announcement.id, announcement);
            Ok(())
        })
    }

    fn find_announcement(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<AnnouncementEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.announcements.get(&id).cloned())
        })
    }

    fn list_announcements(&self) -> BoxFuture<'static, StorageResult<Vec<AnnouncementEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_announcements().await })
    }

    fn delete_announcement(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            Ok(registries.announcements.shift_remove(&id).is_some())
        })
    }

    fn save_daily_record(&self, record: DailyTaskEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            registries.daily.insert(record.date.clone(), record);
            Ok(())
        })
    }

    fn find_daily_record(
        &self,
        date: String,
    ) -> BoxFuture<'static, StorageResult<Option<DailyTaskEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.daily.get(&date).cloned())
        })
    }

    fn list_daily_records(&self) -> BoxFuture<'static, StorageResult<Vec<DailyTaskEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            let mut records: Vec<DailyTaskEntity> = registries.daily.values().cloned().collect();
            records.sort_by(|a, b| a.date.cmp(&b.date));
            Ok(records)
        })
    }

    fn insert_activity(&self, activity: ActivityEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let mut registries = store.inner.write().await;
            registries.activities.push(activity);
            Ok(())
        })
    }

    fn list_activities(
        &self,
        skip: u64,
        limit: i64,
    ) -> BoxFuture<'static, StorageResult<Vec<ActivityEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_activities(skip, limit).await })
    }

    fn count_activities(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move {
            let registries = store.inner.read().await;
            Ok(registries.activities.len() as u64)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
