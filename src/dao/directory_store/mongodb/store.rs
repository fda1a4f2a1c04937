use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::{Bson, DateTime, Document, doc},
    options::IndexOptions,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult, classify_write},
    models::{
        MongoActivityDocument, MongoAnnouncementDocument, MongoDailyTaskDocument,
        MongoEmployeeDocument, MongoGameDocument, MongoScheduledActivityDocument,
        MongoTeamDocument, MongoWorkforceTeamDocument, doc_id, uuid_as_binary,
    },
};
use crate::dao::{
    directory_store::DirectoryStore,
    models::{
        ActivityEntity, AnnouncementEntity, DailyTaskEntity, EmployeeEntity, EmployeeRole,
        GameEntity, ScheduledActivityEntity, TeamEntity, WorkforceTeamEntity,
    },
    storage::StorageResult,
};

const EMPLOYEE_COLLECTION_NAME: &str = "employees";
const TEAM_COLLECTION_NAME: &str = "teams";
const GAME_COLLECTION_NAME: &str = "games";
const SCHEDULE_COLLECTION_NAME: &str = "scheduled_activities";
const WORKFORCE_COLLECTION_NAME: &str = "workforce_teams";
const ANNOUNCEMENT_COLLECTION_NAME: &str = "announcements";
const DAILY_COLLECTION_NAME: &str = "daily_tasks";
const ACTIVITY_COLLECTION_NAME: &str = "activities";

/// MongoDB-backed [`DirectoryStore`] holding one collection per registry.
#[derive(Clone)]
pub struct MongoDirectoryStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    client: Client,
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.state.read().await;
            guard.database.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let (client, database) =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        let mut guard = self.state.write().await;
        guard.client = client;
        guard.database = database;
        Ok(())
    }
}

impl MongoDirectoryStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) =
            establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { client, database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        self.ensure_index(
            EMPLOYEE_COLLECTION_NAME,
            "employee_emp_id_idx",
            doc! {"emp_id": 1},
            true,
        )
        .await?;
        self.ensure_index(TEAM_COLLECTION_NAME, "team_name_idx", doc! {"name": 1}, true)
            .await?;
        self.ensure_index(GAME_COLLECTION_NAME, "game_date_idx", doc! {"date": 1}, false)
            .await?;
        self.ensure_index(
            ACTIVITY_COLLECTION_NAME,
            "activity_recorded_idx",
            doc! {"recorded_at": 1},
            false,
        )
        .await?;
        Ok(())
    }

    async fn ensure_index(
        &self,
        collection: &'static str,
        index: &'static str,
        keys: Document,
        unique: bool,
    ) -> MongoResult<()> {
        let database = self.database().await;
        let model = IndexModel::builder()
            .keys(keys)
            .options(
                IndexOptions::builder()
                    .name(Some(index.to_owned()))
                    .unique(Some(unique))
                    .build(),
            )
            .build();

        database
            .collection::<Document>(collection)
            .create_index(model)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection,
                index,
                source,
            })?;
        Ok(())
    }

    async fn database(&self) -> Database {
        let guard = self.inner.state.read().await;
        guard.database.clone()
    }

    async fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        let guard = self.inner.state.read().await;
        guard.database.collection::<T>(name)
    }

    // Employees.

    async fn save_employee(&self, employee: EmployeeEntity) -> MongoResult<()> {
        let id = employee.id;
        let document = MongoEmployeeDocument::from(employee);
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        collection
            .replace_one(doc_id(id), &document)
            .upsert(true)
            .await
            .map_err(|source| classify_write(EMPLOYEE_COLLECTION_NAME, source))?;
        Ok(())
    }

    async fn find_employee(&self, id: Uuid) -> MongoResult<Option<EmployeeEntity>> {
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        let document = collection
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?;
        Ok(document.map(EmployeeEntity::from))
    }

    async fn find_employee_by_emp_id(&self, emp_id: String) -> MongoResult<Option<EmployeeEntity>> {
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        let document = collection
            .find_one(doc! {"emp_id": emp_id})
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?;
        Ok(document.map(EmployeeEntity::from))
    }

    async fn list_employees(&self) -> MongoResult<Vec<EmployeeEntity>> {
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        let documents: Vec<MongoEmployeeDocument> = collection
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::List {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?;

        Ok(documents.into_iter().map(EmployeeEntity::from).collect())
    }

    async fn delete_employee(&self, id: Uuid) -> MongoResult<bool> {
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        let result = collection
            .delete_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }

    async fn increment_employee_points(&self, id: Uuid, delta: i64) -> MongoResult<bool> {
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        let update = doc! {
            "$inc": {"points": delta},
            "$set": {"updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_one(doc_id(id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.matched_count > 0)
    }

    async fn set_employee_points(&self, id: Uuid, points: i64) -> MongoResult<bool> {
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        let update = doc! {
            "$set": {"points": points, "updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_one(doc_id(id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.matched_count > 0)
    }

    async fn set_employee_assignment(
        &self,
        id: Uuid,
        team_id: Option<Uuid>,
        role: EmployeeRole,
    ) -> MongoResult<bool> {
        let team_value = match team_id {
            Some(team) => Bson::Binary(uuid_as_binary(team)),
            None => Bson::Null,
        };
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        let update = doc! {
            "$set": {
                "team_id": team_value,
                "role": role.label(),
                "updated_at": DateTime::now(),
            },
        };
        let outcome = collection
            .update_one(doc_id(id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.matched_count > 0)
    }

    async fn clear_team_assignments(&self, team_id: Uuid) -> MongoResult<u64> {
        let collection = self
            .collection::<MongoEmployeeDocument>(EMPLOYEE_COLLECTION_NAME)
            .await;

        let update = doc! {
            "$set": {
                "team_id": Bson::Null,
                "role": EmployeeRole::Member.label(),
                "updated_at": DateTime::now(),
            },
        };
        let outcome = collection
            .update_many(doc! {"team_id": uuid_as_binary(team_id)}, update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: EMPLOYEE_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.modified_count)
    }

    // Teams.

    async fn save_team(&self, team: TeamEntity) -> MongoResult<()> {
        let id = team.id;
        let document = MongoTeamDocument::from(team);
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        collection
            .replace_one(doc_id(id), &document)
            .upsert(true)
            .await
            .map_err(|source| classify_write(TEAM_COLLECTION_NAME, source))?;
        Ok(())
    }

    async fn find_team(&self, id: Uuid) -> MongoResult<Option<TeamEntity>> {
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        let document = collection
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?;
        Ok(document.map(TeamEntity::from))
    }

    async fn find_team_by_name(&self, name: String) -> MongoResult<Option<TeamEntity>> {
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        let document = collection
            .find_one(doc! {"name": name})
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?;
        Ok(document.map(TeamEntity::from))
    }

    async fn list_teams(&self) -> MongoResult<Vec<TeamEntity>> {
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        let documents: Vec<MongoTeamDocument> = collection
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::List {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?;

        Ok(documents.into_iter().map(TeamEntity::from).collect())
    }

    async fn delete_team(&self, id: Uuid) -> MongoResult<bool> {
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        let result = collection
            .delete_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }

    async fn increment_team_points(&self, id: Uuid, delta: i64) -> MongoResult<bool> {
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        let update = doc! {
            "$inc": {"points": delta},
            "$set": {"updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_one(doc_id(id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.matched_count > 0)
    }

    async fn set_team_points(&self, id: Uuid, points: i64) -> MongoResult<bool> {
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        let update = doc! {
            "$set": {"points": points, "updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_one(doc_id(id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.matched_count > 0)
    }

    async fn add_team_member(&self, team_id: Uuid, employee_id: Uuid) -> MongoResult<bool> {
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        let update = doc! {
            "$addToSet": {"members": uuid_as_binary(employee_id)},
            "$set": {"updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_one(doc_id(team_id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.matched_count > 0)
    }

    async fn remove_team_member(&self, team_id: Uuid, employee_id: Uuid) -> MongoResult<bool> {
        let collection = self.collection::<MongoTeamDocument>(TEAM_COLLECTION_NAME).await;

        let update = doc! {
            "$pull": {"members": uuid_as_binary(employee_id)},
            "$set": {"updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_one(doc_id(team_id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: TEAM_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.matched_count > 0)
    }

    // Game ledger.

    async fn insert_game(&self, game: GameEntity) -> MongoResult<()> {
        let document = MongoGameDocument::from(game);
        let collection = self.collection::<MongoGameDocument>(GAME_COLLECTION_NAME).await;

        collection
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: GAME_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    async fn list_games(&self) -> MongoResult<Vec<GameEntity>> {
        let collection = self.collection::<MongoGameDocument>(GAME_COLLECTION_NAME).await;

        let documents: Vec<MongoGameDocument> = collection
            .find(doc! {})
            .sort(doc! {"date": -1, "recorded_at": -1})
            .await
            .map_err(|source| MongoDaoError::List {
                collection: GAME_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: GAME_COLLECTION_NAME,
                source,
            })?;

        Ok(documents.into_iter().map(GameEntity::from).collect())
    }

    // Scheduled activities.

    async fn save_scheduled_activity(&self, activity: ScheduledActivityEntity) -> MongoResult<()> {
        let id = activity.id;
        let document = MongoScheduledActivityDocument::from(activity);
        let collection = self
            .collection::<MongoScheduledActivityDocument>(SCHEDULE_COLLECTION_NAME)
            .await;

        collection
            .replace_one(doc_id(id), &document)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: SCHEDULE_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    async fn find_scheduled_activity(
        &self,
        id: Uuid,
    ) -> MongoResult<Option<ScheduledActivityEntity>> {
        let collection = self
            .collection::<MongoScheduledActivityDocument>(SCHEDULE_COLLECTION_NAME)
            .await;

        let document = collection
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: SCHEDULE_COLLECTION_NAME,
                source,
            })?;
        Ok(document.map(ScheduledActivityEntity::from))
    }

    async fn list_scheduled_activities(&self) -> MongoResult<Vec<ScheduledActivityEntity>> {
        let collection = self
            .collection::<MongoScheduledActivityDocument>(SCHEDULE_COLLECTION_NAME)
            .await;

        let documents: Vec<MongoScheduledActivityDocument> = collection
            .find(doc! {})
            .sort(doc! {"date": 1, "time": 1})
            .await
            .map_err(|source| MongoDaoError::List {
                collection: SCHEDULE_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: SCHEDULE_COLLECTION_NAME,
                source,
            })?;

        Ok(documents
            .into_iter()
            .map(ScheduledActivityEntity::from)
            .collect())
    }

    async fn delete_scheduled_activity(&self, id: Uuid) -> MongoResult<bool> {
        let collection = self
            .collection::<MongoScheduledActivityDocument>(SCHEDULE_COLLECTION_NAME)
            .await;

        let result = collection
            .delete_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: SCHEDULE_COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }

    // Workforce teams.

    async fn save_workforce_team(&self, team: WorkforceTeamEntity) -> MongoResult<()> {
        let id = team.id;
        let document = MongoWorkforceTeamDocument::from(team);
        let collection = self
            .collection::<MongoWorkforceTeamDocument>(WORKFORCE_COLLECTION_NAME)
            .await;

        collection
            .replace_one(doc_id(id), &document)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    async fn find_workforce_team(&self, id: Uuid) -> MongoResult<Option<WorkforceTeamEntity>> {
        let collection = self
            .collection::<MongoWorkforceTeamDocument>(WORKFORCE_COLLECTION_NAME)
            .await;

        let document = collection
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;
        Ok(document.map(WorkforceTeamEntity::from))
    }

    async fn list_workforce_teams(&self) -> MongoResult<Vec<WorkforceTeamEntity>> {
        let collection = self
            .collection::<MongoWorkforceTeamDocument>(WORKFORCE_COLLECTION_NAME)
            .await;

        let documents: Vec<MongoWorkforceTeamDocument> = collection
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::List {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;

        Ok(documents.into_iter().map(WorkforceTeamEntity::from).collect())
    }

    async fn delete_workforce_team(&self, id: Uuid) -> MongoResult<bool> {
        let collection = self
            .collection::<MongoWorkforceTeamDocument>(WORKFORCE_COLLECTION_NAME)
            .await;

        let result = collection
            .delete_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }

    async fn add_workforce_member(&self, team_id: Uuid, employee_id: Uuid) -> MongoResult<bool> {
        let collection = self
            .collection::<MongoWorkforceTeamDocument>(WORKFORCE_COLLECTION_NAME)
            .await;

        let update = doc! {
            "$addToSet": {"members": uuid_as_binary(employee_id)},
            "$set": {"updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_one(doc_id(team_id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;
        Ok(outcome.matched_count > 0)
    }

    async fn remove_workforce_member(&self, team_id: Uuid, employee_id: Uuid) -> MongoResult<bool> {
        let collection = self
            .collection::<MongoWorkforceTeamDocument>(WORKFORCE_COLLECTION_NAME)
            .await;

        let update = doc! {
            "$pull": {"members": uuid_as_binary(employee_id)},
            "$set": {"updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_one(doc_id(team_id), update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;

        // A departing member also vacates the lead slot if they held it.
        let clear_lead = doc! {
            "$set": {"lead": Bson::Null, "updated_at": DateTime::now()},
        };
        collection
            .update_one(
                doc! {"_id": uuid_as_binary(team_id), "lead": uuid_as_binary(employee_id)},
                clear_lead,
            )
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;

        Ok(outcome.matched_count > 0)
    }

    async fn detach_employee_from_workforce(&self, employee_id: Uuid) -> MongoResult<u64> {
        let collection = self
            .collection::<MongoWorkforceTeamDocument>(WORKFORCE_COLLECTION_NAME)
            .await;

        // A team where the employee is both member and lead counts once.
        let filter = doc! {
            "$or": [
                {"members": uuid_as_binary(employee_id)},
                {"lead": uuid_as_binary(employee_id)},
            ],
        };
        let update = doc! {
            "$pull": {"members": uuid_as_binary(employee_id)},
            "$set": {"updated_at": DateTime::now()},
        };
        let outcome = collection
            .update_many(filter, update)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;

        let clear_lead = doc! {
            "$set": {"lead": Bson::Null, "updated_at": DateTime::now()},
        };
        collection
            .update_many(doc! {"lead": uuid_as_binary(employee_id)}, clear_lead)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: WORKFORCE_COLLECTION_NAME,
                source,
            })?;

        Ok(outcome.modified_count)
    }

    // Announcements.

    async fn save_announcement(&self, announcement: AnnouncementEntity) -> MongoResult<()> {
        let id = announcement.id;
        let document = MongoAnnouncementDocument::from(announcement);
        let collection = self
            .collection::<MongoAnnouncementDocument>(ANNOUNCEMENT_COLLECTION_NAME)
            .await;

        collection
            .replace_one(doc_id(id), &document)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: ANNOUNCEMENT_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    async fn find_announcement(&self, id: Uuid) -> MongoResult<Option<AnnouncementEntity>> {
        let collection = self
            .collection::<MongoAnnouncementDocument>(ANNOUNCEMENT_COLLECTION_NAME)
            .await;

        let document = collection
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: ANNOUNCEMENT_COLLECTION_NAME,
                source,
            })?;
        Ok(document.map(AnnouncementEntity::from))
    }

    async fn list_announcements(&self) -> MongoResult<Vec<AnnouncementEntity>> {
        let collection = self
            .collection::<MongoAnnouncementDocument>(ANNOUNCEMENT_COLLECTION_NAME)
            .await;

        let documents: Vec<MongoAnnouncementDocument> = collection
            .find(doc! {})
            .sort(doc! {"created_at": -1})
            .await
            .map_err(|source| MongoDaoError::List {
                collection: ANNOUNCEMENT_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: ANNOUNCEMENT_COLLECTION_NAME,
                source,
            })?;

        Ok(documents.into_iter().map(AnnouncementEntity::from).collect())
    }

    async fn delete_announcement(&self, id: Uuid) -> MongoResult<bool> {
        let collection = self
            .collection::<MongoAnnouncementDocument>(ANNOUNCEMENT_COLLECTION_NAME)
            .await;

        let result = collection
            .delete_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: ANNOUNCEMENT_COLLECTION_NAME,
                source,
            })?;
        Ok(result.deleted_count > 0)
    }

    // Daily task records.

    async fn save_daily_record(&self, record: DailyTaskEntity) -> MongoResult<()> {
        let date = record.date.clone();
        let document = MongoDailyTaskDocument::from(record);
        let collection = self
            .collection::<MongoDailyTaskDocument>(DAILY_COLLECTION_NAME)
            .await;

        collection
            .replace_one(doc! {"_id": date}, &document)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: DAILY_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    async fn find_daily_record(&self, date: String) -> MongoResult<Option<DailyTaskEntity>> {
        let collection = self
            .collection::<MongoDailyTaskDocument>(DAILY_COLLECTION_NAME)
            .await;

        let document = collection
            .find_one(doc! {"_id": date})
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: DAILY_COLLECTION_NAME,
                source,
            })?;
        Ok(document.map(DailyTaskEntity::from))
    }

    async fn list_daily_records(&self) -> MongoResult<Vec<DailyTaskEntity>> {
        let collection = self
            .collection::<MongoDailyTaskDocument>(DAILY_COLLECTION_NAME)
            .await;

        let documents: Vec<MongoDailyTaskDocument> = collection
            .find(doc! {})
            .sort(doc! {"_id": 1})
            .await
            .map_err(|source| MongoDaoError::List {
                collection: DAILY_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: DAILY_COLLECTION_NAME,
                source,
            })?;

        Ok(documents.into_iter().map(DailyTaskEntity::from).collect())
    }

    // Audit trail.

    async fn insert_activity(&self, activity: ActivityEntity) -> MongoResult<()> {
        let document = MongoActivityDocument::from(activity);
        let collection = self
            .collection::<MongoActivityDocument>(ACTIVITY_COLLECTION_NAME)
            .await;

        collection
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::Write {
                collection: ACTIVITY_COLLECTION_NAME,
                source,
            })?;
        Ok(())
    }

    async fn list_activities(&self, skip: u64, limit: i64) -> MongoResult<Vec<ActivityEntity>> {
        let collection = self
            .collection::<MongoActivityDocument>(ACTIVITY_COLLECTION_NAME)
            .await;

        let documents: Vec<MongoActivityDocument> = collection
            .find(doc! {})
            .sort(doc! {"recorded_at": -1})
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|source| MongoDaoError::List {
                collection: ACTIVITY_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: ACTIVITY_COLLECTION_NAME,
                source,
            })?;

        Ok(documents.into_iter().map(ActivityEntity::from).collect())
    }

    async fn count_activities(&self) -> MongoResult<u64> {
        let collection = self
            .collection::<MongoActivityDocument>(ACTIVITY_COLLECTION_NAME)
            .await;

        collection
            .count_documents(doc! {})
            .await
            .map_err(|source| MongoDaoError::Count {
                collection: ACTIVITY_COLLECTION_NAME,
                source,
            })
    }
}

impl DirectoryStore for MongoDirectoryStore {
    fn save_employee(&self, employee: EmployeeEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_employee(employee).await.map_err(Into::into) })
    }

    fn find_employee(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<EmployeeEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_employee(id).await.map_err(Into::into) })
    }

    fn find_employee_by_emp_id(
        &self,
        emp_id: String,
    ) -> BoxFuture<'static, StorageResult<Option<EmployeeEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_employee_by_emp_id(emp_id)
                .await
                .map_err(Into::into)
        })
    }

    fn list_employees(&self) -> BoxFuture<'static, StorageResult<Vec<EmployeeEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_employees().await.map_err(Into::into) })
    }

    fn delete_employee(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_employee(id).await.map_err(Into::into) })
    }

    fn increment_employee_points(
        &self,
        id: Uuid,
        delta: i64,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .increment_employee_points(id, delta)
                .await
                .map_err(Into::into)
        })
    }

    fn set_employee_points(
        &self,
        id: Uuid,
        points: i64,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .set_employee_points(id, points)
                .await
                .map_err(Into::into)
        })
    }

    fn set_employee_assignment(
        &self,
        id: Uuid,
        team_id: Option<Uuid>,
        role: EmployeeRole,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .set_employee_assignment(id, team_id, role)
                .await
                .map_err(Into::into)
        })
    }

    fn clear_team_assignments(&self, team_id: Uuid) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .clear_team_assignments(team_id)
                .await
                .map_err(Into::into)
        })
    }

    fn save_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_team(team).await.map_err(Into::into) })
    }

    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_team(id).await.map_err(Into::into) })
    }

    fn find_team_by_name(
        &self,
        name: String,
    ) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_team_by_name(name).await.map_err(Into::into) })
    }

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_teams().await.map_err(Into::into) })
    }

    fn delete_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_team(id).await.map_err(Into::into) })
    }

    fn increment_team_points(
        &self,
        id: Uuid,
        delta: i64,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .increment_team_points(id, delta)
                .await
                .map_err(Into::into)
        })
    }

    fn set_team_points(&self, id: Uuid, points: i64) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.set_team_points(id, points).await.map_err(Into::into) })
    }

    fn add_team_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .add_team_member(team_id, employee_id)
                .await
                .map_err(Into::into)
        })
    }

    fn remove_team_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .remove_team_member(team_id, employee_id)
                .await
                .map_err(Into::into)
        })
    }

    fn insert_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(game).await.map_err(Into::into) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn save_scheduled_activity(
        &self,
        activity: ScheduledActivityEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .save_scheduled_activity(activity)
                .await
                .map_err(Into::into)
        })
    }

    fn find_scheduled_activity(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<ScheduledActivityEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .find_scheduled_activity(id)
                .await
                .map_err(Into::into)
        })
    }

    fn list_scheduled_activities(
        &self,
    ) -> BoxFuture<'static, StorageResult<Vec<ScheduledActivityEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_scheduled_activities().await.map_err(Into::into) })
    }

    fn delete_scheduled_activity(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .delete_scheduled_activity(id)
                .await
                .map_err(Into::into)
        })
    }

    fn save_workforce_team(
        &self,
        team: WorkforceTeamEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_workforce_team(team).await.map_err(Into::into) })
    }

    fn find_workforce_team(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<WorkforceTeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_workforce_team(id).await.map_err(Into::into) })
    }

    fn list_workforce_teams(&self) -> BoxFuture<'static, StorageResult<Vec<WorkforceTeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_workforce_teams().await.map_err(Into::into) })
    }

    fn delete_workforce_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_workforce_team(id).await.map_err(Into::into) })
    }

    fn add_workforce_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .add_workforce_member(team_id, employee_id)
                .await
                .map_err(Into::into)
        })
    }

    fn remove_workforce_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .remove_workforce_member(team_id, employee_id)
                .await
                .map_err(Into::into)
        })
    }

    fn detach_employee_from_workforce(
        &self,
        employee_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .detach_employee_from_workforce(employee_id)
                .await
                .map_err(Into::into)
        })
    }

    fn save_announcement(
        &self,
        announcement: AnnouncementEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_announcement(announcement).await.map_err(Into::into) })
    }

    fn find_announcement(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<AnnouncementEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_announcement(id).await.map_err(Into::into) })
    }

    fn list_announcements(&self) -> BoxFuture<'static, StorageResult<Vec<AnnouncementEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_announcements().await.map_err(Into::into) })
    }

    fn delete_announcement(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_announcement(id).await.map_err(Into::into) })
    }

    fn save_daily_record(&self, record: DailyTaskEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_daily_record(record).await.map_err(Into::into) })
    }

    fn find_daily_record(
        &self,
        date: String,
    ) -> BoxFuture<'static, StorageResult<Option<DailyTaskEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_daily_record(date).await.map_err(Into::into) })
    }

    fn list_daily_records(&self) -> BoxFuture<'static, StorageResult<Vec<DailyTaskEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_daily_records().await.map_err(Into::into) })
    }

    fn insert_activity(&self, activity: ActivityEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_activity(activity).await.map_err(Into::into) })
    }

    fn list_activities(
        &self,
        skip: u64,
        limit: i64,
    ) -> BoxFuture<'static, StorageResult<Vec<ActivityEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .list_activities(skip, limit)
                .await
                .map_err(Into::into)
        })
    }

    fn count_activities(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.count_activities().await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
