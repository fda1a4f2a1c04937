//! End-to-end tests driving the HTTP API against the in-memory backend.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use reqwest::Client;
use serde_json::{Value, json};
use time::OffsetDateTime;

use teamhub_back::config::AppConfig;
use teamhub_back::dao::directory_store::{DirectoryStore, memory::MemoryDirectoryStore};
use teamhub_back::dao::models::DailyTaskEntity;
use teamhub_back::routes;
use teamhub_back::state::{AppState, SharedState, daily};

/// Test fixture spawning the full router on an ephemeral port.
struct TestFixture {
    client: Client,
    base_url: String,
    state: SharedState,
    store: Arc<MemoryDirectoryStore>,
}

impl TestFixture {
    /// Spawn a server whose submission windows never close, so the daily
    /// task tests only exercise the date checks.
    async fn new() -> Self {
        Self::with_config(AppConfig {
            ott_cutoff_hour: 24,
            mit_open_hour: 0,
            mit_close_hour: 24,
            utc_offset_hours: 0,
            default_author: "Admin".to_owned(),
        })
        .await
    }

    async fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let store = Arc::new(MemoryDirectoryStore::new());
        state.install_store(store.clone()).await;

        let app = routes::router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            state,
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Enroll an employee and return its projection.
    async fn create_employee(&self, emp_id: &str, name: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/api/employees"))
            .json(&json!({
                "emp_id": emp_id,
                "name": name,
                "designation": "Engineer"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }

    /// Create a scoring team and return its projection.
    async fn create_team(&self, name: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/api/teams"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }

    /// Fetch the employee list and return the row with the given id.
    async fn employee_by_id(&self, id: &str) -> Value {
        let resp = self
            .client
            .get(self.url("/api/employees"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let employees: Vec<Value> = resp.json().await.unwrap();
        employees
            .into_iter()
            .find(|employee| employee["id"] == id)
            .expect("employee not in list")
    }

    /// Fetch the team list and return the row with the given id.
    async fn team_by_id(&self, id: &str) -> Value {
        let resp = self
            .client
            .get(self.url("/api/teams"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let teams: Vec<Value> = resp.json().await.unwrap();
        teams
            .into_iter()
            .find(|team| team["id"] == id)
            .expect("team not in list")
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/healthcheck"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_degraded_mode_returns_503() {
    let fixture = TestFixture::new().await;
    fixture.state.clear_store().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/employees"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 503);

    let health = fixture
        .client
        .get(fixture.url("/healthcheck"))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), 200);
    let body: Value = health.json().await.unwrap();
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_employee_crud() {
    let fixture = TestFixture::new().await;

    let created = fixture.create_employee("E001", "Asha Rao").await;
    assert_eq!(created["emp_id"], "E001");
    assert_eq!(created["name"], "Asha Rao");
    assert_eq!(created["points"], 0);
    assert_eq!(created["role"], "Member");
    assert_eq!(created["status"], "Active");
    assert_eq!(created["team_id"], Value::Null);
    let id = created["id"].as_str().unwrap().to_owned();

    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/employees/{id}")))
        .json(&json!({
            "name": "Asha R.",
            "role": "Manager",
            "email": "asha@example.com"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let updated: Value = update_resp.json().await.unwrap();
    assert_eq!(updated["name"], "Asha R.");
    assert_eq!(updated["role"], "Manager");
    assert_eq!(updated["email"], "asha@example.com");

    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/employees/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);
    let delete_body: Value = delete_resp.json().await.unwrap();
    assert_eq!(delete_body["message"], "Employee deleted successfully");

    let list_resp = fixture
        .client
        .get(fixture.url("/api/employees"))
        .send()
        .await
        .unwrap();
    let remaining: Vec<Value> = list_resp.json().await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_duplicate_emp_id_rejected() {
    let fixture = TestFixture::new().await;
    fixture.create_employee("E001", "Asha Rao").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/employees"))
        .json(&json!({
            "emp_id": "E001",
            "name": "Another Person",
            "designation": "Engineer"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("E001"));
}

#[tokio::test]
async fn test_blank_employee_name_rejected() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/employees"))
        .json(&json!({
            "emp_id": "E001",
            "name": "   ",
            "designation": "Engineer"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_set_and_award_points_accumulate() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let id = employee["id"].as_str().unwrap().to_owned();

    let set_resp = fixture
        .client
        .patch(fixture.url(&format!("/api/employees/{id}/points")))
        .json(&json!({ "points": 40 }))
        .send()
        .await
        .unwrap();
    assert_eq!(set_resp.status(), 200);
    let after_set: Value = set_resp.json().await.unwrap();
    assert_eq!(after_set["points"], 40);

    let award_resp = fixture
        .client
        .post(fixture.url(&format!("/api/employees/{id}/points/award")))
        .json(&json!({ "points": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(award_resp.status(), 200);
    let after_award: Value = award_resp.json().await.unwrap();
    assert_eq!(after_award["points"], 45);

    let again_resp = fixture
        .client
        .post(fixture.url(&format!("/api/employees/{id}/points/award")))
        .json(&json!({ "points": 7 }))
        .send()
        .await
        .unwrap();
    let after_again: Value = again_resp.json().await.unwrap();
    assert_eq!(after_again["points"], 52);
}

#[tokio::test]
async fn test_negative_set_points_rejected() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let id = employee["id"].as_str().unwrap().to_owned();

    let resp = fixture
        .client
        .patch(fixture.url(&format!("/api/employees/{id}/points")))
        .json(&json!({ "points": -1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let unchanged = fixture.employee_by_id(&id).await;
    assert_eq!(unchanged["points"], 0);
}

#[tokio::test]
async fn test_direct_award_lands_in_ledger() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let id = employee["id"].as_str().unwrap().to_owned();

    let award_resp = fixture
        .client
        .post(fixture.url(&format!("/api/employees/{id}/points/award")))
        .json(&json!({ "points": 15 }))
        .send()
        .await
        .unwrap();
    assert_eq!(award_resp.status(), 200);

    let games_resp = fixture
        .client
        .get(fixture.url("/api/games"))
        .send()
        .await
        .unwrap();
    let games: Vec<Value> = games_resp.json().await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["name"], "Direct award to Asha Rao");
    assert_eq!(games[0]["employee_scores"][0]["employee_id"], id);
    assert_eq!(games[0]["employee_scores"][0]["points"], 15);
    assert!(games[0]["team_scores"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_employee_returns_404() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .patch(fixture.url(
            "/api/employees/00000000-0000-0000-0000-000000000000/points",
        ))
        .json(&json!({ "points": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_import_skips_existing_emp_ids() {
    let fixture = TestFixture::new().await;
    fixture.create_employee("E001", "Asha Rao").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/employees/import"))
        .json(&json!({
            "employees": [
                { "emp_id": "E001", "name": "Duplicate Row", "designation": "Engineer" },
                { "emp_id": "E002", "name": "Binh Tran", "designation": "Designer" },
                { "emp_id": "E003", "name": "Carla Diaz", "designation": "Analyst" }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Successfully imported 2 employees");
    assert_eq!(body["employees"].as_array().unwrap().len(), 2);
    assert_eq!(body["skipped"], json!(["E001"]));
    assert_eq!(body["employees"][0]["points"], 0);
    assert_eq!(body["employees"][0]["role"], "Member");
}

#[tokio::test]
async fn test_import_all_duplicates_rejected() {
    let fixture = TestFixture::new().await;
    fixture.create_employee("E001", "Asha Rao").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/employees/import"))
        .json(&json!({
            "employees": [
                { "emp_id": "E001", "name": "Duplicate Row", "designation": "Engineer" }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_duplicate_team_name_rejected() {
    let fixture = TestFixture::new().await;
    fixture.create_team("Alpha").await;

    let resp = fixture
        .client
        .post(fixture.url("/api/teams"))
        .json(&json!({ "name": "Alpha" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn test_assignment_moves_employee_between_teams() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let employee_id = employee["id"].as_str().unwrap().to_owned();
    let alpha = fixture.create_team("Alpha").await;
    let alpha_id = alpha["id"].as_str().unwrap().to_owned();
    let beta = fixture.create_team("Beta").await;
    let beta_id = beta["id"].as_str().unwrap().to_owned();

    let assign_resp = fixture
        .client
        .post(fixture.url(&format!("/api/teams/{alpha_id}/members")))
        .json(&json!({ "employee_id": employee_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(assign_resp.status(), 200);
    let alpha_after: Value = assign_resp.json().await.unwrap();
    assert_eq!(alpha_after["members"][0]["id"], employee_id);

    let on_alpha = fixture.employee_by_id(&employee_id).await;
    assert_eq!(on_alpha["team_id"], alpha_id);
    assert_eq!(on_alpha["team_name"], "Alpha");

    // Moving to Beta must leave exactly one membership behind.
    let move_resp = fixture
        .client
        .post(fixture.url(&format!("/api/teams/{beta_id}/members")))
        .json(&json!({ "employee_id": employee_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(move_resp.status(), 200);

    let alpha_now = fixture.team_by_id(&alpha_id).await;
    assert!(alpha_now["members"].as_array().unwrap().is_empty());
    let beta_now = fixture.team_by_id(&beta_id).await;
    assert_eq!(beta_now["members"][0]["id"], employee_id);
    let moved = fixture.employee_by_id(&employee_id).await;
    assert_eq!(moved["team_id"], beta_id);
}

#[tokio::test]
async fn test_second_team_lead_rejected() {
    let fixture = TestFixture::new().await;
    let first = fixture.create_employee("E001", "Asha Rao").await;
    let second = fixture.create_employee("E002", "Binh Tran").await;
    let team = fixture.create_team("Alpha").await;
    let team_id = team["id"].as_str().unwrap().to_owned();

    let first_resp = fixture
        .client
        .post(fixture.url(&format!("/api/teams/{team_id}/members")))
        .json(&json!({
            "employee_id": first["id"],
            "role": "Team Lead"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(first_resp.status(), 200);

    let second_resp = fixture
        .client
        .post(fixture.url(&format!("/api/teams/{team_id}/members")))
        .json(&json!({
            "employee_id": second["id"],
            "role": "Team Lead"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(second_resp.status(), 409);

    let holder = fixture
        .employee_by_id(first["id"].as_str().unwrap())
        .await;
    assert_eq!(holder["role"], "Team Lead");
}

#[tokio::test]
async fn test_team_delete_clears_member_assignments() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let employee_id = employee["id"].as_str().unwrap().to_owned();
    let team = fixture.create_team("Alpha").await;
    let team_id = team["id"].as_str().unwrap().to_owned();

    fixture
        .client
        .post(fixture.url(&format!("/api/teams/{team_id}/members")))
        .json(&json!({ "employee_id": employee_id, "role": "Team Lead" }))
        .send()
        .await
        .unwrap();

    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/teams/{team_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let detached = fixture.employee_by_id(&employee_id).await;
    assert_eq!(detached["team_id"], Value::Null);
    assert_eq!(detached["team_name"], Value::Null);
    assert_eq!(detached["role"], "Member");
}

#[tokio::test]
async fn test_remove_team_member() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let employee_id = employee["id"].as_str().unwrap().to_owned();
    let team = fixture.create_team("Alpha").await;
    let team_id = team["id"].as_str().unwrap().to_owned();

    fixture
        .client
        .post(fixture.url(&format!("/api/teams/{team_id}/members")))
        .json(&json!({ "employee_id": employee_id }))
        .send()
        .await
        .unwrap();

    let remove_resp = fixture
        .client
        .delete(fixture.url(&format!(
            "/api/teams/{team_id}/members/{employee_id}"
        )))
        .send()
        .await
        .unwrap();
    assert_eq!(remove_resp.status(), 200);
    let team_after: Value = remove_resp.json().await.unwrap();
    assert!(team_after["members"].as_array().unwrap().is_empty());

    let detached = fixture.employee_by_id(&employee_id).await;
    assert_eq!(detached["team_id"], Value::Null);
}

#[tokio::test]
async fn test_record_game_awards_both_sides() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let employee_id = employee["id"].as_str().unwrap().to_owned();
    let team = fixture.create_team("Alpha").await;
    let team_id = team["id"].as_str().unwrap().to_owned();

    let record_resp = fixture
        .client
        .post(fixture.url("/api/games"))
        .json(&json!({
            "name": "Quarterly Quiz",
            "date": "2025-06-14",
            "team_scores": [{ "team_id": team_id, "points": 50 }],
            "employee_scores": [{ "employee_id": employee_id, "points": 10 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(record_resp.status(), 200);
    let game: Value = record_resp.json().await.unwrap();
    assert_eq!(game["name"], "Quarterly Quiz");
    assert_eq!(game["team_scores"][0]["team_name"], "Alpha");
    assert_eq!(game["employee_scores"][0]["employee_name"], "Asha Rao");

    let team_after = fixture.team_by_id(&team_id).await;
    assert_eq!(team_after["points"], 50);
    let employee_after = fixture.employee_by_id(&employee_id).await;
    assert_eq!(employee_after["points"], 10);
}

#[tokio::test]
async fn test_record_game_unknown_target_rejected() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/games"))
        .json(&json!({
            "name": "Ghost Game",
            "date": "2025-06-14",
            "team_scores": [{
                "team_id": "00000000-0000-0000-0000-000000000000",
                "points": 50
            }],
            "employee_scores": []
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Nothing may reach the ledger when validation fails.
    let games_resp = fixture
        .client
        .get(fixture.url("/api/games"))
        .send()
        .await
        .unwrap();
    let games: Vec<Value> = games_resp.json().await.unwrap();
    assert!(games.is_empty());
}

#[tokio::test]
async fn test_schedule_lifecycle() {
    let fixture = TestFixture::new().await;
    let team = fixture.create_team("Alpha").await;
    let team_id = team["id"].as_str().unwrap().to_owned();

    let create_resp = fixture
        .client
        .post(fixture.url("/api/games/scheduled"))
        .json(&json!({
            "name": "Friday Trivia",
            "date": "2025-06-20",
            "time": "17:30",
            "teams": [team_id],
            "description": "End of sprint trivia"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let created: Value = create_resp.json().await.unwrap();
    assert_eq!(created["status"], "scheduled");
    assert_eq!(created["teams"][0]["name"], "Alpha");
    let id = created["id"].as_str().unwrap().to_owned();

    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/games/scheduled/{id}")))
        .json(&json!({ "status": "in-progress" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let updated: Value = update_resp.json().await.unwrap();
    assert_eq!(updated["status"], "in-progress");

    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/games/scheduled/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let list_resp = fixture
        .client
        .get(fixture.url("/api/games/scheduled"))
        .send()
        .await
        .unwrap();
    let remaining: Vec<Value> = list_resp.json().await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_workforce_lead_is_always_a_member() {
    let fixture = TestFixture::new().await;
    let member = fixture.create_employee("E001", "Asha Rao").await;
    let lead = fixture.create_employee("E002", "Binh Tran").await;
    let lead_id = lead["id"].as_str().unwrap().to_owned();

    let create_resp = fixture
        .client
        .post(fixture.url("/api/workforce-teams"))
        .json(&json!({
            "name": "Platform",
            "description": "Infrastructure crew",
            "members": [member["id"]],
            "lead": lead_id
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let created: Value = create_resp.json().await.unwrap();
    assert_eq!(created["lead"]["id"], lead_id);
    let roster: Vec<&str> = created["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert!(roster.contains(&lead_id.as_str()));
    let team_id = created["id"].as_str().unwrap().to_owned();

    // Removing the lead from the roster clears the lead slot too.
    let remove_resp = fixture
        .client
        .delete(fixture.url(&format!(
            "/api/workforce-teams/{team_id}/members/{lead_id}"
        )))
        .send()
        .await
        .unwrap();
    assert_eq!(remove_resp.status(), 200);
    let after: Value = remove_resp.json().await.unwrap();
    assert_eq!(after["lead"], Value::Null);
    assert_eq!(after["members"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_announcement_reaction_toggles() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let employee_id = employee["id"].as_str().unwrap().to_owned();

    let create_resp = fixture
        .client
        .post(fixture.url("/api/announcements"))
        .json(&json!({
            "title": "Town hall Friday",
            "content": "Main auditorium, 15:00."
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let announcement: Value = create_resp.json().await.unwrap();
    assert_eq!(announcement["author"], "Admin");
    let id = announcement["id"].as_str().unwrap().to_owned();

    let react_resp = fixture
        .client
        .post(fixture.url(&format!("/api/announcements/{id}/reactions")))
        .json(&json!({ "emoji": "🎉", "employee_id": employee_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(react_resp.status(), 200);
    let reacted: Value = react_resp.json().await.unwrap();
    assert_eq!(reacted["reactions"]["🎉"][0], employee_id);

    // A second identical toggle removes the reaction and the emoji key.
    let undo_resp = fixture
        .client
        .post(fixture.url(&format!("/api/announcements/{id}/reactions")))
        .json(&json!({ "emoji": "🎉", "employee_id": employee_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(undo_resp.status(), 200);
    let undone: Value = undo_resp.json().await.unwrap();
    assert!(undone["reactions"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_announcement_author_from_actor_header() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/announcements"))
        .header("x-actor", "Priya")
        .json(&json!({
            "title": "Welcome aboard",
            "content": "Say hi to the new joiners."
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["author"], "Priya");
}

#[tokio::test]
async fn test_ott_submission_targets_tomorrow() {
    let fixture = TestFixture::new().await;
    let today = OffsetDateTime::now_utc().date();
    let today_key = daily::format_date(today);
    let tomorrow_key = daily::format_date(daily::next_day(today));

    let submit_resp = fixture
        .client
        .post(fixture.url(&format!("/api/daily-tasks/{today_key}/ott")))
        .json(&json!({ "tasks": ["Ship release", "   ", "Write docs"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(submit_resp.status(), 200);
    let record: Value = submit_resp.json().await.unwrap();
    assert_eq!(record["date"], tomorrow_key);
    assert_eq!(record["ott"], json!(["Ship release", "Write docs"]));
    assert_eq!(record["ott_submitted"], true);

    // Today's own record stays untouched.
    let today_resp = fixture
        .client
        .get(fixture.url(&format!("/api/daily-tasks/{today_key}")))
        .send()
        .await
        .unwrap();
    let today_record: Value = today_resp.json().await.unwrap();
    assert_eq!(today_record["ott_submitted"], false);
}

#[tokio::test]
async fn test_ott_from_wrong_page_rejected() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/daily-tasks/2020-01-01/ott"))
        .json(&json!({ "tasks": ["Ship release"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_mit_must_come_from_yesterdays_list() {
    let fixture = TestFixture::new().await;
    let today = OffsetDateTime::now_utc().date();
    let today_key = daily::format_date(today);
    let yesterday_key = daily::format_date(daily::previous_day(today));

    fixture
        .store
        .save_daily_record(DailyTaskEntity {
            date: yesterday_key,
            ott: vec!["Review code".to_owned(), "Update roadmap".to_owned()],
            ott_submitted: true,
            mit: None,
            mit_submitted: false,
            updated_at: SystemTime::now(),
        })
        .await
        .unwrap();

    let invalid_resp = fixture
        .client
        .post(fixture.url(&format!("/api/daily-tasks/{today_key}/mit")))
        .json(&json!({ "task": "Something else" }))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid_resp.status(), 400);

    let valid_resp = fixture
        .client
        .post(fixture.url(&format!("/api/daily-tasks/{today_key}/mit")))
        .json(&json!({ "task": "Review code" }))
        .send()
        .await
        .unwrap();
    assert_eq!(valid_resp.status(), 200);
    let record: Value = valid_resp.json().await.unwrap();
    assert_eq!(record["date"], today_key);
    assert_eq!(record["mit"], "Review code");
    assert_eq!(record["mit_submitted"], true);
}

#[tokio::test]
async fn test_mit_without_yesterday_rejected() {
    let fixture = TestFixture::new().await;
    let today_key = daily::format_date(OffsetDateTime::now_utc().date());

    let resp = fixture
        .client
        .post(fixture.url(&format!("/api/daily-tasks/{today_key}/mit")))
        .json(&json!({ "task": "Review code" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn test_ott_edit_reopens_submission() {
    let fixture = TestFixture::new().await;
    let today_key = daily::format_date(OffsetDateTime::now_utc().date());

    fixture
        .client
        .post(fixture.url(&format!("/api/daily-tasks/{today_key}/ott")))
        .json(&json!({ "tasks": ["Ship release"] }))
        .send()
        .await
        .unwrap();

    let edit_resp = fixture
        .client
        .post(fixture.url(&format!("/api/daily-tasks/{today_key}/ott/edit")))
        .send()
        .await
        .unwrap();
    assert_eq!(edit_resp.status(), 200);
    let record: Value = edit_resp.json().await.unwrap();
    assert_eq!(record["ott_submitted"], false);
    // Stored entries survive until the next submission overwrites them.
    assert_eq!(record["ott"], json!(["Ship release"]));
}

#[tokio::test]
async fn test_daily_get_synthesizes_blank_record() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/daily-tasks/2030-05-05"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let record: Value = resp.json().await.unwrap();
    assert_eq!(record["date"], "2030-05-05");
    assert_eq!(record["ott_submitted"], false);
    assert_eq!(record["mit"], Value::Null);

    let bad_resp = fixture
        .client
        .get(fixture.url("/api/daily-tasks/not-a-date"))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_resp.status(), 400);
}

#[tokio::test]
async fn test_activity_trail_records_actions() {
    let fixture = TestFixture::new().await;
    fixture.create_employee("E001", "Asha Rao").await;

    let manual_resp = fixture
        .client
        .post(fixture.url("/api/activities"))
        .header("x-actor", "Priya")
        .json(&json!({ "action": "Manual audit note" }))
        .send()
        .await
        .unwrap();
    assert_eq!(manual_resp.status(), 200);
    let manual: Value = manual_resp.json().await.unwrap();
    assert_eq!(manual["actor"], "Priya");
    assert_eq!(manual["kind"], "user");

    let list_resp = fixture
        .client
        .get(fixture.url("/api/activities"))
        .send()
        .await
        .unwrap();
    assert_eq!(list_resp.status(), 200);
    let page: Value = list_resp.json().await.unwrap();
    assert_eq!(page["total"], 2);
    assert_eq!(page["current_page"], 1);
    let actions: Vec<&str> = page["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["action"].as_str().unwrap())
        .collect();
    assert!(actions.contains(&"Added new employee: Asha Rao"));
    assert!(actions.contains(&"Manual audit note"));

    let paged_resp = fixture
        .client
        .get(fixture.url("/api/activities?page=1&limit=1"))
        .send()
        .await
        .unwrap();
    let paged: Value = paged_resp.json().await.unwrap();
    assert_eq!(paged["activities"].as_array().unwrap().len(), 1);
    assert_eq!(paged["total_pages"], 2);
}

#[tokio::test]
async fn test_reconcile_restores_ledger_totals() {
    let fixture = TestFixture::new().await;
    let employee = fixture.create_employee("E001", "Asha Rao").await;
    let employee_id = employee["id"].as_str().unwrap().to_owned();
    let team = fixture.create_team("Alpha").await;
    let team_id = team["id"].as_str().unwrap().to_owned();

    fixture
        .client
        .post(fixture.url("/api/games"))
        .json(&json!({
            "name": "Quarterly Quiz",
            "date": "2025-06-14",
            "team_scores": [{ "team_id": team_id, "points": 30 }],
            "employee_scores": [{ "employee_id": employee_id, "points": 10 }]
        }))
        .send()
        .await
        .unwrap();

    // Absolute overrides drift away from what the ledger supports.
    fixture
        .client
        .patch(fixture.url(&format!("/api/teams/{team_id}/points")))
        .json(&json!({ "points": 999 }))
        .send()
        .await
        .unwrap();
    fixture
        .client
        .patch(fixture.url(&format!("/api/employees/{employee_id}/points")))
        .json(&json!({ "points": 555 }))
        .send()
        .await
        .unwrap();

    let reconcile_resp = fixture
        .client
        .post(fixture.url("/api/admin/reconcile"))
        .send()
        .await
        .unwrap();
    assert_eq!(reconcile_resp.status(), 200);
    let report: Value = reconcile_resp.json().await.unwrap();
    assert_eq!(report["employees_repaired"], 1);
    assert_eq!(report["teams_repaired"], 1);
    assert_eq!(report["memberships_repaired"], 0);
    assert_eq!(report["orphans_cleared"], 0);

    let team_after = fixture.team_by_id(&team_id).await;
    assert_eq!(team_after["points"], 30);
    let employee_after = fixture.employee_by_id(&employee_id).await;
    assert_eq!(employee_after["points"], 10);
}
