//! Maintenance operations.
//!
//! Point totals are increment-in-place at the storage layer, so a crash
//! between an increment and its ledger append (or an out-of-band edit) can
//! leave totals diverged from the game ledger. Reconciliation re-derives
//! every total from the ledger and rebuilds the team rosters from the
//! authoritative `Employee.team_id` side.

use std::collections::{HashMap, HashSet};
use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    dao::models::{ActivityKind, EmployeeRole},
    dto::admin::ReconcileResponse,
    error::ServiceError,
    services::{activity_service, session::SessionContext},
    state::SharedState,
};

/// Re-derive every point total from the game ledger and rebuild team
/// rosters. Returns how much had diverged.
///
/// The ledger is treated as ground truth: totals written through
/// `set_points` that no ledger entry backs are repaired away.
pub async fn reconcile(
    state: &SharedState,
    session: &SessionContext,
) -> Result<ReconcileResponse, ServiceError> {
    let store = state.require_store().await?;

    let games = store.list_games().await?;
    let mut team_sums: HashMap<Uuid, i64> = HashMap::new();
    let mut employee_sums: HashMap<Uuid, i64> = HashMap::new();
    for game in &games {
        for score in &game.team_scores {
            *team_sums.entry(score.team_id).or_default() += score.points;
        }
        for score in &game.employee_scores {
            *employee_sums.entry(score.employee_id).or_default() += score.points;
        }
    }

    let teams = store.list_teams().await?;
    let employees = store.list_employees().await?;
    let team_ids: HashSet<Uuid> = teams.iter().map(|team| team.id).collect();

    let mut employees_repaired = 0u64;
    let mut orphans_cleared = 0u64;
    for employee in &employees {
        let expected = employee_sums.get(&employee.id).copied().unwrap_or(0);
        if employee.points != expected
            && store.set_employee_points(employee.id, expected).await?
        {
            employees_repaired += 1;
        }

        if let Some(team_id) = employee.team_id {
            if !team_ids.contains(&team_id)
                && store
                    .set_employee_assignment(employee.id, None, EmployeeRole::Member)
                    .await?
            {
                orphans_cleared += 1;
            }
        }
    }

    let mut teams_repaired = 0u64;
    let mut memberships_repaired = 0u64;
    for team in teams {
        let expected_points = team_sums.get(&team.id).copied().unwrap_or(0);
        if team.points != expected_points
            && store.set_team_points(team.id, expected_points).await?
        {
            teams_repaired += 1;
        }

        let expected_members: Vec<Uuid> = employees
            .iter()
            .filter(|employee| employee.team_id == Some(team.id))
            .map(|employee| employee.id)
            .collect();
        if !same_members(&team.members, &expected_members) {
            // Re-read so the rewrite keeps the points repaired above.
            let Some(mut fresh) = store.find_team(team.id).await? else {
                continue;
            };
            fresh.members = expected_members;
            fresh.updated_at = SystemTime::now();
            store.save_team(fresh).await?;
            memberships_repaired += 1;
        }
    }

    activity_service::log(
        state,
        ActivityKind::System,
        &session.actor,
        "Reconciled point totals and team rosters".to_owned(),
    )
    .await;

    Ok(ReconcileResponse {
        message: "Reconciliation complete".to_owned(),
        employees_repaired,
        teams_repaired,
        memberships_repaired,
        orphans_cleared,
    })
}

fn same_members(current: &[Uuid], expected: &[Uuid]) -> bool {
    current.len() == expected.len()
        && current.iter().collect::<HashSet<_>>() == expected.iter().collect::<HashSet<_>>()
}
