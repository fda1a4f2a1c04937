//! Employee registry operations.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::warn;
use uuid::Uuid;

use crate::{
    dao::{
        directory_store::DirectoryStore,
        models::{ActivityKind, EmployeeEntity, EmployeeRole, EmployeeScoreEntity, EmployeeStatus},
    },
    dto::{
        common::{AwardPointsRequest, MessageResponse, SetPointsRequest},
        employee::{
            CreateEmployeeRequest, EmployeeDto, ImportEmployeesRequest, ImportEmployeesResponse,
            UpdateEmployeeRequest,
        },
    },
    error::ServiceError,
    services::{activity_service, game_service, session::SessionContext},
    state::SharedState,
};

/// List every employee with their team name resolved.
pub async fn list_employees(state: &SharedState) -> Result<Vec<EmployeeDto>, ServiceError> {
    let store = state.require_store().await?;

    let team_names: HashMap<Uuid, String> = store
        .list_teams()
        .await?
        .into_iter()
        .map(|team| (team.id, team.name))
        .collect();

    let employees = store.list_employees().await?;
    Ok(employees
        .into_iter()
        .map(|employee| {
            let team_name = employee
                .team_id
                .and_then(|team_id| team_names.get(&team_id).cloned());
            EmployeeDto::from_entity(employee, team_name)
        })
        .collect())
}

/// Enroll a new employee. The badge identifier must be unused.
pub async fn create_employee(
    state: &SharedState,
    session: &SessionContext,
    payload: CreateEmployeeRequest,
) -> Result<EmployeeDto, ServiceError> {
    let store = state.require_store().await?;

    let emp_id = payload.emp_id.trim().to_owned();
    if store
        .find_employee_by_emp_id(emp_id.clone())
        .await?
        .is_some()
    {
        return Err(ServiceError::InvalidState(format!(
            "employee ID `{emp_id}` already exists"
        )));
    }

    let now = SystemTime::now();
    let employee = EmployeeEntity {
        id: Uuid::new_v4(),
        emp_id,
        name: payload.name.trim().to_owned(),
        designation: payload.designation.trim().to_owned(),
        email: normalize_email(payload.email),
        points: 0,
        role: payload.role.unwrap_or(EmployeeRole::Member),
        status: payload.status.unwrap_or(EmployeeStatus::Active),
        team_id: None,
        created_at: now,
        updated_at: now,
    };
    store.save_employee(employee.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Added new employee: {}", employee.name),
    )
    .await;

    Ok(EmployeeDto::from_entity(employee, None))
}

/// Edit an existing employee's profile. Absent fields keep their value.
pub async fn update_employee(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: UpdateEmployeeRequest,
) -> Result<EmployeeDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(mut employee) = store.find_employee(id).await? else {
        return Err(ServiceError::NotFound(format!("employee `{id}` not found")));
    };

    if let Some(emp_id) = payload.emp_id {
        let emp_id = emp_id.trim().to_owned();
        if emp_id != employee.emp_id {
            if store
                .find_employee_by_emp_id(emp_id.clone())
                .await?
                .is_some()
            {
                return Err(ServiceError::InvalidState(format!(
                    "employee ID `{emp_id}` already exists"
                )));
            }
            employee.emp_id = emp_id;
        }
    }
    if let Some(name) = payload.name {
        employee.name = name.trim().to_owned();
    }
    if let Some(designation) = payload.designation {
        employee.designation = designation.trim().to_owned();
    }
    if let Some(email) = payload.email {
        employee.email = normalize_email(email);
    }
    if let Some(role) = payload.role {
        employee.role = role;
    }
    if let Some(status) = payload.status {
        employee.status = status;
    }
    employee.updated_at = SystemTime::now();

    store.save_employee(employee.clone()).await?;

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Updated employee: {}", employee.name),
    )
    .await;

    let team_name = resolve_team_name(&store, employee.team_id).await?;
    Ok(EmployeeDto::from_entity(employee, team_name))
}

/// Remove an employee and detach them from every team they appear in.
pub async fn delete_employee(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
) -> Result<MessageResponse, ServiceError> {
    let store = state.require_store().await?;

    let Some(employee) = store.find_employee(id).await? else {
        return Err(ServiceError::NotFound(format!("employee `{id}` not found")));
    };

    store.delete_employee(id).await?;
    if let Some(team_id) = employee.team_id {
        store.remove_team_member(team_id, id).await?;
    }
    store.detach_employee_from_workforce(id).await?;

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Deleted employee: {}", employee.name),
    )
    .await;

    Ok(MessageResponse::new("Employee deleted successfully"))
}

/// Overwrite an employee's point tally with an absolute value.
pub async fn set_employee_points(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: SetPointsRequest,
) -> Result<EmployeeDto, ServiceError> {
    if payload.points < 0 {
        return Err(ServiceError::InvalidInput(
            "points cannot be negative".to_owned(),
        ));
    }

    let store = state.require_store().await?;
    if !store.set_employee_points(id, payload.points).await? {
        return Err(ServiceError::NotFound(format!("employee `{id}` not found")));
    }

    let Some(employee) = store.find_employee(id).await? else {
        return Err(ServiceError::NotFound(format!("employee `{id}` not found")));
    };

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!(
            "Updated points for {}: {} points",
            employee.name, employee.points
        ),
    )
    .await;

    let team_name = resolve_team_name(&store, employee.team_id).await?;
    Ok(EmployeeDto::from_entity(employee, team_name))
}

/// Award a signed point delta to an employee and record it in the ledger.
pub async fn award_employee_points(
    state: &SharedState,
    session: &SessionContext,
    id: Uuid,
    payload: AwardPointsRequest,
) -> Result<EmployeeDto, ServiceError> {
    let store = state.require_store().await?;

    let Some(employee) = store.find_employee(id).await? else {
        return Err(ServiceError::NotFound(format!("employee `{id}` not found")));
    };

    if !store.increment_employee_points(id, payload.points).await? {
        return Err(ServiceError::NotFound(format!("employee `{id}` not found")));
    }

    let ledger = game_service::direct_award_entry(
        state.config(),
        format!("Direct award to {}", employee.name),
        Vec::new(),
        vec![EmployeeScoreEntity {
            employee_id: id,
            points: payload.points,
        }],
    );
    if let Err(err) = store.insert_game(ledger).await {
        warn!(error = %err, employee = %id, "points applied but ledger append failed");
        return Err(err.into());
    }

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Awarded {} points to {}", payload.points, employee.name),
    )
    .await;

    let Some(updated) = store.find_employee(id).await? else {
        return Err(ServiceError::NotFound(format!("employee `{id}` not found")));
    };
    let team_name = resolve_team_name(&store, updated.team_id).await?;
    Ok(EmployeeDto::from_entity(updated, team_name))
}

/// Bulk-enroll employees, skipping badge identifiers that already exist.
///
/// Imported rows always start as active members with zero points and no
/// team. A batch where every row already exists is rejected outright.
pub async fn import_employees(
    state: &SharedState,
    session: &SessionContext,
    payload: ImportEmployeesRequest,
) -> Result<ImportEmployeesResponse, ServiceError> {
    let store = state.require_store().await?;

    if payload.employees.is_empty() {
        return Err(ServiceError::InvalidInput(
            "no employees to import".to_owned(),
        ));
    }

    let mut created = Vec::new();
    let mut skipped = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for row in payload.employees {
        let emp_id = row.emp_id.trim().to_owned();
        let duplicate = seen.contains(&emp_id)
            || store
                .find_employee_by_emp_id(emp_id.clone())
                .await?
                .is_some();
        if duplicate {
            skipped.push(emp_id);
            continue;
        }
        seen.insert(emp_id.clone());

        let now = SystemTime::now();
        let employee = EmployeeEntity {
            id: Uuid::new_v4(),
            emp_id,
            name: row.name.trim().to_owned(),
            designation: row.designation.trim().to_owned(),
            email: normalize_email(row.email),
            points: 0,
            role: EmployeeRole::Member,
            status: EmployeeStatus::Active,
            team_id: None,
            created_at: now,
            updated_at: now,
        };
        store.save_employee(employee.clone()).await?;
        created.push(employee);
    }

    if created.is_empty() {
        return Err(ServiceError::InvalidInput(
            "All employees already exist".to_owned(),
        ));
    }

    activity_service::log(
        state,
        ActivityKind::User,
        &session.actor,
        format!("Imported {} employees", created.len()),
    )
    .await;

    Ok(ImportEmployeesResponse {
        message: format!("Successfully imported {} employees", created.len()),
        employees: created
            .into_iter()
            .map(|employee| EmployeeDto::from_entity(employee, None))
            .collect(),
        skipped,
    })
}

async fn resolve_team_name(
    store: &Arc<dyn DirectoryStore>,
    team_id: Option<Uuid>,
) -> Result<Option<String>, ServiceError> {
    let Some(team_id) = team_id else {
        return Ok(None);
    };
    Ok(store.find_team(team_id).await?.map(|team| team.name))
}

fn normalize_email(email: Option<String>) -> Option<String> {
    email
        .map(|email| email.trim().to_owned())
        .filter(|email| !email.is_empty())
}
