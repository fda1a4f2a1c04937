use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        common::{AwardPointsRequest, MessageResponse, SetPointsRequest},
        employee::{
            CreateEmployeeRequest, EmployeeDto, ImportEmployeesRequest, ImportEmployeesResponse,
            UpdateEmployeeRequest,
        },
    },
    error::AppError,
    services::{employee_service, session::SessionContext},
    state::SharedState,
};

/// Routes handling the employee registry.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/import", post(import_employees))
        .route(
            "/employees/{id}",
            put(update_employee).delete(delete_employee),
        )
        .route("/employees/{id}/points", patch(set_employee_points))
        .route("/employees/{id}/points/award", post(award_employee_points))
}

/// List every employee with their team name resolved.
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeDto>)
    )
)]
pub async fn list_employees(
    State(state): State<SharedState>,
) -> Result<Json<Vec<EmployeeDto>>, AppError> {
    let employees = employee_service::list_employees(&state).await?;
    Ok(Json(employees))
}

/// Enroll a new employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Employee created", body = EmployeeDto)
    )
)]
pub async fn create_employee(
    State(state): State<SharedState>,
    session: SessionContext,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<Json<EmployeeDto>, AppError> {
    payload.validate()?;
    let employee = employee_service::create_employee(&state, &session, payload).await?;
    Ok(Json(employee))
}

/// Bulk-enroll employees, skipping badge identifiers that already exist.
#[utoipa::path(
    post,
    path = "/api/employees/import",
    tag = "employees",
    request_body = ImportEmployeesRequest,
    responses(
        (status = 200, description = "Import outcome", body = ImportEmployeesResponse)
    )
)]
pub async fn import_employees(
    State(state): State<SharedState>,
    session: SessionContext,
    Json(payload): Json<ImportEmployeesRequest>,
) -> Result<Json<ImportEmployeesResponse>, AppError> {
    payload.validate()?;
    let outcome = employee_service::import_employees(&state, &session, payload).await?;
    Ok(Json(outcome))
}

/// Edit an employee's profile.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "Identifier of the employee")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeDto)
    )
)]
pub async fn update_employee(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeDto>, AppError> {
    payload.validate()?;
    let employee = employee_service::update_employee(&state, &session, id, payload).await?;
    Ok(Json(employee))
}

/// Remove an employee and detach them from every team.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "Identifier of the employee")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let outcome = employee_service::delete_employee(&state, &session, id).await?;
    Ok(Json(outcome))
}

/// Overwrite an employee's point tally.
#[utoipa::path(
    patch,
    path = "/api/employees/{id}/points",
    tag = "employees",
    params(("id" = String, Path, description = "Identifier of the employee")),
    request_body = SetPointsRequest,
    responses(
        (status = 200, description = "Points updated", body = EmployeeDto)
    )
)]
pub async fn set_employee_points(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetPointsRequest>,
) -> Result<Json<EmployeeDto>, AppError> {
    let employee = employee_service::set_employee_points(&state, &session, id, payload).await?;
    Ok(Json(employee))
}

/// Award a signed point delta to an employee.
#[utoipa::path(
    post,
    path = "/api/employees/{id}/points/award",
    tag = "employees",
    params(("id" = String, Path, description = "Identifier of the employee")),
    request_body = AwardPointsRequest,
    responses(
        (status = 200, description = "Points awarded", body = EmployeeDto)
    )
)]
pub async fn award_employee_points(
    State(state): State<SharedState>,
    session: SessionContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<AwardPointsRequest>,
) -> Result<Json<EmployeeDto>, AppError> {
    let employee = employee_service::award_employee_points(&state, &session, id, payload).await?;
    Ok(Json(employee))
}
