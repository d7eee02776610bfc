//! Employee API Handlers
//!
//! Thin transport glue: translate requests into access-service calls and
//! service results into JSON responses. All cache/store consistency rules
//! live in [`EmployeeService`](crate::services::EmployeeService).

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeInput};
use crate::utils::{AppError, AppResult};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.list_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.save(payload).await?;
    tracing::info!(id = employee.id, "employee saved");
    Ok(Json(employee))
}

/// Overwrite an employee's data with the request body
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    // Check existence first: PUT must not silently create
    state
        .employees
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;

    let employee = state.employees.update_by_id(payload, id).await?;
    tracing::info!(id, "employee updated");
    Ok(Json(employee))
}

/// Delete an employee by id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    state.employees.delete_by_id(id).await?;
    tracing::info!(id, "employee deleted");
    Ok(Json(true))
}
