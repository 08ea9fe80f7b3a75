use axum::{extract::{Path, State}, Json};
use common::types::Deleted;
use service::employee::{Employee, EmployeeInput};
use tracing::info;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/v1/employees", tag = "employees",
    responses((status = 200, description = "Found the list of employees", body = [crate::openapi::EmployeeDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, JsonApiError> {
    let list = state.employees.list().await?;
    info!(count = list.len(), "list employees");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/v1/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Employee not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.employees.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/v1/employees", tag = "employees",
    request_body = crate::openapi::EmployeeInputDoc,
    responses((status = 200, description = "Employee created", body = crate::openapi::EmployeeDoc))
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<EmployeeInput>) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.employees.create(input).await?))
}

/// Empty fields in the body leave the stored values untouched.
#[utoipa::path(
    put, path = "/api/v1/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Employee updated", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Employee not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.employees.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/v1/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted", body = crate::openapi::DeletedDoc),
        (status = 404, description = "Employee not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Deleted>, JsonApiError> {
    state.employees.delete(id).await?;
    Ok(Json(Deleted::yes()))
}
