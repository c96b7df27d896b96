use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use futures::TryStreamExt;
use models::employee::{Employee, EmployeeFields};
use serde_json::Value;
use tracing::info;

use crate::errors::{JsonApiError, Operation};
use crate::extract::{EmployeeId, JsonObject};
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/api/employees", tag = "employees",
    responses(
        (status = 200, description = "All employees, without ids", body = [crate::openapi::EmployeeFieldsDoc]),
        (status = 415, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<EmployeeFields>>, JsonApiError> {
    let all: Vec<EmployeeFields> = state
        .store
        .list_all()
        .try_collect()
        .await
        .map_err(|e| JsonApiError::from_service(Operation::List, e))?;
    info!(count = all.len(), "list employees");
    Ok(Json(all))
}

/// Replies with the submitted body, `id` replaced by the generated one.
#[utoipa::path(
    post, path = "/api/employees", tag = "employees",
    request_body = crate::openapi::EmployeeFieldsDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc,
            headers(("Location" = String, description = "Path of the new employee"))),
        (status = 415, description = "Invalid Payload", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Create Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    JsonObject(mut body): JsonObject,
) -> Result<impl IntoResponse, JsonApiError> {
    let created: Employee = state
        .store
        .create(Some(&body))
        .await
        .map_err(|e| JsonApiError::from_service(Operation::Create, e))?;
    let location = format!("/api/employees/{}", created.id);
    body.insert("id".into(), Value::from(created.id));
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(Value::Object(body))))
}

#[utoipa::path(
    get, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Invalid Id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Lookup Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    EmployeeId(id): EmployeeId,
) -> Result<Json<Employee>, JsonApiError> {
    state
        .store
        .get_by_id(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(Operation::Get, e))
}

/// Replies with the submitted body plus the path id; the row is not re-read.
#[utoipa::path(
    put, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = crate::openapi::EmployeeFieldsDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Invalid Id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 415, description = "Invalid Payload", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Update Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    EmployeeId(id): EmployeeId,
    JsonObject(mut body): JsonObject,
) -> Result<Json<Value>, JsonApiError> {
    state
        .store
        .update(id, Some(&body))
        .await
        .map_err(|e| JsonApiError::from_service(Operation::Update, e))?;
    body.insert("id".into(), Value::from(id));
    Ok(Json(Value::Object(body)))
}

#[utoipa::path(
    delete, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid Id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 415, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    EmployeeId(id): EmployeeId,
) -> Result<StatusCode, JsonApiError> {
    state
        .store
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from_service(Operation::Delete, e))?;
    Ok(StatusCode::NO_CONTENT)
}
