//! REST API routes for the mock backend
//!
//! The employee routes speak bare JSON (json-server style): a bare array on
//! list, the bare record on create/update. Errors use the shared
//! [`AppError`] body with its HTTP status mapping.

use crate::state::AppState;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use shared::client::{LoginRequest, LoginResponse};
use shared::error::{AppError, AppResult};
use shared::models::{Employee, NewEmployee};
use std::sync::Arc;

/// Build the mock backend router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            put(update_employee).delete(delete_employee),
        )
        .route("/auth/login", post(login))
        .with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if state.authenticate(&req.email, &req.password) {
        tracing::info!(email = %req.email, "login accepted");
        Ok(Json(LoginResponse { success: true }))
    } else {
        tracing::warn!(email = %req.email, "login rejected");
        Err(AppError::invalid_credentials())
    }
}

async fn list_employees(State(state): State<Arc<AppState>>) -> Json<Vec<Employee>> {
    let employees = state.employees.read().await;
    Json(employees.values().cloned().collect())
}

async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewEmployee>,
) -> Json<Employee> {
    let mut employees = state.employees.write().await;
    let mut id = shared::util::snowflake_id();
    while employees.contains_key(&id) {
        id = shared::util::snowflake_id();
    }
    let employee = req.with_id(id);
    employees.insert(id, employee.clone());
    tracing::info!(id, name = %employee.name, "employee created");
    Json(employee)
}

async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<Employee>,
) -> AppResult<Json<Employee>> {
    if req.id != id {
        return Err(AppError::invalid_request("body id does not match path id"));
    }

    let mut employees = state.employees.write().await;
    if !employees.contains_key(&id) {
        return Err(AppError::employee_not_found(id));
    }
    employees.insert(id, req.clone());
    tracing::info!(id, "employee updated");
    Ok(Json(req))
}

async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let mut employees = state.employees.write().await;
    if employees.remove(&id).is_none() {
        return Err(AppError::employee_not_found(id));
    }
    tracing::info!(id, "employee deleted");
    Ok(Json(serde_json::json!({})))
}
