//! Employee endpoint handlers.
//!
//! Handlers only extract parameters and hand off to
//! [`EmployeeService`](crate::proxy::EmployeeService);
//! the reply it produces is returned verbatim.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::employee::{CreateEmployeeInput, Employee};
use crate::http::server::AppState;
use crate::proxy::Reply;

/// `GET /`
pub async fn list_all(State(state): State<AppState>) -> Reply<Json<Vec<Employee>>> {
    state.employees.list_all().await.map(Json)
}

/// `GET /search/{term}`
pub async fn search_by_name(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Reply<Json<Vec<Employee>>> {
    tracing::info!(term = %term, "Searching employees by name");
    state.employees.search_by_name(&term).await.map(Json)
}

/// `GET /{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Reply<Json<Employee>> {
    tracing::info!(id = %id, "Fetching employee");
    state.employees.get_by_id(&id).await.map(Json)
}

/// `GET /highestSalary`
pub async fn highest_salary(State(state): State<AppState>) -> Reply<Json<u64>> {
    state.employees.highest_salary().await.map(Json)
}

/// `GET /topTenHighestEarningEmployeeNames`
pub async fn top_earner_names(State(state): State<AppState>) -> Reply<Json<Vec<String>>> {
    state.employees.top_earner_names().await.map(Json)
}

/// `POST /`, any body that does not decode as [`CreateEmployeeInput`] is a 400.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeInput>, JsonRejection>,
) -> Reply<Json<Employee>> {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected create payload");
            return Reply::Status(StatusCode::BAD_REQUEST);
        }
    };
    tracing::info!(name = %input.name, "Creating employee");
    state.employees.create(&input).await.map(Json)
}

/// `DELETE /{id}`, answers with the deleted employee's name as plain text.
pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Reply<String> {
    tracing::info!(id = %id, "Deleting employee");
    state.employees.delete_by_id(&id).await
}
