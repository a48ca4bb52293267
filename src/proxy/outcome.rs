//! Facade replies and the upstream error classification table.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::upstream::UpstreamError;

/// Facade operations, used to label logs and pick the error policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListAll,
    SearchByName,
    GetById,
    HighestSalary,
    TopEarners,
    Create,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::ListAll => "list_all",
            Operation::SearchByName => "search_by_name",
            Operation::GetById => "get_by_id",
            Operation::HighestSalary => "highest_salary",
            Operation::TopEarners => "top_earners",
            Operation::Create => "create",
            Operation::Delete => "delete",
        }
    }

    /// The operation served by a matched route template.
    pub fn for_route(method: &Method, route: &str) -> Option<Self> {
        let operation = match (method.as_str(), route) {
            ("GET", "/") => Operation::ListAll,
            ("POST", "/") => Operation::Create,
            ("GET", "/search/{term}") => Operation::SearchByName,
            ("GET", "/highestSalary") => Operation::HighestSalary,
            ("GET", "/topTenHighestEarningEmployeeNames") => Operation::TopEarners,
            ("GET", "/{id}") => Operation::GetById,
            ("DELETE", "/{id}") => Operation::Delete,
            _ => return None,
        };
        Some(operation)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the facade answers for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// 200 with a body.
    Success(T),
    /// 201 with the created entity.
    Created(T),
    /// 204 with an empty body.
    NoContent,
    /// Any other status, empty body.
    Status(StatusCode),
}

impl<T> Reply<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Reply::Success(_) => StatusCode::OK,
            Reply::Created(_) => StatusCode::CREATED,
            Reply::NoContent => StatusCode::NO_CONTENT,
            Reply::Status(status) => *status,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::Success(body) => Reply::Success(f(body)),
            Reply::Created(body) => Reply::Created(f(body)),
            Reply::NoContent => Reply::NoContent,
            Reply::Status(status) => Reply::Status(status),
        }
    }

    pub fn into_body(self) -> Option<T> {
        match self {
            Reply::Success(body) | Reply::Created(body) => Some(body),
            Reply::NoContent | Reply::Status(_) => None,
        }
    }
}

impl<T: IntoResponse> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Reply::Success(body) => body.into_response(),
            Reply::Created(body) => (StatusCode::CREATED, body).into_response(),
            Reply::NoContent => StatusCode::NO_CONTENT.into_response(),
            Reply::Status(status) => status.into_response(),
        }
    }
}

/// Facade status for an upstream failure.
///
/// | upstream                 | facade |
/// |--------------------------|--------|
/// | 404                      | 404    |
/// | 429 or 5xx               | 429    |
/// | 400 during create        | 400    |
/// | anything else            | 500    |
pub fn classify(operation: Operation, error: &UpstreamError) -> StatusCode {
    match error {
        UpstreamError::NotFound => StatusCode::NOT_FOUND,
        UpstreamError::Throttled(_) => StatusCode::TOO_MANY_REQUESTS,
        UpstreamError::BadRequest if operation == Operation::Create => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Log an upstream failure and turn it into a reply.
pub fn failure<T>(operation: Operation, error: UpstreamError) -> Reply<T> {
    let status = classify(operation, &error);
    tracing::error!(
        operation = %operation,
        error = %error,
        status = status.as_u16(),
        "Upstream call failed"
    );
    Reply::Status(status)
}
