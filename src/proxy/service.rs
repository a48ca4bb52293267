//! Employee operations over the upstream service.
//!
//! Each operation makes one upstream call (delete makes two), reshapes the
//! payload and maps failures through [`failure`].

use std::sync::Arc;

use axum::http::StatusCode;

use crate::employee::ops::{self, TOP_EARNERS_LIMIT};
use crate::employee::{CreateEmployeeInput, Employee, EmployeeDetail, EmployeeList};
use crate::proxy::outcome::{failure, Operation, Reply};
use crate::upstream::{EmployeeApi, UpstreamResult};

/// Facade over an [`EmployeeApi`].
#[derive(Clone)]
pub struct EmployeeService {
    api: Arc<dyn EmployeeApi>,
}

impl EmployeeService {
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self { api }
    }

    pub async fn list_all(&self) -> Reply<Vec<Employee>> {
        match self.fetch_all().await {
            Ok(Some(employees)) => {
                tracing::debug!(count = employees.len(), "Fetched employees");
                Reply::Success(employees)
            }
            Ok(None) => Reply::NoContent,
            Err(e) => failure(Operation::ListAll, e),
        }
    }

    pub async fn search_by_name(&self, term: &str) -> Reply<Vec<Employee>> {
        let employees = match self.fetch_all().await {
            Ok(Some(employees)) => employees,
            Ok(None) => return Reply::NoContent,
            Err(e) => return failure(Operation::SearchByName, e),
        };

        let matches = ops::search_by_name(employees, term);
        if matches.is_empty() {
            tracing::info!(term = %term, "No employees match search term");
            return Reply::NoContent;
        }
        tracing::debug!(term = %term, count = matches.len(), "Employees matched");
        Reply::Success(matches)
    }

    pub async fn get_by_id(&self, id: &str) -> Reply<Employee> {
        match self.api.get(id).await {
            Ok(detail) => match detail.and_then(|d| d.data) {
                Some(employee) => Reply::Success(employee),
                None => Reply::NoContent,
            },
            Err(e) => failure(Operation::GetById, e),
        }
    }

    pub async fn highest_salary(&self) -> Reply<u64> {
        match self.fetch_all().await {
            Ok(Some(employees)) => match ops::highest_salary(&employees) {
                Some(salary) => Reply::Success(salary),
                None => Reply::NoContent,
            },
            Ok(None) => Reply::NoContent,
            Err(e) => failure(Operation::HighestSalary, e),
        }
    }

    pub async fn top_earner_names(&self) -> Reply<Vec<String>> {
        match self.fetch_all().await {
            Ok(Some(employees)) => {
                Reply::Success(ops::top_earner_names(employees, TOP_EARNERS_LIMIT))
            }
            Ok(None) => Reply::NoContent,
            Err(e) => failure(Operation::TopEarners, e),
        }
    }

    pub async fn create(&self, input: &CreateEmployeeInput) -> Reply<Employee> {
        let problems = input.problems();
        if !problems.is_empty() {
            tracing::warn!(?problems, "Rejecting invalid employee input");
            return Reply::Status(StatusCode::BAD_REQUEST);
        }

        match self.api.create(input).await {
            Ok(detail) => match detail.and_then(|d| d.data) {
                Some(employee) => {
                    tracing::info!(id = %employee.id, "Employee created");
                    Reply::Created(employee)
                }
                None => Reply::NoContent,
            },
            Err(e) => failure(Operation::Create, e),
        }
    }

    /// Look the employee up, delete it, and answer with its name.
    pub async fn delete_by_id(&self, id: &str) -> Reply<String> {
        let employee = match self.api.get(id).await {
            Ok(Some(EmployeeDetail {
                data: Some(employee),
                ..
            })) => employee,
            Ok(_) => {
                tracing::info!(id = %id, "Employee to delete not found");
                return Reply::Status(StatusCode::NOT_FOUND);
            }
            Err(e) => return failure(Operation::Delete, e),
        };

        if let Err(e) = self.api.delete(id).await {
            return failure(Operation::Delete, e);
        }
        tracing::info!(id = %id, name = %employee.name, "Employee deleted");
        Reply::Success(employee.name)
    }

    async fn fetch_all(&self) -> UpstreamResult<Option<Vec<Employee>>> {
        Ok(self
            .api
            .list()
            .await?
            .and_then(EmployeeList::into_non_empty))
    }
}
