//! Employee records and the upstream envelopes that carry them.

use serde::{Deserialize, Serialize};

/// An employee as reported by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque upstream identifier.
    pub id: String,

    #[serde(rename = "employee_name", alias = "name")]
    pub name: String,

    #[serde(rename = "employee_salary", alias = "salary")]
    pub salary: u64,

    #[serde(rename = "employee_age", alias = "age")]
    pub age: u32,

    #[serde(rename = "employee_title", alias = "title")]
    pub title: String,

    #[serde(
        rename = "employee_email",
        alias = "email",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

/// Payload accepted by the create endpoint and forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CreateEmployeeInput {
    /// Reasons this input cannot be forwarded, empty when valid.
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name must not be blank");
        }
        if self.title.trim().is_empty() {
            problems.push("title must not be blank");
        }
        if self.age == 0 {
            problems.push("age must be positive");
        }
        problems
    }
}

/// Upstream response to a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeList {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<Employee>>,
}

impl EmployeeList {
    /// The employees, or `None` when the upstream sent no data or an empty list.
    pub fn into_non_empty(self) -> Option<Vec<Employee>> {
        self.data.filter(|employees| !employees.is_empty())
    }
}

/// Upstream response to a single-employee request (lookup or create).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<Employee>,
}
