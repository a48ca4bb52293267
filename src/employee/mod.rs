//! Employee domain types and list transformations.

pub mod ops;
pub mod types;

pub use types::{CreateEmployeeInput, Employee, EmployeeDetail, EmployeeList};
