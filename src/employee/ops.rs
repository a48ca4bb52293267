//! In-memory reshaping of an employee list.

use crate::employee::types::Employee;

/// Number of names returned by the top earners query.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employees whose name contains `term`, ignoring case. Order is preserved.
pub fn search_by_name(employees: Vec<Employee>, term: &str) -> Vec<Employee> {
    let needle = term.to_lowercase();
    employees
        .into_iter()
        .filter(|employee| employee.name.to_lowercase().contains(&needle))
        .collect()
}

/// Largest salary in the list, `None` when empty.
pub fn highest_salary(employees: &[Employee]) -> Option<u64> {
    employees.iter().map(|employee| employee.salary).max()
}

/// Names of the `limit` best paid employees, highest first.
///
/// Equal salaries keep their upstream order.
pub fn top_earner_names(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    // sort_by is stable
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees
        .into_iter()
        .take(limit)
        .map(|employee| employee.name)
        .collect()
}
