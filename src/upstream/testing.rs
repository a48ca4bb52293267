//! In-memory `EmployeeApi` double for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::employee::{CreateEmployeeInput, Employee, EmployeeDetail, EmployeeList};
use crate::upstream::{EmployeeApi, UpstreamError, UpstreamResult};

type ListFn = Box<dyn Fn() -> UpstreamResult<Option<EmployeeList>> + Send + Sync>;
type GetFn = Box<dyn Fn(&str) -> UpstreamResult<Option<EmployeeDetail>> + Send + Sync>;
type CreateFn =
    Box<dyn Fn(&CreateEmployeeInput) -> UpstreamResult<Option<EmployeeDetail>> + Send + Sync>;
type DeleteFn = Box<dyn Fn(&str) -> UpstreamResult<()> + Send + Sync>;

/// Scripted upstream. Calls without a script panic.
#[derive(Default)]
pub struct FakeApi {
    list: Option<ListFn>,
    get: Option<GetFn>,
    create: Option<CreateFn>,
    delete: Option<DeleteFn>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_list(
        mut self,
        f: impl Fn() -> UpstreamResult<Option<EmployeeList>> + Send + Sync + 'static,
    ) -> Self {
        self.list = Some(Box::new(f));
        self
    }

    /// Shorthand for a list envelope holding `employees`.
    pub fn with_employees(self, employees: Vec<Employee>) -> Self {
        self.on_list(move || {
            Ok(Some(EmployeeList {
                status: Some("Successfully processed request.".into()),
                data: Some(employees.clone()),
            }))
        })
    }

    pub fn on_get(
        mut self,
        f: impl Fn(&str) -> UpstreamResult<Option<EmployeeDetail>> + Send + Sync + 'static,
    ) -> Self {
        self.get = Some(Box::new(f));
        self
    }

    pub fn on_create(
        mut self,
        f: impl Fn(&CreateEmployeeInput) -> UpstreamResult<Option<EmployeeDetail>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.create = Some(Box::new(f));
        self
    }

    pub fn on_delete(
        mut self,
        f: impl Fn(&str) -> UpstreamResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.delete = Some(Box::new(f));
        self
    }

    /// Calls made so far, e.g. `["get 7", "delete 7"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl EmployeeApi for FakeApi {
    async fn list(&self) -> UpstreamResult<Option<EmployeeList>> {
        self.record("list".into());
        (self.list.as_ref().expect("unexpected list call"))()
    }

    async fn get(&self, id: &str) -> UpstreamResult<Option<EmployeeDetail>> {
        self.record(format!("get {id}"));
        (self.get.as_ref().expect("unexpected get call"))(id)
    }

    async fn create(&self, input: &CreateEmployeeInput) -> UpstreamResult<Option<EmployeeDetail>> {
        self.record(format!("create {}", input.name));
        (self.create.as_ref().expect("unexpected create call"))(input)
    }

    async fn delete(&self, id: &str) -> UpstreamResult<()> {
        self.record(format!("delete {id}"));
        (self.delete.as_ref().expect("unexpected delete call"))(id)
    }
}

pub fn employee(id: &str, name: &str, salary: u64) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        salary,
        age: 30,
        title: "Engineer".into(),
        email: Some(format!("{}@company.com", id)),
    }
}

pub fn detail(employee: Employee) -> EmployeeDetail {
    EmployeeDetail {
        status: Some("Successfully processed request.".into()),
        data: Some(employee),
    }
}

pub fn decode_error() -> UpstreamError {
    UpstreamError::Decode(serde_json::from_str::<u32>("\"x\"").unwrap_err())
}
