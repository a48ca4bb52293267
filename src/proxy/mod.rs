//! Proxy layer: employee operations on top of the upstream client.
//!
//! # Data Flow
//! ```text
//! http handler
//!     → service.rs (one upstream call, two for delete)
//!     → employee::ops (filter / max / sort-and-take)
//!     → outcome.rs (Reply, shared error classification)
//!     → http handler
//! ```

pub mod outcome;
pub mod service;

pub use outcome::{classify, Operation, Reply};
pub use service::EmployeeService;
