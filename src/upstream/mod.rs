//! Upstream employee service integration.
//!
//! # Data Flow
//! ```text
//! proxy::EmployeeService
//!     → client.rs (EmployeeApi: build URL, one HTTP call)
//!     → upstream employee service
//!     → client.rs (status check, envelope decode)
//!     → UpstreamResult<Option<Envelope>>
//! ```
//!
//! # Design Decisions
//! - The client is a trait object so tests can substitute a double
//! - No retries and no client-side timeout beyond reqwest defaults
//! - Status interpretation stops at `UpstreamError`; facade codes are
//!   decided by the proxy layer

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{EmployeeApi, HttpEmployeeApi};
pub use types::{UpstreamError, UpstreamResult};
