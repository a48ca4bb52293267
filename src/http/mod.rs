//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, span)
//!     → handlers.rs (extract path/body)
//!     → proxy::EmployeeService
//!     → Reply rendered as the response
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use server::{build_router, AppState, HttpServer};
