//! Employee REST facade over an upstream employee service.

pub mod config;
pub mod employee;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod upstream;

pub use config::schema::FacadeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
