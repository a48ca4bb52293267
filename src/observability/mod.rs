//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the proxy layer produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (text or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID from the http layer is attached to every request span
//! - Metrics are optional and off by default

pub mod logging;
pub mod metrics;
