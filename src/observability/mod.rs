//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the backend client produce:
//!     → logging.rs (structured log events, request spans)
//!     → metrics.rs (backend call counters and latency histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metrics are cheap (atomic increments) and recorded even with no exporter

pub mod logging;
pub mod metrics;
