//! Prometheus exposition for the catalog API
//!
//! `handlers` renders the process-wide recorder at `/metrics`;
//! `middleware` feeds it one sample per API request.

pub mod handlers;
pub mod middleware;

pub use handlers::{prometheus_metrics, MetricsState};
pub use middleware::http_metrics_middleware;
