//! Opt-in operation counters for the list engines (feature `metrics`).
//!
//! Recording is kept apart from snapshotting and export so the engines
//! only ever write counters.

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::ListMetrics;
pub use snapshot::ListMetricsSnapshot;
pub use traits::{ListMetricsRecorder, MetricsExporter, MetricsReset, MetricsSnapshotProvider};
