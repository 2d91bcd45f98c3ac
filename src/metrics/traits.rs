//! # Metrics Trait Hierarchy
//!
//! Separates *recording* from *consumption* (snapshot, export) so
//! list logic never depends on how counters are consumed.
//!
//! ```text
//!              ┌─────────────────────────────┐
//!              │     ListMetricsRecorder     │
//!              │  insert/evict/remove/touch  │
//!              │  clear                      │
//!              └──────────────┬──────────────┘
//!                             │
//!            ┌────────────────┴────────────────┐
//!            ▼                                 ▼
//!   ┌─────────────────────┐          ┌─────────────────────┐
//!   │ LruList<T>          │          │ IndexedLruList<K>   │
//!   └─────────────────────┘          └─────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters shared by every list engine.
pub trait ListMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_refresh(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_remove_hit(&mut self);
    fn record_remove_miss(&mut self);
    fn record_touch_hit(&mut self);
    fn record_touch_miss(&mut self);
    fn record_clear(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
