use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::ListMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for list metrics snapshots.
///
/// This exporter writes in the Prometheus text exposition format so it can be
/// scraped by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<ListMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &ListMetricsSnapshot) {
        self.write_counter(
            &self.metric_name("insert_calls_total"),
            snapshot.insert_calls,
        );
        self.write_counter(&self.metric_name("insert_new_total"), snapshot.insert_new);
        self.write_counter(
            &self.metric_name("insert_refreshes_total"),
            snapshot.insert_refreshes,
        );
        self.write_counter(
            &self.metric_name("evicted_entries_total"),
            snapshot.evicted_entries,
        );
        self.write_counter(
            &self.metric_name("remove_calls_total"),
            snapshot.remove_calls,
        );
        self.write_counter(&self.metric_name("remove_hits_total"), snapshot.remove_hits);
        self.write_counter(
            &self.metric_name("remove_misses_total"),
            snapshot.remove_misses,
        );
        self.write_counter(&self.metric_name("touch_calls_total"), snapshot.touch_calls);
        self.write_counter(&self.metric_name("touch_hits_total"), snapshot.touch_hits);
        self.write_counter(
            &self.metric_name("touch_misses_total"),
            snapshot.touch_misses,
        );
        self.write_counter(&self.metric_name("clear_calls_total"), snapshot.clear_calls);
        self.write_gauge(&self.metric_name("list_len"), snapshot.list_len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
