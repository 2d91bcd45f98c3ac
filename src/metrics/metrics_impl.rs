use crate::metrics::snapshot::ListMetricsSnapshot;
use crate::metrics::traits::ListMetricsRecorder;

#[derive(Debug, Default, Clone)]
pub struct ListMetrics {
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_refreshes: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_hits: u64,
    pub remove_misses: u64,
    pub touch_calls: u64,
    pub touch_hits: u64,
    pub touch_misses: u64,
    pub clear_calls: u64,
}

impl ListMetrics {
    /// Captures the counters together with the list's current gauges.
    pub fn snapshot(&self, len: usize, capacity: usize) -> ListMetricsSnapshot {
        ListMetricsSnapshot {
            insert_calls: self.insert_calls,
            insert_new: self.insert_new,
            insert_refreshes: self.insert_refreshes,
            evicted_entries: self.evicted_entries,
            remove_calls: self.remove_calls,
            remove_hits: self.remove_hits,
            remove_misses: self.remove_misses,
            touch_calls: self.touch_calls,
            touch_hits: self.touch_hits,
            touch_misses: self.touch_misses,
            clear_calls: self.clear_calls,
            list_len: len,
            capacity,
        }
    }
}

impl ListMetricsRecorder for ListMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }
    fn record_insert_refresh(&mut self) {
        self.insert_refreshes += 1;
    }
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }
    fn record_remove_hit(&mut self) {
        self.remove_calls += 1;
        self.remove_hits += 1;
    }
    fn record_remove_miss(&mut self) {
        self.remove_calls += 1;
        self.remove_misses += 1;
    }
    fn record_touch_hit(&mut self) {
        self.touch_calls += 1;
        self.touch_hits += 1;
    }
    fn record_touch_miss(&mut self) {
        self.touch_calls += 1;
        self.touch_misses += 1;
    }
    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}
