#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListMetricsSnapshot {
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

    // gauges captured at snapshot time
    pub list_len: usize,
    pub capacity: usize,
}
