//! DHAT heap profiler for lrulist.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use lrulist::list::{IndexedLruList, LruList};
use lrulist::traits::RecencyList;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

/// Hotset workload: 90% of accesses hit 10% of values.
fn hotset_workload<L: RecencyList<u64>>(list: &mut L, operations: usize, universe: u64, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let hot_size = (universe / 10).max(1);

    for _ in 0..operations {
        let value = if rng.next_f64() < 0.9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (universe - hot_size))
        };

        if !list.touch(&value) {
            let _ = list.insert(value);
        }
    }
}

/// Remove/reinsert workload: keeps slots cycling through the free chain.
fn remove_churn<L: RecencyList<u64>>(list: &mut L, operations: usize, universe: u64, seed: u64) {
    let mut rng = XorShift64::new(seed);
    for _ in 0..operations {
        let value = rng.next_u64() % universe;
        if list.remove(&value).is_none() {
            let _ = list.insert(value);
        }
    }
}

/// Eviction churn: every insert is new, so every insert past capacity evicts.
fn eviction_churn<L: RecencyList<u64>>(list: &mut L, operations: usize) {
    for i in 0..operations {
        let _ = list.insert(u64::MAX - i as u64);
    }
}

fn run_workloads<L: RecencyList<u64>>(list: &mut L, operations: usize, universe: u64) {
    for i in 0..list.capacity() as u64 {
        let _ = list.insert(i);
    }

    let before = dhat::HeapStats::get();
    hotset_workload(list, operations, universe, 42);
    remove_churn(list, operations / 2, universe, 7);
    eviction_churn(list, operations / 4);
    let after = dhat::HeapStats::get();

    println!("  Final size: {}", list.len());
    println!(
        "  Allocations after warm-up: {}",
        after.total_blocks - before.total_blocks
    );
}

fn profile_scan() {
    println!("=== Profiling LruList (scan lookup) ===");
    let mut list = LruList::new(512);
    run_workloads(&mut list, 50_000, 2_048);
}

fn profile_indexed() {
    println!("=== Profiling IndexedLruList (hash lookup) ===");
    let mut list = IndexedLruList::new(4096);
    run_workloads(&mut list, 100_000, 16_384);
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("lrulist DHAT Heap Profiling");
    println!("===========================\n");

    profile_scan();
    profile_indexed();

    println!("\n===========================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
