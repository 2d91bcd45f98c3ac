// ==============================================
// CONCURRENT LIST TESTS (integration)
// ==============================================
//
// Hammers ConcurrentLruList from several threads and checks that the list
// never exceeds its capacity and that its chain invariants survive.

#![cfg(feature = "concurrency")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use lrulist::list::{ConcurrentLruList, Insertion};

// ==============================================
// Capacity under contention
// ==============================================

mod capacity {
    use super::*;

    #[test]
    fn concurrent_inserts_never_exceed_capacity() {
        let threads = 8;
        let per_thread = 500;
        let list: Arc<ConcurrentLruList<u64>> = Arc::new(ConcurrentLruList::new(16));
        let barrier = Arc::new(Barrier::new(threads));
        let evictions = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let list = list.clone();
                let barrier = barrier.clone();
                let evictions = evictions.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..per_thread {
                        let value = (t * per_thread + i) as u64;
                        if let Insertion::Evicted(_) = list.insert(value) {
                            evictions.fetch_add(1, Ordering::Relaxed);
                        }
                        assert!(list.len() <= list.capacity());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(list.len(), 16);
        assert_eq!(
            evictions.load(Ordering::Relaxed),
            threads * per_thread - 16
        );
        list.with_read(|inner| assert!(inner.check_invariants().is_ok()));
    }
}

// ==============================================
// Mixed operations
// ==============================================

mod mixed_ops {
    use super::*;

    #[test]
    fn insert_remove_touch_preserve_invariants() {
        let threads = 4;
        let list: Arc<ConcurrentLruList<u32>> = Arc::new(ConcurrentLruList::new(8));
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let list = list.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..1_000u32 {
                        let value = (i * 7 + t as u32) % 24;
                        match i % 3 {
                            0 => {
                                list.insert(value);
                            },
                            1 => {
                                list.touch(&value);
                            },
                            _ => {
                                list.remove(&value);
                            },
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        list.with_read(|inner| assert!(inner.check_invariants().is_ok()));
        let snapshot = list.snapshot();
        assert_eq!(snapshot.len(), 8);
        let active = snapshot.iter().take_while(|v| v.is_some()).count();
        assert_eq!(active, list.len());
        assert!(snapshot[active..].iter().all(Option::is_none));
    }

    #[test]
    fn dump_is_consistent_under_writers() {
        let list: Arc<ConcurrentLruList<u16>> = Arc::new(ConcurrentLruList::new(4));
        let writer = {
            let list = list.clone();
            thread::spawn(move || {
                for i in 0..2_000u16 {
                    list.insert(i % 10);
                }
            })
        };

        for _ in 0..200 {
            let text = list.dump();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 6);
            assert_eq!(lines[0], "START LIST");
            assert_eq!(lines[5], "END LIST");
        }

        writer.join().unwrap();
    }
}
