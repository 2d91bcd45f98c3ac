#![no_main]

use libfuzzer_sys::fuzz_target;
use lrulist::dump::dump;
use lrulist::list::{IndexedLruList, Insertion, LruList};

// Fuzz arbitrary operation sequences on both list engines in lockstep
//
// Tests random sequences of insert, remove, touch, clear operations. Both
// engines must return identical results and render identical dumps.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 12) + 1;
    let mut scan: LruList<u8> = LruList::new(capacity);
    let mut indexed: IndexedLruList<u8> = IndexedLruList::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let value = data[idx + 1] % 32;

        match op {
            0 => {
                // insert
                let was_full = scan.is_full();
                let outcome = scan.insert(value);
                assert_eq!(outcome, indexed.insert(value));
                assert_eq!(scan.front(), Some(&value));
                if let Insertion::Evicted(_) = outcome {
                    assert!(was_full);
                }
            }
            1 => {
                // remove
                let removed = scan.remove(&value);
                assert_eq!(removed, indexed.remove(&value));
                assert!(!scan.contains(&value));
            }
            2 => {
                // touch
                let touched = scan.touch(&value);
                assert_eq!(touched, indexed.touch(&value));
                if touched {
                    assert_eq!(scan.front(), Some(&value));
                }
            }
            3 => {
                // clear
                scan.clear();
                indexed.clear();
            }
            _ => unreachable!(),
        }

        assert!(scan.len() <= capacity);
        assert!(scan.check_invariants().is_ok());
        assert!(indexed.check_invariants().is_ok());
        assert_eq!(dump(&scan).to_string(), dump(&indexed).to_string());

        idx += 2;
    }
});
