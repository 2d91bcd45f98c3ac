#![no_main]

use libfuzzer_sys::fuzz_target;
use lrulist::ds::IntrusiveList;

// Fuzz arbitrary operation sequences on a bounded IntrusiveList
//
// Tests random sequences of push_front, pop_back, move_to_front, remove,
// replace, clear operations.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let mut list: IntrusiveList<u32> = IntrusiveList::with_capacity(capacity);
    let mut all_ids = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // push_front
                let was_full = list.is_full();
                match list.push_front(value) {
                    Ok(id) => {
                        assert!(!was_full);
                        all_ids.push(id);
                        assert_eq!(list.front(), Some(&value));
                        assert_eq!(list.front_id(), Some(id));
                    }
                    Err(rejected) => {
                        assert!(was_full);
                        assert_eq!(rejected, value);
                    }
                }
            }
            1 => {
                // pop_back
                let old_len = list.len();
                let expected = list.back().copied();
                let popped = list.pop_back();
                assert_eq!(popped, expected);
                if popped.is_some() {
                    assert_eq!(list.len(), old_len - 1);
                }
            }
            2 => {
                // move_to_front
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    if list.move_to_front(id) {
                        assert_eq!(list.front_id(), Some(id));
                    }
                }
            }
            3 => {
                // remove
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    let old_len = list.len();
                    if list.remove(id).is_some() {
                        assert_eq!(list.len(), old_len - 1);
                        assert!(!list.contains(id));
                    }
                }
            }
            4 => {
                // replace
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    let order_before = list.iter_ids().collect::<Vec<_>>();
                    if list.replace(id, value).is_ok() {
                        assert_eq!(list.get(id), Some(&value));
                        assert_eq!(list.iter_ids().collect::<Vec<_>>(), order_before);
                    }
                }
            }
            5 => {
                // traverse covers every slot, values first
                let entries: Vec<_> = list.traverse().collect();
                assert_eq!(entries.len(), capacity);
                assert!(entries[..list.len()].iter().all(|e| !e.is_empty()));
                assert!(entries[list.len()..].iter().all(|e| e.is_empty()));
                assert!(list.iter().rev().eq(list.iter().collect::<Vec<_>>().into_iter().rev()));
            }
            6 => {
                // clear
                list.clear();
                all_ids.clear();
                assert!(list.is_empty());
                assert_eq!(list.front(), None);
                assert_eq!(list.back(), None);
            }
            _ => unreachable!(),
        }

        assert!(list.check_invariants().is_ok());

        idx += 2;
    }
});
