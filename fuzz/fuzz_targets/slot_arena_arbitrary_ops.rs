#![no_main]

use libfuzzer_sys::fuzz_target;
use lrulist::ds::SlotArena;

// Fuzz arbitrary operation sequences on a fixed-capacity SlotArena
//
// Tests random sequences of insert, remove, get_mut, clear operations and
// checks the occupied/free partition after every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let mut arena: SlotArena<u32> = SlotArena::with_capacity(capacity);
    let mut all_ids = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // insert
                let old_len = arena.len();
                match arena.insert(value) {
                    Ok(id) => {
                        all_ids.push(id);
                        assert_eq!(arena.get(id), Some(&value));
                        assert_eq!(arena.len(), old_len + 1);
                    }
                    Err(rejected) => {
                        assert_eq!(rejected, value);
                        assert!(arena.is_full());
                        assert_eq!(arena.free_head(), None);
                    }
                }
            }
            1 => {
                // remove; a freed slot is the next one handed out
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    let old_len = arena.len();
                    if arena.remove(id).is_some() {
                        assert_eq!(arena.len(), old_len - 1);
                        assert!(!arena.contains(id));
                        assert_eq!(arena.free_head(), Some(id));
                    }
                }
            }
            2 => {
                // get_mut
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                        assert_eq!(arena.get(id), Some(&value));
                    }
                }
            }
            3 => {
                // free chain length matches free_slots
                assert_eq!(arena.iter_free().count(), arena.free_slots());
                assert_eq!(arena.iter().count(), arena.len());
            }
            4 => {
                // clear
                arena.clear();
                all_ids.clear();
                assert!(arena.is_empty());
                assert_eq!(arena.free_slots(), capacity);
            }
            _ => unreachable!(),
        }

        assert_eq!(arena.len() + arena.free_slots(), capacity);
        assert!(arena.check_invariants().is_ok());

        idx += 2;
    }
});
