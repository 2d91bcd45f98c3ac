// ==============================================
// REFERENCE SCENARIO TESTS (integration)
// ==============================================
//
// Drives a capacity-8 list through the insert / remove / use sequence and
// compares the rendered dump text line for line. Each scenario runs against
// both lookup engines through the builder.

use lrulist::builder::{List, ListBuilder, Lookup};
use lrulist::dump::{dump, write_list};
use lrulist::list::{Insertion, LruList};

const CAPACITY: usize = 8;
const LOOKUPS: [Lookup; 2] = [Lookup::Scan, Lookup::Indexed];

fn expected_dump(values: &[&str]) -> String {
    let mut text = String::from("START LIST\n");
    for value in values {
        text.push_str(value);
        text.push('\n');
    }
    for _ in values.len()..CAPACITY {
        text.push_str("[empty]\n");
    }
    text.push_str("END LIST\n");
    text
}

fn filled(lookup: Lookup) -> List<&'static str> {
    let mut list = ListBuilder::new(CAPACITY).build(lookup);
    for name in ["C", "D", "E", "F", "G", "H", "I", "J"] {
        assert_eq!(list.insert(name), Insertion::Inserted);
    }
    list
}

// ==============================================
// Insert
// ==============================================

mod insert {
    use super::*;

    #[test]
    fn fill_to_capacity_prints_mru_first() {
        for lookup in LOOKUPS {
            let list = filled(lookup);
            assert_eq!(
                dump(&list).to_string(),
                expected_dump(&["J", "I", "H", "G", "F", "E", "D", "C"]),
                "lookup {:?}",
                lookup
            );
        }
    }

    #[test]
    fn overflow_drops_oldest_values_in_order() {
        for lookup in LOOKUPS {
            let mut list = ListBuilder::new(CAPACITY).build(lookup);
            let mut dropped = Vec::new();
            for name in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"] {
                list.insert_with(name, |old| dropped.push(old));
            }

            assert_eq!(dropped, vec!["A", "B"]);
            assert_eq!(
                dump(&list).to_string(),
                expected_dump(&["J", "I", "H", "G", "F", "E", "D", "C"])
            );
        }
    }

    #[test]
    fn empty_list_prints_only_placeholders() {
        let list: LruList<&str> = LruList::new(CAPACITY);
        assert_eq!(dump(&list).to_string(), expected_dump(&[]));
    }
}

// ==============================================
// Remove
// ==============================================

mod remove {
    use super::*;

    #[test]
    fn remove_three_leaves_three_placeholders() {
        for lookup in LOOKUPS {
            let mut list = filled(lookup);
            for name in ["F", "J", "C"] {
                assert_eq!(list.remove(&name), Some(name));
            }
            assert_eq!(
                dump(&list).to_string(),
                expected_dump(&["I", "H", "G", "E", "D"])
            );
            assert!(list.check_invariants().is_ok());
        }
    }

    #[test]
    fn removing_evicted_value_misses() {
        for lookup in LOOKUPS {
            let mut list = ListBuilder::new(CAPACITY).build(lookup);
            for name in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"] {
                list.insert(name);
            }
            let before = dump(&list).to_string();
            assert_eq!(list.remove(&"A"), None);
            assert_eq!(dump(&list).to_string(), before);
        }
    }
}

// ==============================================
// Touch
// ==============================================

mod touch {
    use super::*;

    #[test]
    fn touch_after_remove_reorders_head() {
        for lookup in LOOKUPS {
            let mut list = filled(lookup);
            for name in ["F", "J", "C"] {
                list.remove(&name);
            }
            assert!(list.touch(&"D"));
            assert!(list.touch(&"G"));
            assert_eq!(
                dump(&list).to_string(),
                expected_dump(&["G", "D", "I", "H", "E"])
            );
        }
    }

    #[test]
    fn find_sequence_matches_touch_sequence() {
        let mut list: LruList<&str> = LruList::new(CAPACITY);
        list.extend(["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        for name in ["J", "F", "C"] {
            list.remove(name);
        }

        assert_eq!(list.find("A"), None);
        for name in ["I", "D", "G"] {
            assert_eq!(list.find(name), Some(&name));
        }
        assert_eq!(
            dump(&list).to_string(),
            expected_dump(&["G", "D", "I", "H", "E"])
        );
    }
}

// ==============================================
// Output sink
// ==============================================

#[test]
fn write_list_matches_display() {
    let list = filled(Lookup::Scan);
    let mut out = Vec::new();
    write_list(&mut out, &list).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), dump(&list).to_string());
}
