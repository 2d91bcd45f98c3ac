// ==============================================
// MODEL-BASED PROPERTY TESTS (integration)
// ==============================================
//
// Runs random operation sequences against both engines and a VecDeque model
// (front = MRU). After every step the engine must agree with the model on
// order, length and the full traversal, and its internal invariants must
// hold.

use std::collections::VecDeque;

use lrulist::builder::{ListBuilder, Lookup};
use lrulist::ds::ListEntry;
use lrulist::list::Insertion;
use lrulist::traits::{ReadOnlyList, RecencyList};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8),
    Remove(u8),
    Touch(u8),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..24).prop_map(Op::Insert),
        3 => (0u8..24).prop_map(Op::Remove),
        3 => (0u8..24).prop_map(Op::Touch),
        1 => Just(Op::Clear),
    ]
}

struct Model {
    capacity: usize,
    values: VecDeque<u8>,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: VecDeque::new(),
        }
    }

    fn position(&self, value: u8) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    fn insert(&mut self, value: u8) -> Insertion<u8> {
        if let Some(idx) = self.position(value) {
            self.values.remove(idx);
            self.values.push_front(value);
            return Insertion::Refreshed(value);
        }
        let evicted = if self.values.len() == self.capacity {
            self.values.pop_back()
        } else {
            None
        };
        self.values.push_front(value);
        match evicted {
            Some(old) => Insertion::Evicted(old),
            None => Insertion::Inserted,
        }
    }

    fn remove(&mut self, value: u8) -> Option<u8> {
        let idx = self.position(value)?;
        self.values.remove(idx)
    }

    fn touch(&mut self, value: u8) -> bool {
        match self.position(value) {
            Some(idx) => {
                self.values.remove(idx);
                self.values.push_front(value);
                true
            },
            None => false,
        }
    }
}

fn run_against_model(lookup: Lookup, capacity: usize, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut list = ListBuilder::new(capacity).build::<u8>(lookup);
    let mut model = Model::new(capacity);

    for op in ops {
        match *op {
            Op::Insert(v) => prop_assert_eq!(list.insert(v), model.insert(v)),
            Op::Remove(v) => prop_assert_eq!(list.remove(&v), model.remove(v)),
            Op::Touch(v) => prop_assert_eq!(list.touch(&v), model.touch(v)),
            Op::Clear => {
                list.clear();
                model.values.clear();
            },
        }

        prop_assert!(list.check_invariants().is_ok());
        prop_assert!(list.len() <= list.capacity());
        prop_assert_eq!(list.len(), model.values.len());

        let order: Vec<u8> = list.iter().copied().collect();
        prop_assert_eq!(&order, &Vec::from(model.values.clone()));

        let entries: Vec<ListEntry<'_, u8>> = list.traverse().collect();
        prop_assert_eq!(entries.len(), capacity);
        let first_empty = entries
            .iter()
            .position(|e| e.is_empty())
            .unwrap_or(capacity);
        prop_assert_eq!(first_empty, list.len());
        prop_assert!(entries[first_empty..].iter().all(|e| e.is_empty()));
    }
    Ok(())
}

proptest! {
    /// Property: the scan engine behaves exactly like the model
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_scan_matches_model(
        capacity in 1usize..12,
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        run_against_model(Lookup::Scan, capacity, &ops)?;
    }

    /// Property: the indexed engine behaves exactly like the model
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_indexed_matches_model(
        capacity in 1usize..12,
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        run_against_model(Lookup::Indexed, capacity, &ops)?;
    }

    /// Property: both engines produce identical traversals for any sequence
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_engines_agree(
        capacity in 1usize..8,
        values in prop::collection::vec(0u8..16, 0..64)
    ) {
        let mut scan = ListBuilder::new(capacity).build::<u8>(Lookup::Scan);
        let mut indexed = ListBuilder::new(capacity).build::<u8>(Lookup::Indexed);

        for (i, v) in values.into_iter().enumerate() {
            if i % 3 == 2 {
                RecencyList::touch(&mut scan, &v);
                RecencyList::touch(&mut indexed, &v);
            } else {
                RecencyList::insert(&mut scan, v);
                RecencyList::insert(&mut indexed, v);
            }
            prop_assert!(ReadOnlyList::traverse(&scan).eq(ReadOnlyList::traverse(&indexed)));
        }
    }

    /// Property: a miss on remove or touch never changes the traversal
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_misses_are_noops(
        values in prop::collection::vec(0u8..8, 0..32),
        absent in 100u8..200
    ) {
        let mut list = ListBuilder::new(4).build::<u8>(Lookup::Scan);
        for v in values {
            list.insert(v);
        }
        let before: Vec<Option<u8>> = list.traverse().map(|e| e.value().copied()).collect();

        prop_assert_eq!(list.remove(&absent), None);
        prop_assert!(!list.touch(&absent));

        let after: Vec<Option<u8>> = list.traverse().map(|e| e.value().copied()).collect();
        prop_assert_eq!(before, after);
    }
}
