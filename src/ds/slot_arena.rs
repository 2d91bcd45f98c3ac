//! Fixed-capacity slot pool with an intrusive free chain.
//!
//! All slots are allocated once at construction. A slot is either occupied
//! (holds a value) or vacant; vacant slots are threaded into a singly-linked
//! free chain through the slots themselves, so claiming and releasing a slot
//! is O(1) and never touches the allocator.
//!
//! ## Architecture
//!
//! ```text
//!   slots: Box<[Slot<T>]>          free_head ─► [2] ─► [0] ─► [3] ─► None
//!   ┌────────┬─────────────────────────────┐
//!   │ SlotId │ Slot                        │
//!   ├────────┼─────────────────────────────┤
//!   │ 0      │ Vacant { next_free: 3 }     │
//!   │ 1      │ Occupied(value)             │
//!   │ 2      │ Vacant { next_free: 0 }     │
//!   │ 3      │ Vacant { next_free: None }  │
//!   └────────┴─────────────────────────────┘
//! ```
//!
//! Released slots are pushed onto the front of the free chain, so the most
//! recently released slot is the next one claimed.
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::error::InvariantError;

/// Index of a slot inside a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<SlotId> },
}

/// Fixed pool of `capacity` slots; never grows or shrinks.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Box<[Slot<T>]>,
    free_head: Option<SlotId>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an arena with exactly `capacity` vacant slots chained in index
    /// order.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Self::vacant_slots(capacity),
            free_head: (capacity > 0).then_some(SlotId(0)),
            len: 0,
        }
    }

    fn vacant_slots(capacity: usize) -> Box<[Slot<T>]> {
        (0..capacity)
            .map(|idx| Slot::Vacant {
                next_free: (idx + 1 < capacity).then_some(SlotId(idx + 1)),
            })
            .collect()
    }

    /// Claims the first free slot and stores `value` in it.
    ///
    /// Returns the value back as `Err` if every slot is occupied.
    pub fn insert(&mut self, value: T) -> Result<SlotId, T> {
        let Some(id) = self.free_head else {
            return Err(value);
        };
        let next_free = match self.slots[id.0] {
            Slot::Vacant { next_free } => next_free,
            Slot::Occupied(_) => unreachable!("occupied slot {} on the free chain", id.0),
        };
        self.slots[id.0] = Slot::Occupied(value);
        self.free_head = next_free;
        self.len += 1;
        Ok(id)
    }

    /// Releases `id` onto the front of the free chain and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let released = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id);
        self.len -= 1;
        match released {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.free_head.is_none()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacant slots.
    pub fn free_slots(&self) -> usize {
        self.slots.len() - self.len
    }

    /// First slot on the free chain, `None` when full.
    pub fn free_head(&self) -> Option<SlotId> {
        self.free_head
    }

    /// Drops every value and rebuilds the free chain in index order.
    pub fn clear(&mut self) {
        let capacity = self.slots.len();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            *slot = Slot::Vacant {
                next_free: (idx + 1 < capacity).then_some(SlotId(idx + 1)),
            };
        }
        self.free_head = (!self.slots.is_empty()).then_some(SlotId(0));
        self.len = 0;
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Occupied(value) => Some((SlotId(idx), value)),
                Slot::Vacant { .. } => None,
            })
    }

    /// Walks the free chain from its head.
    pub fn iter_free(&self) -> FreeChainIter<'_, T> {
        FreeChainIter {
            arena: self,
            current: self.free_head,
        }
    }

    /// Checks that the free chain and the occupied slots partition the pool.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut on_chain = vec![false; self.slots.len()];
        let mut chained = 0usize;
        let mut current = self.free_head;

        while let Some(id) = current {
            let slot = self.slots.get(id.0).ok_or_else(|| {
                InvariantError::new(format!("free chain points past the pool at slot {}", id.0))
            })?;
            if std::mem::replace(&mut on_chain[id.0], true) {
                return Err(InvariantError::new(format!(
                    "free chain visits slot {} twice",
                    id.0
                )));
            }
            current = match slot {
                Slot::Vacant { next_free } => *next_free,
                Slot::Occupied(_) => {
                    return Err(InvariantError::new(format!(
                        "occupied slot {} is on the free chain",
                        id.0
                    )));
                },
            };
            chained += 1;
        }

        for (idx, slot) in self.slots.iter().enumerate() {
            if matches!(slot, Slot::Vacant { .. }) && !on_chain[idx] {
                return Err(InvariantError::new(format!(
                    "vacant slot {idx} is not on the free chain"
                )));
            }
        }

        if chained + self.len != self.slots.len() {
            return Err(InvariantError::new(format!(
                "{} free + {} occupied != capacity {}",
                chained,
                self.len,
                self.slots.len()
            )));
        }

        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("slot arena invariant violated: {err}");
        }
    }
}

/// Iterator over the free chain, head first.
pub struct FreeChainIter<'a, T> {
    arena: &'a SlotArena<T>,
    current: Option<SlotId>,
}

impl<T> Iterator for FreeChainIter<'_, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = match self.arena.slots.get(id.0)? {
            Slot::Vacant { next_free } => *next_free,
            Slot::Occupied(_) => None,
        };
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arena_starts_with_every_slot_free() {
        let arena: SlotArena<&str> = SlotArena::with_capacity(4);
        assert_eq!(arena.capacity(), 4);
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.free_slots(), 4);
        assert!(arena.is_empty());
        assert!(!arena.is_full());

        let chain: Vec<_> = arena.iter_free().map(SlotId::index).collect();
        assert_eq!(chain, vec![0, 1, 2, 3]);
        arena.debug_validate_invariants();
    }

    #[test]
    fn slot_arena_insert_until_full() {
        let mut arena = SlotArena::with_capacity(2);
        assert_eq!(arena.insert("a").map(SlotId::index), Ok(0));
        assert_eq!(arena.insert("b").map(SlotId::index), Ok(1));
        assert!(arena.is_full());
        assert_eq!(arena.free_head(), None);
        assert_eq!(arena.insert("c"), Err("c"));
        assert_eq!(arena.len(), 2);
        arena.debug_validate_invariants();
    }

    #[test]
    fn slot_arena_reuses_last_released_slot_first() {
        let mut arena = SlotArena::with_capacity(4);
        let a = arena.insert("a").unwrap();
        let b = arena.insert("b").unwrap();
        let c = arena.insert("c").unwrap();

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.remove(c), Some("c"));
        let chain: Vec<_> = arena.iter_free().collect();
        assert_eq!(chain, vec![c, a, SlotId(3)]);

        let d = arena.insert("d").unwrap();
        assert_eq!(d, c);
        assert_eq!(arena.get(d), Some(&"d"));
        assert_eq!(arena.get(b), Some(&"b"));
        arena.debug_validate_invariants();
    }

    #[test]
    fn slot_arena_remove_vacant_or_out_of_range_is_none() {
        let mut arena = SlotArena::with_capacity(2);
        let a = arena.insert(1).unwrap();
        assert_eq!(arena.remove(SlotId(1)), None);
        assert_eq!(arena.remove(SlotId(9)), None);
        assert_eq!(arena.remove(a), Some(1));
        assert_eq!(arena.remove(a), None);
        assert!(arena.is_empty());
        arena.debug_validate_invariants();
    }

    #[test]
    fn slot_arena_get_mut_and_iter() {
        let mut arena = SlotArena::with_capacity(3);
        let a = arena.insert(10).unwrap();
        let b = arena.insert(20).unwrap();
        if let Some(value) = arena.get_mut(b) {
            *value = 25;
        }
        let occupied: Vec<_> = arena.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(occupied, vec![(a, 10), (b, 25)]);
        assert!(arena.contains(a));
        assert!(!arena.contains(SlotId(2)));
    }

    #[test]
    fn slot_arena_clear_restores_index_order() {
        let mut arena = SlotArena::with_capacity(3);
        let a = arena.insert('a').unwrap();
        arena.insert('b').unwrap();
        arena.remove(a);
        arena.clear();

        assert!(arena.is_empty());
        let chain: Vec<_> = arena.iter_free().map(SlotId::index).collect();
        assert_eq!(chain, vec![0, 1, 2]);
        arena.debug_validate_invariants();
    }

    #[test]
    fn slot_arena_zero_capacity_is_always_full() {
        let mut arena = SlotArena::with_capacity(0);
        assert!(arena.is_full());
        assert!(arena.is_empty());
        assert_eq!(arena.insert(()), Err(()));
        assert!(arena.check_invariants().is_ok());
    }
}
