//! Bounded intrusive doubly linked list backed by a fixed `SlotArena`.
//!
//! Nodes live in a `SlotArena` whose capacity is fixed at construction and
//! are linked by `SlotId`, giving stable handles and O(1) splice/move
//! operations without pointer chasing or allocation after construction.
//! Slots not on the active chain sit on the arena's free chain.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>, capacity 5)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Slot                                        │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ 0      │ Node { value: B, prev: Some(2), next: 1 }   │
//!   │ 1      │ Node { value: C, prev: Some(0), next: None }│
//!   │ 2      │ Node { value: A, prev: None, next: Some(0) }│
//!   │ 3      │ Vacant { next_free: Some(4) }               │
//!   │ 4      │ Vacant { next_free: None }                  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [2] ◄──► [0] ◄──► [1] ◄── tail        free_head ─► [3] ─► [4]
//!   (MRU)                     (LRU)
//! ```
//!
//! ## Operations
//! - `push_front(value)`: claim a free slot + attach to head
//! - `move_to_front(id)`: detach + attach to head
//! - `pop_back()` / `remove(id)`: detach + release slot to the free chain
//!
//! ## Performance
//! - `push_front` / `pop_back` / `remove`: O(1)
//! - `move_to_front`: O(1)
//! - `iter` / `traverse`: O(capacity)
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::iter::FusedIterator;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

#[derive(Debug)]
/// Bounded list that stores nodes in a fixed `SlotArena` and links them via `SlotId`.
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes on the active chain.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if no free slot remains.
    pub fn is_full(&self) -> bool {
        self.arena.is_full()
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns the number of slots on the free chain.
    pub fn free_slots(&self) -> usize {
        self.arena.free_slots()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front (MRU) of the list.
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the front (MRU) of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the value at the back (LRU) of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the back (LRU) of the list.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns an iterator of SlotIds from front to back.
    pub fn iter_ids(&self) -> IntrusiveListIdIter<'_, T> {
        IntrusiveListIdIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of `(SlotId, &T)` from front to back.
    pub fn iter_entries(&self) -> IntrusiveListEntryIter<'_, T> {
        IntrusiveListEntryIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns the active values front to back followed by one
    /// [`ListEntry::Empty`] per free slot.
    pub fn traverse(&self) -> Traverse<'_, T> {
        Traverse {
            values: self.iter(),
            empty: self.free_slots(),
        }
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Swaps the value stored at `id` without relinking it.
    ///
    /// Returns the previous value, or hands `value` back if `id` is not present.
    pub fn replace(&mut self, id: SlotId, value: T) -> Result<T, T> {
        match self.arena.get_mut(id) {
            Some(node) => Ok(std::mem::replace(&mut node.value, value)),
            None => Err(value),
        }
    }

    /// Claims a free slot for `value` and links it at the front.
    ///
    /// Hands `value` back if the list is full.
    pub fn push_front(&mut self, value: T) -> Result<SlotId, T> {
        let id = self
            .arena
            .insert(Node {
                value,
                prev: None,
                next: self.head,
            })
            .map_err(|node| node.value)?;
        if let Some(head) = self.head {
            if let Some(node) = self.arena.get_mut(head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        Ok(id)
    }

    /// Removes and returns the back (LRU) value, releasing its slot.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Clears the list and returns every slot to the free chain.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the list order as SlotIds from head to tail.
    pub fn debug_snapshot_ids(&self) -> Vec<SlotId> {
        self.iter_ids().collect()
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.head = next;
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.arena.get_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: SlotId) -> Option<()> {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_head;
        } else {
            return None;
        }
        if let Some(old_head) = old_head {
            if let Some(head_node) = self.arena.get_mut(old_head) {
                head_node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        Some(())
    }

    /// Verifies chain shape, endpoint bookkeeping, and the arena partition.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.arena.check_invariants()?;

        if self.head.is_none() != self.is_empty() {
            return Err(InvariantError::new(format!(
                "head is {:?} but {} nodes are active",
                self.head,
                self.len()
            )));
        }
        if self.tail.is_none() != self.is_empty() {
            return Err(InvariantError::new(format!(
                "tail is {:?} but {} nodes are active",
                self.tail,
                self.len()
            )));
        }

        let mut forward = Vec::with_capacity(self.len());
        let mut current = self.head;
        let mut prev = None;
        while let Some(id) = current {
            if forward.len() >= self.len() {
                return Err(InvariantError::new("active chain is longer than len"));
            }
            let node = self.arena.get(id).ok_or_else(|| {
                InvariantError::new(format!("active chain reaches vacant slot {}", id.index()))
            })?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "slot {} has prev {:?}, expected {:?}",
                    id.index(),
                    node.prev,
                    prev
                )));
            }
            forward.push(id);
            prev = Some(id);
            current = node.next;
        }
        if forward.len() != self.len() {
            return Err(InvariantError::new(format!(
                "active chain visits {} slots, len is {}",
                forward.len(),
                self.len()
            )));
        }
        if forward.last().copied() != self.tail {
            return Err(InvariantError::new("active chain does not end at tail"));
        }

        let mut current = self.tail;
        for expected in forward.iter().rev() {
            let Some(id) = current else {
                return Err(InvariantError::new("backward walk ended early"));
            };
            if id != *expected {
                return Err(InvariantError::new(format!(
                    "backward walk reached slot {}, expected {}",
                    id.index(),
                    expected.index()
                )));
            }
            current = self.arena.get(id).and_then(|node| node.prev);
        }
        if current.is_some() {
            return Err(InvariantError::new("backward walk continues past head"));
        }

        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("intrusive list invariant violated: {err}");
        }
    }
}

/// Iterator over values from front (MRU) to back (LRU).
pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<T> Clone for IntrusiveListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let node = self.list.arena.get(id)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntrusiveListIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let node = self.list.arena.get(id)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for IntrusiveListIter<'_, T> {}

impl<T> FusedIterator for IntrusiveListIter<'_, T> {}

/// Iterator over SlotIds from front to back.
pub struct IntrusiveListIdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<T> Iterator for IntrusiveListIdIter<'_, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(id)
    }
}

/// Iterator over `(SlotId, &T)` pairs from front to back.
pub struct IntrusiveListEntryIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListEntryIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some((id, &node.value))
    }
}

/// One position of a full traversal: an active value or an unused slot.
#[derive(Debug, PartialEq, Eq)]
pub enum ListEntry<'a, T> {
    Occupied(&'a T),
    Empty,
}

impl<T> Clone for ListEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListEntry<'_, T> {}

impl<'a, T> ListEntry<'a, T> {
    /// Returns the stored value, `None` for an unused slot.
    pub fn value(self) -> Option<&'a T> {
        match self {
            ListEntry::Occupied(value) => Some(value),
            ListEntry::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, ListEntry::Empty)
    }
}

/// Full traversal of a list: active values MRU to LRU, then one
/// [`ListEntry::Empty`] per unused slot. Always yields `capacity` items.
///
/// A clone resumes from the current position; calling `traverse()` again
/// starts over from the head.
pub struct Traverse<'a, T> {
    values: IntrusiveListIter<'a, T>,
    empty: usize,
}

impl<T> Clone for Traverse<'_, T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            empty: self.empty,
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = ListEntry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.values.next() {
            return Some(ListEntry::Occupied(value));
        }
        if self.empty == 0 {
            return None;
        }
        self.empty -= 1;
        Some(ListEntry::Empty)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.values.len() + self.empty;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Traverse<'_, T> {}

impl<T> FusedIterator for Traverse<'_, T> {}
