//! Unified list builder for both lookup strategies.
//!
//! Provides one `List<T>` type whose lookup engine (linear scan or hash
//! index) is chosen at construction time.
//!
//! ## Example
//!
//! ```rust
//! use lrulist::builder::{ListBuilder, Lookup};
//!
//! let mut list = ListBuilder::new(8).build::<&str>(Lookup::Indexed);
//! list.insert("C");
//! list.insert("D");
//! assert!(list.touch(&"C"));
//! assert_eq!(list.front(), Some(&"C"));
//! ```

use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::ds::intrusive_list::{IntrusiveListIter, Traverse};
use crate::error::{ConfigError, InvariantError};
use crate::list::{IndexedLruList, Insertion, LruList};
use crate::traits::{ReadOnlyList, RecencyList};

/// How a list locates values for `insert`, `remove` and `touch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
    /// Linear scan of the active chain. No extra memory per value.
    #[default]
    Scan,
    /// `FxHashMap` from value to slot. O(1) lookups; each value is cloned
    /// into the index.
    Indexed,
}

/// Unified list wrapper that provides a consistent API regardless of lookup.
pub struct List<T>
where
    T: Eq + Hash + Clone,
{
    inner: ListInner<T>,
}

enum ListInner<T>
where
    T: Eq + Hash + Clone,
{
    Scan(LruList<T>),
    Indexed(IndexedLruList<T>),
}

impl<T> List<T>
where
    T: Eq + Hash + Clone,
{
    /// Insert at the head, refreshing an equal value or evicting the LRU one.
    pub fn insert(&mut self, value: T) -> Insertion<T> {
        match &mut self.inner {
            ListInner::Scan(list) => list.insert(value),
            ListInner::Indexed(list) => list.insert(value),
        }
    }

    /// Insert at the head, handing an evicted value to `on_evict`.
    pub fn insert_with<F>(&mut self, value: T, on_evict: F) -> Insertion<T>
    where
        F: FnOnce(T),
    {
        match &mut self.inner {
            ListInner::Scan(list) => list.insert_with(value, on_evict),
            ListInner::Indexed(list) => list.insert_with(value, on_evict),
        }
    }

    /// Remove an equal value. Returns `None` if absent.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        match &mut self.inner {
            ListInner::Scan(list) => list.remove(value),
            ListInner::Indexed(list) => list.remove(value),
        }
    }

    /// Promote an equal value to the head. Returns `false` if absent.
    pub fn touch(&mut self, value: &T) -> bool {
        match &mut self.inner {
            ListInner::Scan(list) => list.touch(value),
            ListInner::Indexed(list) => list.touch(value),
        }
    }

    /// Promote an equal value and return a reference to it.
    pub fn find(&mut self, value: &T) -> Option<&T> {
        match &mut self.inner {
            ListInner::Scan(list) => list.find(value),
            ListInner::Indexed(list) => list.find(value),
        }
    }

    /// Check if an equal value is active.
    pub fn contains(&self, value: &T) -> bool {
        match &self.inner {
            ListInner::Scan(list) => list.contains(value),
            ListInner::Indexed(list) => list.contains(value),
        }
    }

    /// Return the number of active values.
    pub fn len(&self) -> usize {
        match &self.inner {
            ListInner::Scan(list) => list.len(),
            ListInner::Indexed(list) => list.len(),
        }
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the fixed capacity.
    pub fn capacity(&self) -> usize {
        match &self.inner {
            ListInner::Scan(list) => list.capacity(),
            ListInner::Indexed(list) => list.capacity(),
        }
    }

    /// Return the MRU value.
    pub fn front(&self) -> Option<&T> {
        match &self.inner {
            ListInner::Scan(list) => list.front(),
            ListInner::Indexed(list) => list.front(),
        }
    }

    /// Return the LRU value.
    pub fn back(&self) -> Option<&T> {
        match &self.inner {
            ListInner::Scan(list) => list.back(),
            ListInner::Indexed(list) => list.back(),
        }
    }

    /// Iterate values MRU to LRU.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        match &self.inner {
            ListInner::Scan(list) => list.iter(),
            ListInner::Indexed(list) => list.iter(),
        }
    }

    /// Iterate values MRU to LRU, then one empty entry per free slot.
    pub fn traverse(&self) -> Traverse<'_, T> {
        match &self.inner {
            ListInner::Scan(list) => list.traverse(),
            ListInner::Indexed(list) => list.traverse(),
        }
    }

    /// Clear all values.
    pub fn clear(&mut self) {
        match &mut self.inner {
            ListInner::Scan(list) => list.clear(),
            ListInner::Indexed(list) => list.clear(),
        }
    }

    /// Return the lookup strategy this list was built with.
    pub fn lookup(&self) -> Lookup {
        match &self.inner {
            ListInner::Scan(_) => Lookup::Scan,
            ListInner::Indexed(_) => Lookup::Indexed,
        }
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match &self.inner {
            ListInner::Scan(list) => list.check_invariants(),
            ListInner::Indexed(list) => list.check_invariants(),
        }
    }
}

impl<T> Debug for List<T>
where
    T: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("lookup", &self.lookup())
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

impl<T> ReadOnlyList<T> for List<T>
where
    T: Eq + Hash + Clone,
{
    fn contains(&self, value: &T) -> bool {
        List::contains(self, value)
    }

    fn len(&self) -> usize {
        List::len(self)
    }

    fn capacity(&self) -> usize {
        List::capacity(self)
    }

    fn traverse(&self) -> Traverse<'_, T> {
        List::traverse(self)
    }
}

impl<T> RecencyList<T> for List<T>
where
    T: Eq + Hash + Clone,
{
    fn insert(&mut self, value: T) -> Insertion<T> {
        List::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        List::remove(self, value)
    }

    fn touch(&mut self, value: &T) -> bool {
        List::touch(self, value)
    }

    fn clear(&mut self) {
        List::clear(self);
    }
}

/// Builder for creating list instances.
#[derive(Debug, Clone, Copy)]
pub struct ListBuilder {
    capacity: usize,
}

impl ListBuilder {
    /// Create a new list builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Build a list with the specified lookup strategy.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero; see [`try_build`](Self::try_build).
    ///
    /// # Example
    ///
    /// ```rust
    /// use lrulist::builder::{ListBuilder, Lookup};
    ///
    /// let scan = ListBuilder::new(16).build::<u64>(Lookup::Scan);
    /// let indexed = ListBuilder::new(16).build::<String>(Lookup::Indexed);
    /// assert_eq!(scan.capacity(), indexed.capacity());
    /// ```
    pub fn build<T>(self, lookup: Lookup) -> List<T>
    where
        T: Eq + Hash + Clone,
    {
        match self.try_build(lookup) {
            Ok(list) => list,
            Err(err) => panic!("invalid list configuration: {err}"),
        }
    }

    /// Build a list, rejecting invalid parameters.
    pub fn try_build<T>(self, lookup: Lookup) -> Result<List<T>, ConfigError>
    where
        T: Eq + Hash + Clone,
    {
        let inner = match lookup {
            Lookup::Scan => ListInner::Scan(LruList::try_new(self.capacity)?),
            Lookup::Indexed => ListInner::Indexed(IndexedLruList::try_new(self.capacity)?),
        };

        Ok(List { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKUPS: [Lookup; 2] = [Lookup::Scan, Lookup::Indexed];

    #[test]
    fn test_all_lookups_basic_ops() {
        for lookup in LOOKUPS {
            let mut list = ListBuilder::new(3).build::<u64>(lookup);
            assert_eq!(list.lookup(), lookup);

            // Insert
            assert_eq!(list.insert(1), Insertion::Inserted);
            assert_eq!(list.insert(2), Insertion::Inserted);
            assert_eq!(list.insert(1), Insertion::Refreshed(1));

            // Contains
            assert!(list.contains(&1));
            assert!(!list.contains(&99));

            // Touch / find
            assert!(list.touch(&2));
            assert_eq!(list.front(), Some(&2));
            assert_eq!(list.find(&1), Some(&1));
            assert_eq!(list.back(), Some(&2));

            // Remove
            assert_eq!(list.remove(&2), Some(2));
            assert_eq!(list.remove(&2), None);
            assert_eq!(list.len(), 1);

            // Clear
            list.clear();
            assert!(list.is_empty());
            assert!(list.check_invariants().is_ok());
        }
    }

    #[test]
    fn test_capacity_enforcement() {
        for lookup in LOOKUPS {
            let mut list = ListBuilder::new(2).build::<u32>(lookup);
            list.insert(1);
            list.insert(2);

            let mut dropped = Vec::new();
            list.insert_with(3, |v| dropped.push(v));
            assert_eq!(dropped, vec![1]);
            assert_eq!(list.len(), 2);
            assert_eq!(list.capacity(), 2);
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2]);
            assert_eq!(list.traverse().len(), 2);
        }
    }

    #[test]
    fn test_try_build_rejects_zero_capacity() {
        for lookup in LOOKUPS {
            assert!(ListBuilder::new(0).try_build::<u8>(lookup).is_err());
        }
    }

    #[test]
    fn test_default_lookup_is_scan() {
        assert_eq!(Lookup::default(), Lookup::Scan);
    }
}
