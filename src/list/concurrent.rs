//! Thread-safe wrapper around [`LruList`].
//!
//! Every mutation (including `touch`, which reorders) takes the write lock;
//! pure reads share the read lock. Values never escape the lock by reference:
//! use the `*_with` accessors, [`snapshot`](ConcurrentLruList::snapshot) or
//! [`dump`](ConcurrentLruList::dump) to observe contents.

use std::borrow::Borrow;
use std::fmt::{self, Display};

use parking_lot::RwLock;

use crate::dump::Dump;
use crate::error::ConfigError;
use crate::list::{Insertion, LruList};

/// `LruList` guarded by a `parking_lot::RwLock`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lrulist::list::ConcurrentLruList;
///
/// let list = Arc::new(ConcurrentLruList::new(4));
/// let writer = Arc::clone(&list);
/// std::thread::spawn(move || {
///     writer.insert(1);
///     writer.insert(2);
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(list.front_with(|v| *v), Some(2));
/// assert_eq!(list.snapshot(), [Some(2), Some(1), None, None]);
/// ```
pub struct ConcurrentLruList<T> {
    inner: RwLock<LruList<T>>,
}

impl<T> ConcurrentLruList<T> {
    /// Creates a list with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(LruList::new(capacity)),
        }
    }

    /// Creates a list with exactly `capacity` slots, rejecting zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: RwLock::new(LruList::try_new(capacity)?),
        })
    }

    /// Wraps an existing list.
    pub fn from_list(list: LruList<T>) -> Self {
        Self {
            inner: RwLock::new(list),
        }
    }

    /// Consumes the wrapper and returns the inner list.
    pub fn into_inner(self) -> LruList<T> {
        self.inner.into_inner()
    }

    pub fn len(&self) -> usize {
        let list = self.inner.read();
        list.len()
    }

    pub fn is_empty(&self) -> bool {
        let list = self.inner.read();
        list.is_empty()
    }

    pub fn capacity(&self) -> usize {
        let list = self.inner.read();
        list.capacity()
    }

    /// Drops every value.
    pub fn clear(&self) {
        let mut list = self.inner.write();
        list.clear();
    }

    /// Maps the MRU value under the read lock.
    pub fn front_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let list = self.inner.read();
        list.front().map(f)
    }

    /// Maps the LRU value under the read lock.
    pub fn back_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let list = self.inner.read();
        list.back().map(f)
    }

    /// Runs `f` with shared access to the inner list.
    pub fn with_read<R>(&self, f: impl FnOnce(&LruList<T>) -> R) -> R {
        let list = self.inner.read();
        f(&list)
    }

    /// Copies all `capacity` positions: values MRU to LRU, then `None` per
    /// free slot.
    pub fn snapshot(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        let list = self.inner.read();
        list.traverse()
            .map(|entry| entry.value().cloned())
            .collect()
    }

    /// Renders the list in the dump format under a single read lock.
    pub fn dump(&self) -> String
    where
        T: Display,
    {
        let list = self.inner.read();
        Dump::new(list.traverse()).to_string()
    }
}

impl<T: PartialEq> ConcurrentLruList<T> {
    /// Inserts `value` at the head; see [`LruList::insert`].
    pub fn insert(&self, value: T) -> Insertion<T> {
        let mut list = self.inner.write();
        list.insert(value)
    }

    /// Inserts `value`, calling `on_evict` while the write lock is held.
    pub fn insert_with<F>(&self, value: T, on_evict: F) -> Insertion<T>
    where
        F: FnOnce(T),
    {
        let mut list = self.inner.write();
        list.insert_with(value, on_evict)
    }

    /// Tries to insert without blocking; returns `None` if the lock is busy.
    pub fn try_insert(&self, value: T) -> Option<Insertion<T>> {
        let mut list = self.inner.try_write()?;
        Some(list.insert(value))
    }

    pub fn remove<Q>(&self, needle: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut list = self.inner.write();
        list.remove(needle)
    }

    pub fn touch<Q>(&self, needle: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut list = self.inner.write();
        list.touch(needle)
    }

    /// Tries to touch without blocking; returns `None` if the lock is busy.
    pub fn try_touch<Q>(&self, needle: &Q) -> Option<bool>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut list = self.inner.try_write()?;
        Some(list.touch(needle))
    }

    /// Promotes the value equal to `needle` and maps it under the write lock.
    pub fn find_with<Q, R>(&self, needle: &Q, f: impl FnOnce(&T) -> R) -> Option<R>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut list = self.inner.write();
        list.find(needle).map(f)
    }

    pub fn contains<Q>(&self, needle: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let list = self.inner.read();
        list.contains(needle)
    }
}

impl<T> From<LruList<T>> for ConcurrentLruList<T> {
    fn from(list: LruList<T>) -> Self {
        Self::from_list(list)
    }
}

impl<T> fmt::Debug for ConcurrentLruList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.inner.read();
        f.debug_struct("ConcurrentLruList")
            .field("capacity", &list.capacity())
            .field("len", &list.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrent_lru_list_basic_ops() {
        let list = ConcurrentLruList::new(3);
        list.insert("a");
        list.insert("b");
        assert_eq!(list.front_with(|v| *v), Some("b"));
        assert_eq!(list.back_with(|v| *v), Some("a"));

        assert!(list.touch("a"));
        assert_eq!(list.front_with(|v| *v), Some("a"));
        assert_eq!(list.remove("b"), Some("b"));
        assert!(!list.contains("b"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.capacity(), 3);
    }

    #[test]
    fn try_ops_fail_while_read_locked() {
        let list = ConcurrentLruList::new(2);
        list.insert(1);
        list.with_read(|_| {
            assert_eq!(list.try_touch(&1), None);
            assert_eq!(list.try_insert(2), None);
        });
        assert_eq!(list.try_touch(&1), Some(true));
        assert_eq!(list.try_insert(2), Some(Insertion::Inserted));
    }

    #[test]
    fn snapshot_and_dump_include_empty_slots() {
        let list = ConcurrentLruList::new(3);
        list.insert('x');
        assert_eq!(list.snapshot(), vec![Some('x'), None, None]);
        assert_eq!(
            list.dump(),
            "START LIST\nx\n[empty]\n[empty]\nEND LIST\n"
        );
    }

    #[test]
    fn find_with_promotes() {
        let list = ConcurrentLruList::new(3);
        list.insert(1);
        list.insert(2);
        assert_eq!(list.find_with(&1, |v| *v * 10), Some(10));
        assert_eq!(list.front_with(|v| *v), Some(1));
        assert_eq!(list.find_with(&9, |v| *v), None);
    }

    #[test]
    fn into_inner_returns_list() {
        let list = ConcurrentLruList::from(LruList::new(2));
        list.insert(7);
        let inner = list.into_inner();
        assert_eq!(inner.front(), Some(&7));
    }
}
