//! Fixed-capacity MRU-ordered list with lookup by equality.
//!
//! `LruList` keeps at most `capacity` values ordered from most recently used
//! (head) to least recently used (tail). Every slot is allocated when the
//! list is built; afterwards slots only move between the active chain and
//! the free chain.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │                         LruList<T> (capacity 8)                       │
//! │                                                                       │
//! │   active chain (IntrusiveList)                                        │
//! │   head (MRU)                                             tail (LRU)   │
//! │     [I] ◄──► [H] ◄──► [G] ◄──► [E] ◄──► [D]                           │
//! │                                                                       │
//! │   free chain (SlotArena)                                              │
//! │   free_head ─► [slot of C] ─► [slot of F] ─► [slot of J] ─► None      │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation        | Time   | Notes                                           |
//! |------------------|--------|-------------------------------------------------|
//! | `insert`         | O(n)   | Scan for an equal value, then O(1) link/evict   |
//! | `remove`         | O(n)   | Scan, then O(1) unlink + release                |
//! | `touch`          | O(n)   | Scan, then O(1) move to head                    |
//! | `traverse`       | O(cap) | Values MRU → LRU, then one empty per free slot  |
//! | `len`/`capacity` | O(1)   |                                                 |
//!
//! Lookups scan at most `len` slots; for large lists of hashable values use
//! [`IndexedLruList`](crate::list::IndexedLruList).
//!
//! ## Example Usage
//!
//! ```
//! use lrulist::list::{Insertion, LruList};
//!
//! let mut list = LruList::new(3);
//! list.insert("a");
//! list.insert("b");
//! list.insert("c");
//!
//! // Full: the LRU value is evicted to make room.
//! assert_eq!(list.insert("d"), Insertion::Evicted("a"));
//!
//! // Touch promotes to the head without changing membership.
//! assert!(list.touch("b"));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["b", "d", "c"]);
//!
//! // Misses are no-ops.
//! assert_eq!(list.remove("zzz"), None);
//! assert!(!list.touch("zzz"));
//! ```
//!
//! ## Thread Safety
//!
//! `LruList` is not internally synchronized. Wrap it in a lock, or use
//! `ConcurrentLruList` (feature `concurrency`).

use std::borrow::Borrow;
use std::fmt;

use tracing::trace;

use crate::ds::intrusive_list::{IntrusiveList, IntrusiveListIter, Traverse};
use crate::ds::slot_arena::SlotId;
use crate::error::{ConfigError, InvariantError};
use crate::list::Insertion;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::ListMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::ListMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{ListMetricsRecorder, MetricsReset, MetricsSnapshotProvider};
use crate::traits::{ReadOnlyList, RecencyList};

/// Fixed-capacity list ordered from most to least recently used.
///
/// Values are unique under `PartialEq`: inserting a value equal to an active
/// one promotes it instead of adding a duplicate.
///
/// # Example
///
/// ```
/// use lrulist::list::LruList;
///
/// let mut list: LruList<String> = LruList::new(8);
/// list.insert("C".to_string());
/// list.insert("D".to_string());
///
/// // `String` values can be looked up by `&str`.
/// assert!(list.contains("C"));
/// assert_eq!(list.front().map(String::as_str), Some("D"));
/// assert_eq!(list.free_slots(), 6);
/// ```
pub struct LruList<T> {
    list: IntrusiveList<T>,

    #[cfg(feature = "metrics")]
    metrics: ListMetrics,
}

impl<T> LruList<T> {
    /// Creates a list with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for
    /// user-supplied capacities.
    ///
    /// # Example
    ///
    /// ```
    /// use lrulist::list::LruList;
    ///
    /// let list: LruList<u32> = LruList::new(8);
    /// assert_eq!(list.capacity(), 8);
    /// assert!(list.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(list) => list,
            Err(err) => panic!("invalid LruList configuration: {err}"),
        }
    }

    /// Creates a list with exactly `capacity` slots, rejecting zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        let capacity = ConfigError::check_capacity(capacity)?;
        Ok(Self {
            list: IntrusiveList::with_capacity(capacity),
            #[cfg(feature = "metrics")]
            metrics: ListMetrics::default(),
        })
    }

    /// Returns the number of active values.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if no value is active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if every slot holds a value; the next new insert evicts.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.list.is_full()
    }

    /// Returns the fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }

    /// Returns the number of unused slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.list.free_slots()
    }

    /// Returns the most recently used value without promoting it.
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns the least recently used value (the next eviction victim).
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Iterates active values from MRU to LRU. Use `.rev()` for LRU to MRU.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        self.list.iter()
    }

    /// Iterates all `capacity` positions: active values MRU to LRU, then one
    /// [`ListEntry::Empty`](crate::ds::ListEntry::Empty) per unused slot.
    ///
    /// # Example
    ///
    /// ```
    /// use lrulist::ds::ListEntry;
    /// use lrulist::list::LruList;
    ///
    /// let mut list = LruList::new(3);
    /// list.insert(1);
    /// list.insert(2);
    ///
    /// let entries: Vec<_> = list.traverse().collect();
    /// assert_eq!(
    ///     entries,
    ///     [ListEntry::Occupied(&2), ListEntry::Occupied(&1), ListEntry::Empty]
    /// );
    /// ```
    pub fn traverse(&self) -> Traverse<'_, T> {
        self.list.traverse()
    }

    /// Removes the first value (MRU to LRU) matching `pred`.
    ///
    /// For hosts whose values are compared by a custom predicate rather than
    /// `PartialEq`.
    pub fn remove_by<P>(&mut self, pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let Some(id) = self.position_by(pred) else {
            trace!("remove: no matching entry");
            #[cfg(feature = "metrics")]
            self.metrics.record_remove_miss();
            return None;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_hit();

        let removed = self.list.remove(id);

        #[cfg(debug_assertions)]
        self.list.debug_validate_invariants();
        removed
    }

    /// Promotes the first value (MRU to LRU) matching `pred` to the head.
    ///
    /// Returns `false` and leaves the order unchanged if nothing matches.
    pub fn touch_by<P>(&mut self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let Some(id) = self.position_by(pred) else {
            trace!("touch: no matching entry");
            #[cfg(feature = "metrics")]
            self.metrics.record_touch_miss();
            return false;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_hit();

        self.list.move_to_front(id)
    }

    /// Drops every value and returns all slots to the free chain.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.list.clear();
    }

    /// Verifies the chain and free-pool invariants.
    ///
    /// Checks that the active chain visits exactly `len` slots in both
    /// directions, that every slot is either on the active chain or on the
    /// free chain, and that the head/free-head bookkeeping matches `len`.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()
    }

    fn position_by<P>(&self, mut pred: P) -> Option<SlotId>
    where
        P: FnMut(&T) -> bool,
    {
        self.list
            .iter_entries()
            .find(|(_, value)| pred(value))
            .map(|(id, _)| id)
    }

    fn evict_if_full(&mut self) -> Option<T> {
        if !self.list.is_full() {
            return None;
        }
        let id = self.list.back_id()?;
        trace!(
            slot = id.index(),
            capacity = self.list.capacity(),
            "evicting least-recently-used entry"
        );
        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();

        self.list.remove(id)
    }
}

impl<T: PartialEq> LruList<T> {
    fn position<Q>(&self, needle: &Q) -> Option<SlotId>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position_by(|value| <T as Borrow<Q>>::borrow(value) == needle)
    }

    /// Inserts `value` at the head (MRU position).
    ///
    /// - If an equal value is active, it is promoted and its stored value is
    ///   replaced: [`Insertion::Refreshed`] carries the old one.
    /// - Otherwise a free slot is claimed ([`Insertion::Inserted`]), or, when
    ///   the list is full, the LRU value is evicted and its slot reused
    ///   ([`Insertion::Evicted`]).
    ///
    /// Never fails and never grows the list past its capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use lrulist::list::{Insertion, LruList};
    ///
    /// let mut list = LruList::new(2);
    /// assert_eq!(list.insert('a'), Insertion::Inserted);
    /// assert_eq!(list.insert('b'), Insertion::Inserted);
    /// assert_eq!(list.insert('a'), Insertion::Refreshed('a'));
    /// assert_eq!(list.insert('c'), Insertion::Evicted('b'));
    /// ```
    pub fn insert(&mut self, value: T) -> Insertion<T> {
        let mut evicted = None;
        let outcome = self.insert_with(value, |lru| evicted = Some(lru));
        match evicted {
            Some(lru) => Insertion::Evicted(lru),
            None => outcome,
        }
    }

    /// Like [`insert`](Self::insert), but hands an evicted value to
    /// `on_evict` before its slot is reused.
    ///
    /// Never returns [`Insertion::Evicted`]; `on_evict` is called at most once.
    ///
    /// # Example
    ///
    /// ```
    /// use lrulist::list::LruList;
    ///
    /// let mut list = LruList::new(1);
    /// list.insert("A");
    ///
    /// let mut dropped = Vec::new();
    /// list.insert_with("B", |old| dropped.push(old));
    /// assert_eq!(dropped, ["A"]);
    /// ```
    pub fn insert_with<F>(&mut self, value: T, on_evict: F) -> Insertion<T>
    where
        F: FnOnce(T),
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let value = match self.position(&value) {
            Some(id) => {
                self.list.move_to_front(id);
                match self.list.replace(id, value) {
                    Ok(previous) => {
                        #[cfg(feature = "metrics")]
                        self.metrics.record_insert_refresh();
                        return Insertion::Refreshed(previous);
                    },
                    Err(value) => value,
                }
            },
            None => value,
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if let Some(lru) = self.evict_if_full() {
            on_evict(lru);
        }
        if self.list.push_front(value).is_err() {
            unreachable!("no free slot after eviction; capacity is non-zero");
        }

        #[cfg(debug_assertions)]
        self.list.debug_validate_invariants();
        Insertion::Inserted
    }

    /// Removes the active value equal to `needle` and returns it.
    ///
    /// Returns `None` and leaves the list untouched if no value matches.
    pub fn remove<Q>(&mut self, needle: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.remove_by(|value| <T as Borrow<Q>>::borrow(value) == needle)
    }

    /// Promotes the active value equal to `needle` to the head.
    ///
    /// Returns `false` and leaves the order unchanged if no value matches.
    /// Touching the head is a successful no-op.
    pub fn touch<Q>(&mut self, needle: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.touch_by(|value| <T as Borrow<Q>>::borrow(value) == needle)
    }

    /// Promotes the value equal to `needle` and returns a reference to it.
    pub fn find<Q>(&mut self, needle: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        if !self.touch(needle) {
            return None;
        }
        self.list.front()
    }

    /// Returns the value equal to `needle` without promoting it.
    pub fn peek<Q>(&self, needle: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(needle).and_then(|id| self.list.get(id))
    }

    /// Returns `true` if a value equal to `needle` is active.
    pub fn contains<Q>(&self, needle: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(needle).is_some()
    }
}

impl<T: PartialEq> Extend<T> for LruList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LruList<T> {
    type Item = &'a T;
    type IntoIter = IntrusiveListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for LruList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruList")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> ReadOnlyList<T> for LruList<T> {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        LruList::contains(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.list.capacity()
    }

    fn traverse(&self) -> Traverse<'_, T> {
        self.list.traverse()
    }
}

impl<T: PartialEq> RecencyList<T> for LruList<T> {
    #[inline]
    fn insert(&mut self, value: T) -> Insertion<T> {
        LruList::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> Option<T> {
        LruList::remove(self, value)
    }

    #[inline]
    fn touch(&mut self, value: &T) -> bool {
        LruList::touch(self, value)
    }

    fn clear(&mut self) {
        LruList::clear(self);
    }
}

#[cfg(feature = "metrics")]
impl<T> LruList<T> {
    /// Returns a snapshot of list metrics.
    pub fn metrics_snapshot(&self) -> ListMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<ListMetricsSnapshot> for LruList<T> {
    fn snapshot(&self) -> ListMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsReset for LruList<T> {
    fn reset_metrics(&mut self) {
        self.metrics = ListMetrics::default();
    }
}
