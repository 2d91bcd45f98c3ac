//! Fixed-capacity MRU-ordered list with a hash index.
//!
//! Same recency semantics as [`LruList`](crate::list::LruList), but values are
//! located through an `FxHashMap<K, SlotId>` instead of a scan, so `insert`,
//! `remove` and `touch` are O(1) on average.
//!
//! ```text
//!   index: FxHashMap<K, SlotId>          list: IntrusiveList<K>
//!   ┌──────────┬────────┐
//!   │  "G"     │ slot 4 │ ───────────►  head ─► [G] ◄──► [D] ◄──► [I] ◄─ tail
//!   │  "D"     │ slot 1 │ ─────────────────────────┘        ▲
//!   │  "I"     │ slot 6 │ ──────────────────────────────────┘
//!   └──────────┴────────┘
//! ```
//!
//! Each active key is stored twice (once in the list slot, once as the map
//! key), hence the `Clone` bound. The map is reserved for `capacity` entries
//! at construction.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
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

/// Fixed-capacity MRU list of hashable keys.
///
/// # Example
///
/// ```
/// use lrulist::list::{IndexedLruList, Insertion};
///
/// let mut list = IndexedLruList::new(2);
/// list.insert(10_u64);
/// list.insert(20);
/// assert_eq!(list.insert(30), Insertion::Evicted(10));
///
/// assert!(list.touch(&20));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [20, 30]);
/// ```
pub struct IndexedLruList<K> {
    list: IntrusiveList<K>,
    index: FxHashMap<K, SlotId>,

    #[cfg(feature = "metrics")]
    metrics: ListMetrics,
}

impl<K> IndexedLruList<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a list with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(list) => list,
            Err(err) => panic!("invalid IndexedLruList configuration: {err}"),
        }
    }

    /// Creates a list with exactly `capacity` slots, rejecting zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        let capacity = ConfigError::check_capacity(capacity)?;
        Ok(Self {
            list: IntrusiveList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            #[cfg(feature = "metrics")]
            metrics: ListMetrics::default(),
        })
    }

    /// Inserts `key` at the head; see [`LruList::insert`](crate::list::LruList::insert).
    pub fn insert(&mut self, key: K) -> Insertion<K> {
        let mut evicted = None;
        let outcome = self.insert_with(key, |lru| evicted = Some(lru));
        match evicted {
            Some(lru) => Insertion::Evicted(lru),
            None => outcome,
        }
    }

    /// Inserts `key` at the head, handing an evicted key to `on_evict`.
    pub fn insert_with<F>(&mut self, key: K, on_evict: F) -> Insertion<K>
    where
        F: FnOnce(K),
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let key = match self.index.get(&key) {
            Some(&id) => {
                self.list.move_to_front(id);
                match self.list.replace(id, key) {
                    Ok(previous) => {
                        #[cfg(feature = "metrics")]
                        self.metrics.record_insert_refresh();
                        return Insertion::Refreshed(previous);
                    },
                    Err(key) => key,
                }
            },
            None => key,
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if let Some(lru) = self.evict_if_full() {
            on_evict(lru);
        }
        let indexed = key.clone();
        match self.list.push_front(key) {
            Ok(id) => {
                self.index.insert(indexed, id);
            },
            Err(_) => unreachable!("no free slot after eviction; capacity is non-zero"),
        }

        #[cfg(debug_assertions)]
        self.list.debug_validate_invariants();
        Insertion::Inserted
    }

    /// Removes `key` and returns the stored value, or `None` if absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(id) = self.index.remove(key) else {
            trace!("remove: key not indexed");
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

    /// Promotes `key` to the head; returns `false` if absent.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&id) = self.index.get(key) else {
            trace!("touch: key not indexed");
            #[cfg(feature = "metrics")]
            self.metrics.record_touch_miss();
            return false;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_hit();

        self.list.move_to_front(id)
    }

    /// Promotes `key` and returns a reference to the stored value.
    pub fn find<Q>(&mut self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.touch(key) {
            return None;
        }
        self.list.front()
    }

    /// Returns the stored value for `key` without promoting it.
    pub fn peek<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        self.list.get(id)
    }

    /// Returns `true` if `key` is active.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Drops every key and returns all slots to the free chain.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.list.clear();
        self.index.clear();
    }

    /// Verifies the list invariants and that the index mirrors the list.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;

        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but list holds {}",
                self.index.len(),
                self.list.len()
            )));
        }
        for (key, &id) in &self.index {
            match self.list.get(id) {
                Some(stored) if stored == key => {},
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "index entry points at slot {} holding a different key",
                        id.index()
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "index entry points at free slot {}",
                        id.index()
                    )));
                },
            }
        }
        Ok(())
    }

    fn evict_if_full(&mut self) -> Option<K> {
        if !self.list.is_full() {
            return None;
        }
        let id = self.list.back_id()?;
        trace!(
            slot = id.index(),
            capacity = self.list.capacity(),
            "evicting least-recently-used key"
        );
        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();

        let evicted = self.list.remove(id)?;
        self.index.remove(&evicted);
        Some(evicted)
    }
}

impl<K> IndexedLruList<K> {
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.list.is_full()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }

    #[inline]
    pub fn free_slots(&self) -> usize {
        self.list.free_slots()
    }

    pub fn front(&self) -> Option<&K> {
        self.list.front()
    }

    pub fn back(&self) -> Option<&K> {
        self.list.back()
    }

    /// Iterates active keys from MRU to LRU.
    pub fn iter(&self) -> IntrusiveListIter<'_, K> {
        self.list.iter()
    }

    /// Iterates active keys MRU to LRU, then one empty entry per free slot.
    pub fn traverse(&self) -> Traverse<'_, K> {
        self.list.traverse()
    }
}

impl<K> Extend<K> for IndexedLruList<K>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a IndexedLruList<K> {
    type Item = &'a K;
    type IntoIter = IntrusiveListIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> fmt::Debug for IndexedLruList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedLruList")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<K> ReadOnlyList<K> for IndexedLruList<K>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn contains(&self, value: &K) -> bool {
        self.index.contains_key(value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.list.capacity()
    }

    fn traverse(&self) -> Traverse<'_, K> {
        self.list.traverse()
    }
}

impl<K> RecencyList<K> for IndexedLruList<K>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, value: K) -> Insertion<K> {
        IndexedLruList::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &K) -> Option<K> {
        IndexedLruList::remove(self, value)
    }

    #[inline]
    fn touch(&mut self, value: &K) -> bool {
        IndexedLruList::touch(self, value)
    }

    fn clear(&mut self) {
        IndexedLruList::clear(self);
    }
}

#[cfg(feature = "metrics")]
impl<K> IndexedLruList<K> {
    /// Returns a snapshot of list metrics.
    pub fn metrics_snapshot(&self) -> ListMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<K> MetricsSnapshotProvider<ListMetricsSnapshot> for IndexedLruList<K> {
    fn snapshot(&self) -> ListMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K> MetricsReset for IndexedLruList<K> {
    fn reset_metrics(&mut self) {
        self.metrics = ListMetrics::default();
    }
}
