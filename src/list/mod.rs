//! Fixed-capacity recency lists.
//!
//! Both engines keep their values in a bounded [`IntrusiveList`](crate::ds::IntrusiveList)
//! whose slots are allocated once; they differ only in how a value is found:
//!
//! | Engine                | Lookup                      | Value bound             |
//! |-----------------------|-----------------------------|-------------------------|
//! | [`LruList`]           | scan of the active chain    | `PartialEq`             |
//! | [`IndexedLruList`]    | `FxHashMap<K, SlotId>`      | `Eq + Hash + Clone`     |
//! | [`ConcurrentLruList`] | scan, behind a `RwLock`     | `PartialEq` (+ `Send`)  |
//!
//! `ConcurrentLruList` requires the `concurrency` feature.

#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod indexed;
pub mod lru_list;

#[cfg(feature = "concurrency")]
pub use concurrent::ConcurrentLruList;
pub use indexed::IndexedLruList;
pub use lru_list::LruList;

/// Outcome of inserting a value into a recency list.
///
/// Every outcome leaves the inserted value at the head (MRU) of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<T> {
    /// A free slot was claimed.
    Inserted,
    /// An equal value was already active. It was promoted to the head and its
    /// stored value replaced; the previously stored value is returned.
    Refreshed(T),
    /// The list was full. The least-recently-used value was evicted and its
    /// slot reused.
    Evicted(T),
}

impl<T> Insertion<T> {
    /// Returns `true` if the value was not already in the list.
    pub fn is_new(&self) -> bool {
        !matches!(self, Insertion::Refreshed(_))
    }

    /// Returns the evicted value, if the insert displaced one.
    pub fn evicted(self) -> Option<T> {
        match self {
            Insertion::Evicted(value) => Some(value),
            Insertion::Inserted | Insertion::Refreshed(_) => None,
        }
    }
}
