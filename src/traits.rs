//! List trait hierarchy.
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │ ReadOnlyList<T>              │  contains, len, capacity, traverse
//!   └──────────────┬───────────────┘
//!                  │
//!   ┌──────────────▼───────────────┐
//!   │ RecencyList<T>               │  insert, remove, touch, clear
//!   └──────────────────────────────┘
//! ```
//!
//! Implemented by [`LruList`](crate::list::LruList),
//! [`IndexedLruList`](crate::list::IndexedLruList) and
//! [`List`](crate::builder::List). Code that only needs to render or inspect
//! a list (such as [`dump`](crate::dump)) should accept `ReadOnlyList`.
//!
//! ## Example Usage
//!
//! ```
//! use lrulist::list::{IndexedLruList, LruList};
//! use lrulist::traits::RecencyList;
//!
//! fn warm<L: RecencyList<u32>>(list: &mut L) {
//!     for v in 0..4 {
//!         list.insert(v);
//!     }
//!     list.touch(&0);
//! }
//!
//! let mut scan = LruList::new(4);
//! let mut indexed = IndexedLruList::new(4);
//! warm(&mut scan);
//! warm(&mut indexed);
//! assert!(scan.traverse().eq(indexed.traverse()));
//! ```

use crate::ds::intrusive_list::Traverse;
use crate::list::Insertion;

/// Read-only view of a fixed-capacity recency list.
///
/// None of these methods change the recency order.
pub trait ReadOnlyList<T> {
    /// Returns `true` if an equal value is active.
    fn contains(&self, value: &T) -> bool;

    /// Number of active values.
    fn len(&self) -> usize;

    /// Fixed number of slots.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Values MRU to LRU, then one empty entry per unused slot.
    fn traverse(&self) -> Traverse<'_, T>;
}

/// Mutable operations of a fixed-capacity recency list.
pub trait RecencyList<T>: ReadOnlyList<T> {
    /// Inserts at the head, refreshing an equal value or evicting the LRU one.
    fn insert(&mut self, value: T) -> Insertion<T>;

    /// Removes an equal value; `None` if absent.
    fn remove(&mut self, value: &T) -> Option<T>;

    /// Promotes an equal value to the head; `false` if absent.
    fn touch(&mut self, value: &T) -> bool;

    /// Drops every value.
    fn clear(&mut self);
}
