//! lrulist: fixed-capacity MRU-ordered lists over a preallocated slot arena.
//!
//! A list holds at most `capacity` values ordered from most recently used to
//! least recently used. Inserting into a full list evicts the LRU value; all
//! slots are allocated up front and recycled through a free chain.
//!
//! ```
//! use lrulist::dump::dump;
//! use lrulist::list::LruList;
//!
//! let mut list = LruList::new(4);
//! for name in ["C", "D", "E"] {
//!     list.insert(name);
//! }
//! list.touch("C");
//! assert_eq!(
//!     dump(&list).to_string(),
//!     "START LIST\nC\nE\nD\n[empty]\nEND LIST\n"
//! );
//! ```

pub mod builder;
pub mod ds;
pub mod dump;
pub mod error;
pub mod list;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
