pub use crate::builder::{List, ListBuilder, Lookup};
pub use crate::ds::{IntrusiveList, ListEntry, SlotArena, SlotId, Traverse};
pub use crate::dump::{Dump, DumpStyle, dump, write_list};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "concurrency")]
pub use crate::list::ConcurrentLruList;
pub use crate::list::{IndexedLruList, Insertion, LruList};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::ListMetricsSnapshot;
pub use crate::traits::{ReadOnlyList, RecencyList};
