pub mod intrusive_list;
pub mod slot_arena;

pub use intrusive_list::{IntrusiveList, IntrusiveListIter, ListEntry, Traverse};
pub use slot_arena::{SlotArena, SlotId};
