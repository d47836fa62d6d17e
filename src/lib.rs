//! Reorderable ranked queues.
//!
//! A [`RankedQueue`] keeps every item at an explicit 1-based rank. Ranks are the only source of
//! ordering, and the queue guarantees they form the contiguous sequence `1..=len()` after every
//! successful call. Any item can be moved to any rank:
//!
//! - [`promote`](RankedQueue::promote) moves an item toward the front; items it jumps over
//!   each move back by one.
//! - [`demote`](RankedQueue::demote) moves an item toward the back; items it jumps over each
//!   move forward by one.
//! - [`reorder`](RankedQueue::reorder) picks the right one of the two using
//!   [`direction_of_move`].
//!
//! Items are named by [`ItemHandle`]s, which identify an item independently of its rank and
//! therefore stay valid across reorders.
//!
//! ```rust
//! # use ranked_queue::RankedQueue;
//! let mut queue: RankedQueue<&str> = ["A", "B", "C", "D", "E", "F"].into_iter().collect();
//! let d = queue.iter().find(|item| *item.payload() == "D").unwrap().handle();
//!
//! let order: Vec<&str> = queue
//!     .reorder(d, 1)
//!     .unwrap()
//!     .into_iter()
//!     .map(|item| *item.payload())
//!     .collect();
//! assert_eq!(order, ["D", "A", "B", "C", "E", "F"]);
//! ```
//!
//! The queue is not synchronized; every mutation takes `&mut self`.

mod arena;
mod comparator;
mod error;
mod item;
mod queue;

pub use comparator::{Comparator, RankComparator};
pub use error::{QueueError, Result};
pub use item::{ItemHandle, ItemId, RankedItem};
pub use queue::{direction_of_move, Direction, RankedQueue};
