//! Errors reported by queue operations.

use thiserror::Error;

/// Result type for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;

/// Reasons a queue operation was rejected.
///
/// Every error is raised before the queue is touched, so a failed call leaves the queue exactly
/// as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// No item was given to an operation that moves one.
    #[error("no item was given")]
    NullItem,

    /// A positional operation was attempted on a queue with no items.
    #[error("queue is empty")]
    EmptyQueue,

    /// The requested rank lies outside `1..=len`.
    #[error("requested position {requested} is invalid for a queue of {len} items")]
    InvalidPosition { requested: usize, len: usize },

    /// The position given to [`RankedQueue::remove_item_at`] lies outside `1..=len`.
    ///
    /// [`RankedQueue::remove_item_at`]: crate::RankedQueue::remove_item_at
    #[error("queue position {position} is out of range for a queue of {len} items")]
    PositionOutOfRange { position: usize, len: usize },

    /// The handle does not name an item currently held by the queue.
    #[error("item not found in the queue")]
    ItemNotFound,

    /// A promotion was asked to move toward the back, or a demotion toward the front.
    #[error("cannot {operation} item at position <{current}> to requested position <{requested}>")]
    DirectionMismatch {
        operation: &'static str,
        current: usize,
        requested: usize,
    },
}
