//! Items held by a [`RankedQueue`](crate::RankedQueue), and the handles used to name them.

use crate::arena::SlotKey;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh [`ItemId`]s; unique for the lifetime of the process.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a [`RankedItem`], assigned once at construction.
///
/// Unlike the rank, the id never changes while the item moves through a queue, so it is what
/// equality and hashing are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Copyable token naming an item held by a queue.
///
/// Obtained from [`RankedQueue::enqueue`](crate::RankedQueue::enqueue) or
/// [`RankedItem::handle`]. A handle stays valid while its item moves around the queue, and
/// goes stale once the item is dequeued or removed; stale handles are reported as
/// [`QueueError::ItemNotFound`](crate::QueueError::ItemNotFound) rather than aliasing whatever
/// item later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle {
    pub(crate) slot: SlotKey,
    pub(crate) id: ItemId,
}

impl ItemHandle {
    /// Identity of the item this handle names.
    pub fn id(&self) -> ItemId {
        self.id
    }
}

/// An entry in a ranked queue: an opaque payload plus the rank the queue assigned to it.
///
/// A rank of `0` means the item has not been enqueued yet. Only the queue can change the rank.
#[derive(Debug)]
pub struct RankedItem<T> {
    id: ItemId,
    slot: SlotKey,
    rank: usize,
    payload: T,
}

impl<T> RankedItem<T> {
    /// Wrap a payload in a fresh, not yet enqueued item.
    pub fn new(payload: T) -> Self {
        Self {
            id: ItemId::fresh(),
            slot: SlotKey::from(0),
            rank: 0,
            payload,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Current 1-based position in the queue, or `0` if not enqueued.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn is_enqueued(&self) -> bool {
        self.rank != 0
    }

    /// Handle naming this item within the queue that holds it.
    pub fn handle(&self) -> ItemHandle {
        ItemHandle {
            slot: self.slot,
            id: self.id,
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }

    pub(crate) fn set_slot(&mut self, slot: SlotKey) {
        self.slot = slot;
    }

    /// Forget queue placement once the item leaves a queue.
    pub(crate) fn detach(&mut self) {
        self.rank = 0;
        self.slot = SlotKey::from(0);
    }
}

impl<T> From<T> for RankedItem<T> {
    fn from(payload: T) -> Self {
        Self::new(payload)
    }
}

impl<T> PartialEq for RankedItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for RankedItem<T> {}

impl<T> Hash for RankedItem<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
