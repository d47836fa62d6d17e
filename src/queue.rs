//! The ranked queue and its rank-shifting operations.

use crate::arena::Arena;
use crate::comparator::{Comparator, RankComparator};
use crate::error::{QueueError, Result};
use crate::item::{ItemHandle, RankedItem};
use std::cmp::Ordering;
use std::fmt::{self, Debug};

/// Which way an item has to travel to reach a requested position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Direction {
    /// Toward the back: the requested rank is numerically higher.
    Demote = -1,
    /// Already there.
    Stay = 0,
    /// Toward the front: the requested rank is numerically lower.
    Promote = 1,
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction as i8
    }
}

/// Direction an item at `current` must move in to end up at `requested`.
///
/// ```rust
/// # use ranked_queue::{direction_of_move, Direction};
/// assert_eq!(direction_of_move(1, 1), Direction::Stay);
/// assert_eq!(direction_of_move(4, 1), Direction::Promote);
/// assert_eq!(i8::from(direction_of_move(1, 4)), -1);
/// ```
pub fn direction_of_move(current: usize, requested: usize) -> Direction {
    match current.cmp(&requested) {
        Ordering::Equal => Direction::Stay,
        Ordering::Greater => Direction::Promote,
        Ordering::Less => Direction::Demote,
    }
}

/// Log a rejected call on its way back to the caller.
fn rejected(op: &str, err: QueueError) -> QueueError {
    log::debug!("{op} rejected: {err}");
    err
}

/// An in-memory queue whose order is given by an explicit, contiguous rank on every item.
///
/// Ranks always form the sequence `1..=len()` once a call has returned successfully. Any item
/// can be moved to any rank; items in between shift by one to make room.
///
/// ## Usage
///
/// ```rust
/// # use ranked_queue::RankedQueue;
/// let mut queue: RankedQueue<&str> = RankedQueue::new();
/// let _a = queue.enqueue("A");
/// let _b = queue.enqueue("B");
/// let c = queue.enqueue("C");
///
/// let order: Vec<_> = queue
///     .reorder(c, 1)
///     .unwrap()
///     .into_iter()
///     .map(|item| (*item.payload(), item.rank()))
///     .collect();
/// assert_eq!(order, [("C", 1), ("A", 2), ("B", 3)]);
/// ```
pub struct RankedQueue<T> {
    arena: Arena<T>,
    comparator: Box<dyn Comparator<T>>,
}

impl<T> RankedQueue<T> {
    /// Construct an empty queue ordered by rank.
    pub fn new() -> Self {
        Self::with_comparator(RankComparator)
    }

    /// Construct an empty queue ordered by `comparator`.
    pub fn with_comparator(comparator: impl Comparator<T> + 'static) -> Self {
        Self {
            arena: Arena::with_capacity(0),
            comparator: Box::new(comparator),
        }
    }

    /// Construct an empty rank-ordered queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            comparator: Box::new(RankComparator),
        }
    }

    /// Replace the ordering used by later sorts.
    ///
    /// Existing items are neither re-sorted nor renumbered.
    pub fn set_comparator(&mut self, comparator: impl Comparator<T> + 'static) {
        log::trace!("comparator replaced");
        self.comparator = Box::new(comparator);
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `handle` names an item in this queue.
    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.arena.get(handle).is_some()
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&RankedItem<T>> {
        self.arena.get(handle)
    }

    /// Mutable access to an item's payload; the rank stays out of reach.
    pub fn payload_mut(&mut self, handle: ItemHandle) -> Option<&mut T> {
        self.arena.get_mut(handle).map(RankedItem::payload_mut)
    }

    /// Current rank of the item `handle` names.
    pub fn position_of(&self, handle: ItemHandle) -> Option<usize> {
        self.get(handle).map(RankedItem::rank)
    }

    /// The item at the head of storage order, without removing it.
    ///
    /// Storage order matches the comparator as of the last sorting call.
    pub fn first(&self) -> Option<&RankedItem<T>> {
        self.arena.front().map(|key| key.as_ref(&self.arena))
    }

    /// Items in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedItem<T>> + '_ {
        self.arena.iter()
    }

    /// Append an item at the back of the queue, giving it rank `len() + 1`.
    ///
    /// Accepts either a bare payload or a [`RankedItem`] built beforehand.
    pub fn enqueue(&mut self, item: impl Into<RankedItem<T>>) -> ItemHandle {
        let mut item = item.into();
        let rank = self.len() + 1;
        item.set_rank(rank);
        let handle = self.arena.push_back(item);
        log::trace!("enqueued {:?} at position {rank}", handle.id());
        handle
    }

    /// Remove and return the item that sorts first.
    ///
    /// Items ranked after it move up by one, so ranks stay contiguous.
    pub fn dequeue(&mut self) -> Result<RankedItem<T>> {
        self.normalize();
        let head = self
            .arena
            .front()
            .ok_or_else(|| rejected("dequeue", QueueError::EmptyQueue))?;
        let rank = head.as_ref(&self.arena).rank();
        let item = self.arena.remove(head);
        self.close_gap(rank);

        log::trace!("dequeued {:?} from position {rank}", item.id());
        Ok(item)
    }

    /// Items ordered by the active comparator.
    ///
    /// Also brings storage order in line with the comparator, which [`first()`](Self::first)
    /// and [`iter()`](Self::iter) then observe.
    pub fn sort(&mut self) -> Result<Vec<&RankedItem<T>>> {
        if self.is_empty() {
            return Err(rejected("sort", QueueError::EmptyQueue));
        }
        self.normalize();
        Ok(self.snapshot())
    }

    /// Remove the item at 1-based `position`, moving every later item up by one.
    ///
    /// Returns the remaining items in order.
    pub fn remove_item_at(&mut self, position: usize) -> Result<Vec<&RankedItem<T>>> {
        let len = self.len();
        if position < 1 || position > len {
            let err = QueueError::PositionOutOfRange { position, len };
            return Err(rejected("remove_item_at", err));
        }
        self.normalize();

        let key = self
            .arena
            .find(|item| item.rank() == position)
            .ok_or_else(|| {
                rejected(
                    "remove_item_at",
                    QueueError::PositionOutOfRange { position, len },
                )
            })?;
        let item = self.arena.remove(key);
        self.close_gap(position);

        log::trace!("removed {:?} from position {position}", item.id());
        Ok(self.snapshot())
    }

    /// Move an item toward the front, to `requested`.
    ///
    /// Every item ranked in `requested..current` moves back by one to open the slot.
    pub fn promote(&mut self, item: impl Into<Option<ItemHandle>>, requested: usize) -> Result<()> {
        let (handle, current) = self
            .locate(item.into(), requested)
            .map_err(|err| rejected("promote", err))?;

        if requested > current {
            let err = QueueError::DirectionMismatch {
                operation: "promote",
                current,
                requested,
            };
            return Err(rejected("promote", err));
        }

        self.arena.renumber(|rank| {
            if (requested..current).contains(&rank) {
                rank + 1
            } else {
                rank
            }
        });
        self.place(handle, requested);
        self.normalize();

        log::trace!("promoted {:?} from {current} to {requested}", handle.id());
        Ok(())
    }

    /// Move an item toward the back, to `requested`.
    ///
    /// Every item ranked in `current + 1..=requested` moves forward by one to fill the slot.
    pub fn demote(&mut self, item: impl Into<Option<ItemHandle>>, requested: usize) -> Result<()> {
        let (handle, current) = self
            .locate(item.into(), requested)
            .map_err(|err| rejected("demote", err))?;

        if requested < current {
            let err = QueueError::DirectionMismatch {
                operation: "demote",
                current,
                requested,
            };
            return Err(rejected("demote", err));
        }

        self.arena.renumber(|rank| {
            if (current + 1..=requested).contains(&rank) {
                rank - 1
            } else {
                rank
            }
        });
        self.place(handle, requested);
        self.normalize();

        log::trace!("demoted {:?} from {current} to {requested}", handle.id());
        Ok(())
    }

    /// Move an item to `requested`, promoting or demoting as needed.
    ///
    /// Returns every item in order afterwards.
    pub fn reorder(
        &mut self,
        item: impl Into<Option<ItemHandle>>,
        requested: usize,
    ) -> Result<Vec<&RankedItem<T>>> {
        let (handle, current) = self
            .locate(item.into(), requested)
            .map_err(|err| rejected("reorder", err))?;

        match direction_of_move(current, requested) {
            Direction::Promote => self.promote(handle, requested)?,
            Direction::Demote => self.demote(handle, requested)?,
            Direction::Stay => {
                log::trace!("{:?} already at {requested}", handle.id());
            }
        }

        self.normalize();
        Ok(self.snapshot())
    }

    /// Validate a move request, returning the handle and the item's current rank.
    ///
    /// Checks run in a fixed order so the first applicable error is the one reported.
    fn locate(&self, item: Option<ItemHandle>, requested: usize) -> Result<(ItemHandle, usize)> {
        let handle = item.ok_or(QueueError::NullItem)?;
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        let current = self.position_of(handle).ok_or(QueueError::ItemNotFound)?;
        let len = self.len();
        if requested < 1 || requested > len {
            return Err(QueueError::InvalidPosition { requested, len });
        }
        Ok((handle, current))
    }

    /// Set the rank of an item already validated by [`locate()`](Self::locate).
    fn place(&mut self, handle: ItemHandle, rank: usize) {
        if let Some(item) = self.arena.get_mut(handle) {
            item.set_rank(rank);
        }
    }

    /// Move every item ranked after `vacated` up by one.
    fn close_gap(&mut self, vacated: usize) {
        self.arena
            .renumber(|rank| if rank > vacated { rank - 1 } else { rank });
    }

    /// Sort storage order with the active comparator.
    fn normalize(&mut self) {
        let comparator = &self.comparator;
        self.arena.sort_by(|a, b| comparator.compare(a, b));
    }

    fn snapshot(&self) -> Vec<&RankedItem<T>> {
        self.arena.iter().collect()
    }
}

impl<T> Default for RankedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for RankedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.arena.iter()).finish()
    }
}

impl<T, I: Into<RankedItem<T>>> Extend<I> for RankedQueue<T> {
    fn extend<It: IntoIterator<Item = I>>(&mut self, iter: It) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T, I: Into<RankedItem<T>>> FromIterator<I> for RankedQueue<T> {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
