//! Internal storage of queued items.

use crate::item::{ItemHandle, RankedItem};
use slab::Slab;
use std::cmp::Ordering;

/// Index to an item in the item arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotKey(usize);

impl From<usize> for SlotKey {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl SlotKey {
    /// "Dereferences" this index in an arena.
    ///
    /// Basically flips the arguments of [`Arena::slot()`], but since this is in postfix, it's
    /// useful for chaining a series of operations.
    #[inline(always)]
    pub(crate) fn as_ref<T>(self, arena: &Arena<T>) -> &RankedItem<T> {
        arena.slot(self)
    }

    /// Unwrap the underlying index type.
    pub(crate) fn key(self) -> usize {
        self.0
    }
}

/// Items of one queue, plus the order they are currently stored in.
///
/// Items never move inside the slab, so a [`SlotKey`] stays put while the queue is reordered;
/// only `order` is rebuilt when the queue sorts itself.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    /// Internal store of items, indexed by [`SlotKey`].
    items: Slab<RankedItem<T>>,

    /// Storage order of the items; every occupied slot appears exactly once.
    order: Vec<SlotKey>,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Slab::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Number of items held.
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Retrieve an item by slot; the slot must be occupied.
    pub(crate) fn slot(&self, key: SlotKey) -> &RankedItem<T> {
        &self.items[key.key()]
    }

    /// Retrieve the item a handle names, unless the handle is stale.
    pub(crate) fn get(&self, handle: ItemHandle) -> Option<&RankedItem<T>> {
        self.items
            .get(handle.slot.key())
            .filter(|item| item.id() == handle.id())
    }

    pub(crate) fn get_mut(&mut self, handle: ItemHandle) -> Option<&mut RankedItem<T>> {
        self.items
            .get_mut(handle.slot.key())
            .filter(|item| item.id() == handle.id())
    }

    /// Store an item at the back of the storage order.
    pub(crate) fn push_back(&mut self, mut item: RankedItem<T>) -> ItemHandle {
        let slot = self.items.vacant_key().into();
        item.set_slot(slot);
        let handle = item.handle();

        let key: SlotKey = self.items.insert(item).into();
        debug_assert_eq!(key, slot);

        self.order.push(slot);
        handle
    }

    /// Take an item out of the arena; the slot must be occupied.
    pub(crate) fn remove(&mut self, key: SlotKey) -> RankedItem<T> {
        self.order.retain(|&k| k != key);
        let mut item = self.items.remove(key.key());
        item.detach();
        item
    }

    /// First slot in storage order.
    pub(crate) fn front(&self) -> Option<SlotKey> {
        self.order.first().copied()
    }

    /// First slot in storage order whose item satisfies `pred`.
    pub(crate) fn find(&self, mut pred: impl FnMut(&RankedItem<T>) -> bool) -> Option<SlotKey> {
        self.order
            .iter()
            .copied()
            .find(|&key| pred(key.as_ref(self)))
    }

    /// Rebuild the storage order using `compare`; stable, so ties keep their current order.
    pub(crate) fn sort_by(
        &mut self,
        mut compare: impl FnMut(&RankedItem<T>, &RankedItem<T>) -> Ordering,
    ) {
        let items = &self.items;
        self.order
            .sort_by(|a, b| compare(&items[a.key()], &items[b.key()]));
    }

    /// Rewrite the rank of every item, walking in storage order.
    pub(crate) fn renumber(&mut self, mut f: impl FnMut(usize) -> usize) {
        for key in self.order.iter() {
            let item = &mut self.items[key.key()];
            item.set_rank(f(item.rank()));
        }
    }

    /// Items in storage order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &RankedItem<T>> + '_ {
        self.order.iter().map(move |&key| key.as_ref(self))
    }
}
