//! Helpers shared by the integration tests.
#![allow(dead_code)]

pub mod quickcheck;

use ranked_queue::{Comparator, ItemHandle, RankedItem, RankedQueue};
use std::cmp::Ordering;

pub type Name = &'static str;

/// Stores items back to front; rank bookkeeping must not depend on storage order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReverseRank;

impl<T> Comparator<T> for ReverseRank {
    fn compare(&self, a: &RankedItem<T>, b: &RankedItem<T>) -> Ordering {
        b.rank().cmp(&a.rank())
    }
}

/// Build a queue holding `names` in order, returning the handle of each.
pub fn queue_of<C: Comparator<Name> + Default + 'static>(
    names: &[Name],
) -> (RankedQueue<Name>, Vec<ItemHandle>) {
    let mut queue = RankedQueue::with_comparator(C::default());
    let handles = names.iter().map(|&name| queue.enqueue(name)).collect();
    (queue, handles)
}

/// Every `(name, rank)` pair, sorted by name.
pub fn ranks(queue: &RankedQueue<Name>) -> Vec<(Name, usize)> {
    let mut ranks: Vec<_> = queue.iter().map(|i| (*i.payload(), i.rank())).collect();
    ranks.sort();
    ranks
}

/// Names in rank order.
pub fn by_rank<T: Copy>(queue: &RankedQueue<T>) -> Vec<T> {
    let mut items: Vec<_> = queue.iter().map(|i| (i.rank(), *i.payload())).collect();
    items.sort_by_key(|&(rank, _)| rank);
    items.into_iter().map(|(_, payload)| payload).collect()
}

/// Whether the ranks held by `queue` are exactly `1..=len`.
pub fn is_contiguous<T>(queue: &RankedQueue<T>) -> bool {
    let mut ranks: Vec<usize> = queue.iter().map(RankedItem::rank).collect();
    ranks.sort_unstable();
    ranks.into_iter().eq(1..=queue.len())
}
