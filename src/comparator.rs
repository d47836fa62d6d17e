//! Orderings used to sort a queue's items.

use crate::item::RankedItem;
use std::cmp::Ordering;

/// A total order over queued items.
///
/// The queue consults its comparator whenever it needs its items in order: for
/// [`sort`](crate::RankedQueue::sort), [`dequeue`](crate::RankedQueue::dequeue) and the
/// snapshots returned by reordering operations. Rank bookkeeping itself never depends on the
/// comparator.
///
/// Any `Fn(&RankedItem<T>, &RankedItem<T>) -> Ordering` is a comparator.
pub trait Comparator<T> {
    fn compare(&self, a: &RankedItem<T>, b: &RankedItem<T>) -> Ordering;
}

/// Orders items by rank alone; the default comparator of a queue.
///
/// Two items of equal rank compare equal, which cannot happen inside a consistent queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankComparator;

impl<T> Comparator<T> for RankComparator {
    fn compare(&self, a: &RankedItem<T>, b: &RankedItem<T>) -> Ordering {
        a.rank().cmp(&b.rank())
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&RankedItem<T>, &RankedItem<T>) -> Ordering,
{
    fn compare(&self, a: &RankedItem<T>, b: &RankedItem<T>) -> Ordering {
        self(a, b)
    }
}
