//! Randomized iterators over [`RandQueue`](crate::RandQueue) contents.
//!
//! All three iterators visit every item they cover exactly once, in a
//! uniformly random order. [`RandIter`] and [`SnapshotIter`] shuffle with a
//! fresh entropy-seeded source at creation, so their orders are independent
//! of the queue's own generator and of every other iterator. [`RandIntoIter`]
//! consumes the queue and keeps using its random source, drawing a uniform
//! index and swap-removing it per step.
//!
//! None of them can remove items from a live queue: `Iterator` exposes no
//! removal, and the borrowed iterator holds `&RandQueue`, so no mutating
//! method is reachable while it exists.

use std::{fmt, iter::FusedIterator};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A borrowing iterator that yields a reference to every live item exactly
/// once, in a uniformly random order.
///
/// Created by [`RandQueue::iter`](crate::RandQueue::iter). The order is a
/// fresh uniform permutation per iterator, drawn from an entropy-seeded
/// source at creation.
pub struct RandIter<'a, T> {
    items: &'a [T],
    /// Shuffled visit order, consumed back to front.
    order: Vec<usize>,
}

impl<'a, T> RandIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.shuffle(&mut StdRng::from_entropy());
        Self { items, order }
    }
}

impl<T> fmt::Debug for RandIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandIter").field("remaining", &self.order.len()).finish_non_exhaustive()
    }
}

impl<'a, T> Iterator for RandIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.order.pop()?;
        self.items.get(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.order.len(), Some(self.order.len()))
    }
}

impl<T> ExactSizeIterator for RandIter<'_, T> {}
impl<T> FusedIterator for RandIter<'_, T> {}

/// An iterator over a clone of the queue's contents taken at creation time,
/// yielded by value in a uniformly random order.
///
/// Created by [`RandQueue::snapshot_iter`](crate::RandQueue::snapshot_iter).
/// The snapshot is independent of the queue: later mutation does not affect
/// it, and any number of snapshots may coexist, each with its own order.
pub struct SnapshotIter<T> {
    /// Shuffled snapshot, consumed back to front.
    items: Vec<T>,
}

impl<T> SnapshotIter<T> {
    pub(crate) fn new(mut items: Vec<T>) -> Self {
        items.shuffle(&mut StdRng::from_entropy());
        Self { items }
    }
}

impl<T> fmt::Debug for SnapshotIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotIter").field("remaining", &self.items.len()).finish_non_exhaustive()
    }
}

impl<T> Iterator for SnapshotIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.items.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for SnapshotIter<T> {}
impl<T> FusedIterator for SnapshotIter<T> {}

/// An owning iterator that consumes a [`RandQueue`](crate::RandQueue) and
/// drains it in a uniformly random order.
///
/// Each call to [`next()`](Iterator::next) draws a uniform index from the
/// queue's own random source and swap-removes it, giving a uniform
/// permutation with O(1) work per step and no extra allocation. Because the
/// queue's source is reused, a queue built with
/// [`with_seed`](crate::RandQueue::with_seed) drains in a deterministic
/// order.
pub struct RandIntoIter<T> {
    buf: Vec<T>,
    rng: StdRng,
}

impl<T> RandIntoIter<T> {
    pub(crate) fn new(buf: Vec<T>, rng: StdRng) -> Self {
        Self { buf, rng }
    }
}

impl<T> fmt::Debug for RandIntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandIntoIter").field("remaining", &self.buf.len()).finish_non_exhaustive()
    }
}

impl<T> Iterator for RandIntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..self.buf.len());
        Some(self.buf.swap_remove(idx))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buf.len(), Some(self.buf.len()))
    }
}

impl<T> ExactSizeIterator for RandIntoIter<T> {}
impl<T> FusedIterator for RandIntoIter<T> {}
