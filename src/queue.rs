//! The randomized queue container.

use std::{fmt, mem};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::trace;

use crate::iter::{RandIntoIter, RandIter, SnapshotIter};

/// Policy capacity of a freshly created queue.
const INITIAL_CAPACITY: usize = 10;

/// An array-backed multiset with uniformly random removal, sampling and
/// iteration.
///
/// Items live in the first `len` slots of a single allocation.
/// [`dequeue`](Self::dequeue) draws a uniform index and removes it by moving
/// the last live item into the vacated slot, so removal never shifts
/// elements and stays O(1). The allocation doubles when an insertion finds
/// it full and halves when a removal leaves it exactly a quarter full; the
/// asymmetric thresholds keep alternating insert/remove at a boundary from
/// reallocating on every call.
///
/// The queue promises **no element order**: removal reorders slots
/// arbitrarily, and every iterator visits the live items in its own fresh
/// uniformly random order. Treat it as a bag, not a sequence.
///
/// Each instance owns its random source. [`new`](Self::new) seeds it from
/// entropy; [`with_seed`](Self::with_seed) makes every draw deterministic,
/// which is the intended hook for reproducible tests.
///
/// # Examples
///
/// ```
/// use rand_queue::RandQueue;
///
/// let mut queue = RandQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
///
/// let first = queue.dequeue().unwrap();
/// assert!([1, 2, 3].contains(&first));
/// assert_eq!(queue.len(), 2);
///
/// let mut rest: Vec<i32> = queue.into_iter().collect();
/// rest.sort_unstable();
/// assert_eq!(rest.len(), 2);
/// assert!(!rest.contains(&first));
/// ```
#[must_use]
pub struct RandQueue<T> {
    /// Live items, in unspecified order.
    buf: Vec<T>,
    /// Policy capacity. Doubles when full, halves at exactly a quarter full.
    ///
    /// Tracked explicitly so the thresholds stay exact regardless of
    /// allocator rounding, and so the policy applies uniformly to zero-sized
    /// element types.
    cap: usize,
    /// Uniform source for removal and sampling draws, owned per instance.
    rng: StdRng,
}

impl<T> RandQueue<T> {
    /// Creates an empty queue with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty queue whose random source is seeded with `seed`.
    ///
    /// Two queues built with the same seed and subjected to the same
    /// sequence of operations make identical random choices.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_queue::RandQueue;
    ///
    /// let mut a = RandQueue::with_seed(7);
    /// let mut b = RandQueue::with_seed(7);
    /// for i in 0..20 {
    ///     a.enqueue(i);
    ///     b.enqueue(i);
    /// }
    /// while let Some(item) = a.dequeue() {
    ///     assert_eq!(b.dequeue(), Some(item));
    /// }
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { buf: Vec::with_capacity(INITIAL_CAPACITY), cap: INITIAL_CAPACITY, rng }
    }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the queue contains no items.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current policy capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Adds an item to the queue.
    ///
    /// If the buffer is full, it is first reallocated at twice the capacity,
    /// so a long run of insertions costs amortized O(1) each. There is no
    /// notion of an invalid item: any value of `T` is a live element, and a
    /// queue of `Option<U>` may hold `None` like any other value.
    pub fn enqueue(&mut self, item: T) {
        if self.buf.len() == self.cap {
            self.resize(self.cap * 2);
        }
        self.buf.push(item);
    }

    /// Removes and returns a uniformly random item, or `None` if the queue
    /// is empty.
    ///
    /// Every live item is returned with probability exactly `1 / len()` at
    /// call time. The vacated slot is filled by the last live item, so no
    /// elements shift and the call is amortized O(1). A removal that leaves
    /// the queue exactly a quarter full halves the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_queue::RandQueue;
    ///
    /// let mut queue = RandQueue::new();
    /// assert_eq!(queue.dequeue(), None);
    ///
    /// queue.enqueue("only");
    /// assert_eq!(queue.dequeue(), Some("only"));
    /// assert!(queue.is_empty());
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        if self.buf.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.buf.len());
        let item = self.buf.swap_remove(index);
        if !self.buf.is_empty() && self.buf.len() == self.cap / 4 {
            self.resize(self.cap / 2);
        }
        Some(item)
    }

    /// Returns a reference to a uniformly random item without removing it,
    /// or `None` if the queue is empty.
    ///
    /// The collection itself is untouched; only the owned random source
    /// advances, which is why this takes `&mut self`. Repeated calls are
    /// independent draws and may return the same item.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_queue::RandQueue;
    ///
    /// let mut queue = RandQueue::new();
    /// queue.enqueue(42);
    /// assert_eq!(queue.sample(), Some(&42));
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn sample(&mut self) -> Option<&T> {
        if self.buf.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.buf.len());
        self.buf.get(index)
    }

    /// Returns an iterator visiting every item exactly once, in a uniformly
    /// random order.
    ///
    /// The order is drawn from a fresh entropy-seeded source at creation,
    /// independent of the queue's own generator and of any other iterator.
    /// Each call produces a new permutation.
    pub fn iter(&self) -> RandIter<'_, T> {
        RandIter::new(&self.buf)
    }

    /// Returns an iterator over a clone of the current contents, yielded by
    /// value in a uniformly random order.
    ///
    /// The snapshot is taken at call time: mutating the queue afterwards
    /// does not affect an existing snapshot, and any number of snapshots may
    /// coexist, each with its own independent order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand_queue::RandQueue;
    ///
    /// let mut queue = RandQueue::new();
    /// for i in 0..5 {
    ///     queue.enqueue(i);
    /// }
    ///
    /// let snapshot = queue.snapshot_iter();
    /// queue.dequeue();
    ///
    /// // The snapshot still yields all five original items.
    /// let mut items: Vec<i32> = snapshot.collect();
    /// items.sort_unstable();
    /// assert_eq!(items, [0, 1, 2, 3, 4]);
    /// ```
    pub fn snapshot_iter(&self) -> SnapshotIter<T>
    where
        T: Clone,
    {
        SnapshotIter::new(self.buf.clone())
    }

    /// Moves the live items into a fresh allocation of `new_cap` slots.
    fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.buf.len());
        let old_cap = self.cap;
        let mut next = Vec::with_capacity(new_cap);
        next.extend(mem::take(&mut self.buf));
        self.buf = next;
        self.cap = new_cap;
        trace!(target: "rand_queue", from = old_cap, to = new_cap, len = self.buf.len(), "resized buffer");
    }
}

impl<T> Default for RandQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RandQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T> FromIterator<T> for RandQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for RandQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> IntoIterator for RandQueue<T> {
    type Item = T;
    type IntoIter = RandIntoIter<T>;

    /// Consumes the queue, draining it in a uniformly random order.
    ///
    /// The drain reuses the queue's own random source, so for a seeded
    /// queue the full drain order is deterministic.
    fn into_iter(self) -> Self::IntoIter {
        RandIntoIter::new(self.buf, self.rng)
    }
}

impl<'a, T> IntoIterator for &'a RandQueue<T> {
    type Item = &'a T;
    type IntoIter = RandIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
