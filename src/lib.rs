//! An array-backed multiset with uniformly random removal, sampling and
//! iteration.
//!
//! [`RandQueue`] is a building block for algorithms that need unbiased random
//! access to a working set: reservoir-style sampling, randomized rounding,
//! anything that wants an unordered bag with fair removal. It supports three
//! randomized operations:
//!
//! * [`dequeue`](RandQueue::dequeue) removes and returns a uniformly random
//!   item in amortized O(1), using swap-with-last removal instead of
//!   shifting.
//! * [`sample`](RandQueue::sample) returns a reference to a uniformly random
//!   item without removing it.
//! * [`iter`](RandQueue::iter), [`snapshot_iter`](RandQueue::snapshot_iter)
//!   and the owning [`IntoIterator`] impl each visit every live item exactly
//!   once, in a fresh uniformly random order per iterator.
//!
//! The container keeps no element order whatsoever. Removal swaps the last
//! live item into the vacated slot, so positions shift around arbitrarily;
//! this is what makes O(1) removal possible and is safe precisely because no
//! ordering is promised.
//!
//! # Randomness
//!
//! Every queue owns its own [`StdRng`](rand::rngs::StdRng), seeded from
//! entropy by [`RandQueue::new`] or from a caller-supplied seed by
//! [`RandQueue::with_seed`]. Two queues never share generator state, and
//! seeded queues make fully deterministic choices, which keeps randomized
//! tests reproducible. Iterators created through [`iter`](RandQueue::iter)
//! and [`snapshot_iter`](RandQueue::snapshot_iter) draw their order from
//! their own fresh source, independent of the queue's generator and of every
//! other iterator.
//!
//! # Example
//!
//! ```
//! use rand_queue::RandQueue;
//!
//! let mut queue = RandQueue::new();
//! for word in ["solo", "duo", "trio"] {
//!     queue.enqueue(word);
//! }
//!
//! let drawn = queue.dequeue().unwrap();
//! assert!(["solo", "duo", "trio"].contains(&drawn));
//! assert_eq!(queue.len(), 2);
//!
//! // The remaining items, each exactly once, in random order.
//! let rest: Vec<&&str> = queue.iter().collect();
//! assert_eq!(rest.len(), 2);
//! ```

#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod iter;
mod queue;

pub use iter::{RandIntoIter, RandIter, SnapshotIter};
pub use queue::RandQueue;
