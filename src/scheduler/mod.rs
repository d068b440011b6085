/*!
 * Ready Queue Module
 * Binary max-heap of runnable processes, ranked by live state-aware priority
 */

mod operations;
mod slot;
mod stats;

// Re-export public API
pub use stats::QueueStats;

use slot::Slot;
use stats::Counters;

/// Priority queue of the processes eligible to run next.
///
/// A manually managed binary max-heap over weak PCB handles. The heap is
/// manual rather than `std::collections::BinaryHeap` because ordering must
/// re-read each block's live state on every comparison, and because
/// extraction prefers the left child on rank ties, which keeps drains
/// deterministic for equal priorities.
///
/// All structural mutation goes through `&mut self`. Sharing a queue between
/// threads takes an external lock; see `Dispatcher` for the stock wrapping.
pub struct ReadyQueue {
    heap: Vec<Slot>,
    counters: Counters,
}

impl ReadyQueue {
    /// Create an empty queue at the baseline capacity
    pub fn new() -> Self {
        let mut queue = Self {
            heap: Vec::new(),
            counters: Counters::default(),
        };
        // Raises the zero capacity to the baseline before any insert.
        queue.ensure_capacity();
        queue
    }

    /// Entries currently queued
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when nothing is queued
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Allocated capacity of the backing array
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}
