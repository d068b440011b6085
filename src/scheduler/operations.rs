/*!
 * Queue Operations
 * Insert, extract-max, growth, and the sift routines
 */

use super::slot::Slot;
use super::ReadyQueue;
use crate::core::limits::READY_QUEUE_BASELINE;
use crate::process::{Pcb, ProcState};
use log::{debug, info, trace};
use std::sync::Arc;

impl ReadyQueue {
    /// Admit a process to the queue.
    ///
    /// `None` is ignored. Otherwise the block's priority is re-run through
    /// its own clamp, its state is forced to READY whatever it was before,
    /// and a non-owning handle is appended and sifted into place. Forcing
    /// READY first means a fresh insert can never carry the sentinel rank.
    pub fn enqueue(&mut self, pcb: Option<&Arc<Pcb>>) {
        let pcb = match pcb {
            Some(pcb) => pcb,
            None => return,
        };

        // The setter clamps, so feeding the current value back normalizes
        // an out-of-range priority without a special case here.
        pcb.set_priority(pcb.priority());
        pcb.set_state(ProcState::Ready);

        self.ensure_capacity();
        self.heap.push(Slot::new(pcb));
        self.sift_up(self.heap.len() - 1);

        self.counters.enqueued += 1;
        self.counters.peak_len = self.counters.peak_len.max(self.heap.len());
        trace!("enqueued pid {} at priority {}", pcb.pid(), pcb.priority());
    }

    /// Remove and return the highest-ranked process.
    ///
    /// The extracted block is stamped RUNNING unconditionally, even when its
    /// rank had decayed to the sentinel because some holder parked it after
    /// insertion. Callers that park queued processes should re-check state
    /// after dispatch rather than assume READY preceded RUNNING. Entries
    /// whose owner dropped the block are discarded here and never returned.
    pub fn dequeue(&mut self) -> Option<Arc<Pcb>> {
        loop {
            if self.heap.is_empty() {
                return None;
            }

            // Root out, last entry into its place, restore order downward.
            let root = self.heap.swap_remove(0);
            if !self.heap.is_empty() {
                self.sift_down(0);
            }

            match root.upgrade() {
                Some(pcb) => {
                    pcb.set_state(ProcState::Running);
                    self.counters.dequeued += 1;
                    trace!("dequeued pid {} at priority {}", pcb.pid(), pcb.priority());
                    return Some(pcb);
                }
                None => {
                    // Owner dropped the block while queued; keep extracting.
                    self.counters.reclaimed += 1;
                    debug!("reclaimed a dead queue entry");
                }
            }
        }
    }

    /// Visit every live entry in current heap-array order, not sorted order.
    ///
    /// Takes `&self`: visitors observe the layout but cannot restructure it.
    /// Entries whose block is gone are skipped, not reclaimed.
    pub fn for_each_in_heap_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Pcb),
    {
        for slot in &self.heap {
            if let Some(pcb) = slot.upgrade() {
                visit(&pcb);
            }
        }
    }

    /// Log every queued entry in heap-array order
    pub fn display_all(&self) {
        info!("ready queue ({} entries):", self.heap.len());
        self.for_each_in_heap_order(|pcb| info!("  {}", pcb));
    }

    /// Grow the backing array when the next push would hit capacity.
    ///
    /// Capacity goes from zero to the baseline on first use and doubles
    /// after that. Entries keep their positions; heap order is untouched.
    pub(super) fn ensure_capacity(&mut self) {
        let len = self.heap.len();
        let capacity = self.heap.capacity();
        if len < capacity {
            return;
        }

        let target = if capacity == 0 {
            READY_QUEUE_BASELINE
        } else {
            self.counters.growths += 1;
            capacity * 2
        };
        self.heap.reserve_exact(target - len);
        debug!("ready queue capacity {} -> {}", capacity, self.heap.capacity());
    }

    /// Restore heap order upward from `idx` after an append
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            // Strictly greater only: on a tie the child stays below.
            if self.heap[idx].rank() > self.heap[parent].rank() {
                self.heap.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Restore heap order downward from `idx` after a root replacement
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut largest = idx;

            if left < len && self.heap[left].rank() > self.heap[largest].rank() {
                largest = left;
            }
            // The right child wins only by strict rank, so ties keep the
            // left child and drains stay deterministic.
            if right < len && self.heap[right].rank() > self.heap[largest].rank() {
                largest = right;
            }

            if largest == idx {
                break;
            }
            self.heap.swap(idx, largest);
            idx = largest;
        }
    }
}
