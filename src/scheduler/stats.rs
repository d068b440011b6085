/*!
 * Queue Statistics
 * Lifetime counters kept alongside the heap
 */

use super::ReadyQueue;
use crate::core::serde::{is_zero_u64, is_zero_usize};
use serde::{Deserialize, Serialize};

/// Running totals owned by the queue.
///
/// Plain integers, not atomics: the queue mutates through `&mut self`, so
/// there is never a concurrent writer to race with.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct Counters {
    pub(super) enqueued: u64,
    pub(super) dequeued: u64,
    pub(super) reclaimed: u64,
    pub(super) growths: u64,
    pub(super) peak_len: usize,
}

/// Point-in-time queue statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct QueueStats {
    pub len: usize,
    pub capacity: usize,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub enqueued: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub dequeued: u64,
    /// Entries discarded because their owner dropped the block while queued
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub reclaimed: u64,
    /// Capacity doublings past the baseline
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub growths: u64,
    #[serde(skip_serializing_if = "is_zero_usize")]
    pub peak_len: usize,
}

impl ReadyQueue {
    /// Snapshot the queue's counters
    pub fn stats(&self) -> QueueStats {
        QueueStats {
            len: self.heap.len(),
            capacity: self.heap.capacity(),
            enqueued: self.counters.enqueued,
            dequeued: self.counters.dequeued,
            reclaimed: self.counters.reclaimed,
            growths: self.counters.growths,
            peak_len: self.counters.peak_len,
        }
    }
}
