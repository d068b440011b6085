/*!
 * Dispatch Management
 * Couples the owning process table with the ready queue behind shared handles
 */

use super::pcb::Pcb;
use super::table::ProcessTable;
use super::types::{PcbSnapshot, ProcState};
use crate::config::SimConfig;
use crate::core::errors::DispatchError;
use crate::core::serde::is_zero_u64;
use crate::core::types::{Pid, Priority};
use crate::scheduler::{QueueStats, ReadyQueue};
use ahash::AHashMap;
use log::info;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lifetime dispatch counters (methods take `&self`, so these are atomic)
#[derive(Default)]
struct Counters {
    spawned: AtomicU64,
    admitted: AtomicU64,
    dispatched: AtomicU64,
    released: AtomicU64,
}

/// Point-in-time dispatcher statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct DispatchStats {
    pub table_capacity: usize,
    pub occupied: usize,
    pub queued: usize,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub spawned: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub admitted: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub dispatched: u64,
    #[serde(skip_serializing_if = "is_zero_u64")]
    pub released: u64,
}

struct Inner {
    table: RwLock<ProcessTable>,
    queue: Mutex<ReadyQueue>,
    // Dispatch counts per pid, for post-run reporting
    tally: Mutex<AHashMap<Pid, u64>>,
    counters: Counters,
}

/// Orchestrates the spawn, admit, dispatch, release cycle.
///
/// The queue itself is a single-owner structure; the dispatcher is the
/// external synchronization layer around it (a whole-queue mutex), so clones
/// of one dispatcher may drive the same simulation from several threads.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

impl Dispatcher {
    /// Create a dispatcher over a fresh table with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        let table = ProcessTable::new(capacity);
        info!("Dispatcher initialized with {} table slots", table.capacity());
        Self {
            inner: Arc::new(Inner {
                table: RwLock::new(table),
                queue: Mutex::new(ReadyQueue::new()),
                tally: Mutex::new(AHashMap::new()),
                counters: Counters::default(),
            }),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.table_capacity)
    }

    /// Create a PCB in the lowest free slot.
    ///
    /// Pids are stable per slot: pid = slot index + 1, so pid 0 never exists.
    pub fn spawn(&self, priority: Priority) -> Result<Pid, DispatchError> {
        let mut table = self.inner.table.write();
        let index = (0..table.capacity())
            .find(|&i| table.get(i).is_none())
            .ok_or(DispatchError::TableFull {
                capacity: table.capacity(),
            })?;

        let pid = index as Pid + 1;
        table.put(Pcb::new(pid, priority), index);
        self.inner.counters.spawned.fetch_add(1, Ordering::Relaxed);
        info!("Spawned pid {} in slot {}", pid, index);
        Ok(pid)
    }

    /// Queue the process for dispatch; its state is stamped READY
    pub fn admit(&self, pid: Pid) -> Result<(), DispatchError> {
        let table = self.inner.table.read();
        let pcb = Self::occupant(&table, pid)?;
        self.inner.queue.lock().enqueue(Some(pcb));
        self.inner.counters.admitted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Hand back the highest-priority queued process, stamped RUNNING.
    ///
    /// Returns `None` once the queue is drained.
    pub fn dispatch(&self) -> Option<Arc<Pcb>> {
        let pcb = self.inner.queue.lock().dequeue()?;
        *self.inner.tally.lock().entry(pcb.pid()).or_insert(0) += 1;
        self.inner.counters.dispatched.fetch_add(1, Ordering::Relaxed);
        Some(pcb)
    }

    /// Terminate the process and drop the table's owned block.
    ///
    /// Any handle still queued decays to the sentinel rank and is reclaimed
    /// lazily on a later dequeue.
    pub fn release(&self, pid: Pid) -> Result<(), DispatchError> {
        let mut table = self.inner.table.write();
        Self::occupant(&table, pid)?.set_state(ProcState::Terminated);
        table.clear(Self::slot_of(pid));
        self.inner.counters.released.fetch_add(1, Ordering::Relaxed);
        info!("Released pid {}", pid);
        Ok(())
    }

    /// Current priority and state of a process
    pub fn probe(&self, pid: Pid) -> Result<PcbSnapshot, DispatchError> {
        let table = self.inner.table.read();
        Ok(Self::occupant(&table, pid)?.snapshot())
    }

    /// Reassign a process's priority (clamped by the block itself)
    pub fn reprioritize(&self, pid: Pid, priority: Priority) -> Result<(), DispatchError> {
        let table = self.inner.table.read();
        Self::occupant(&table, pid)?.set_priority(priority);
        Ok(())
    }

    /// Entries currently queued
    pub fn queued(&self) -> usize {
        self.inner.queue.lock().len()
    }

    /// Occupied table slots
    pub fn occupied(&self) -> usize {
        self.inner.table.read().occupied()
    }

    /// Total table slots
    pub fn capacity(&self) -> usize {
        self.inner.table.read().capacity()
    }

    /// Log the queue contents in heap order
    pub fn display_queue(&self) {
        self.inner.queue.lock().display_all();
    }

    /// Snapshot every live process in slot order
    pub fn snapshot(&self) -> Vec<PcbSnapshot> {
        self.inner.table.read().iter().map(|pcb| pcb.snapshot()).collect()
    }

    /// Dispatch counts per pid, sorted by pid
    pub fn dispatch_tally(&self) -> Vec<(Pid, u64)> {
        let mut tally: Vec<(Pid, u64)> = self
            .inner
            .tally
            .lock()
            .iter()
            .map(|(&pid, &count)| (pid, count))
            .collect();
        tally.sort_unstable_by_key(|&(pid, _)| pid);
        tally
    }

    /// Snapshot the queue's internal counters
    pub fn queue_stats(&self) -> QueueStats {
        self.inner.queue.lock().stats()
    }

    /// Snapshot the dispatcher's own counters
    pub fn stats(&self) -> DispatchStats {
        let table = self.inner.table.read();
        DispatchStats {
            table_capacity: table.capacity(),
            occupied: table.occupied(),
            queued: self.inner.queue.lock().len(),
            spawned: self.inner.counters.spawned.load(Ordering::Relaxed),
            admitted: self.inner.counters.admitted.load(Ordering::Relaxed),
            dispatched: self.inner.counters.dispatched.load(Ordering::Relaxed),
            released: self.inner.counters.released.load(Ordering::Relaxed),
        }
    }

    fn slot_of(pid: Pid) -> usize {
        (pid as usize).saturating_sub(1)
    }

    /// Occupant of the pid's slot, rejecting slot/pid mismatches
    fn occupant(table: &ProcessTable, pid: Pid) -> Result<&Arc<Pcb>, DispatchError> {
        table
            .get(Self::slot_of(pid))
            .filter(|pcb| pcb.pid() == pid)
            .ok_or(DispatchError::UnknownPid(pid))
    }
}
