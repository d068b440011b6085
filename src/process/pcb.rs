/*!
 * Process Control Block
 * Identity, clamped priority, and lifecycle state for one simulated process
 */

use super::types::{PcbSnapshot, ProcState};
use crate::core::types::{clamp_priority, Pid, Priority};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Process control block.
///
/// Priority and state live in atomic cells so every holder of a shared
/// handle observes transitions stamped by the ready queue. The block carries
/// no queue linkage; its lifetime belongs to the process table alone.
#[derive(Debug)]
pub struct Pcb {
    pid: Pid,
    priority: AtomicU8,
    state: AtomicU8,
}

impl Pcb {
    /// Create a block in the NEW state with its priority clamped
    pub fn new(pid: Pid, priority: Priority) -> Self {
        Self {
            pid,
            priority: AtomicU8::new(clamp_priority(priority)),
            state: AtomicU8::new(ProcState::New.as_raw()),
        }
    }

    #[inline(always)]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    #[inline(always)]
    pub fn priority(&self) -> Priority {
        self.priority.load(Ordering::Relaxed)
    }

    /// Store a new priority, clamped into the schedulable range
    #[inline]
    pub fn set_priority(&self, priority: Priority) {
        self.priority
            .store(clamp_priority(priority), Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn state(&self) -> ProcState {
        ProcState::from_raw(self.state.load(Ordering::Relaxed))
    }

    /// Overwrite the lifecycle state
    #[inline]
    pub fn set_state(&self, state: ProcState) {
        self.state.store(state.as_raw(), Ordering::Relaxed);
    }

    /// Point-in-time copy for reporting
    pub fn snapshot(&self) -> PcbSnapshot {
        PcbSnapshot {
            pid: self.pid,
            priority: self.priority(),
            state: self.state(),
        }
    }
}

impl fmt::Display for Pcb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PCB {} (priority {}, {})",
            self.pid,
            self.priority(),
            self.state()
        )
    }
}
