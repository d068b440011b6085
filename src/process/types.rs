/*!
 * Process Types
 * Lifecycle states and snapshot records for simulated processes
 */

use crate::core::types::{Pid, Priority};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcState {
    /// Created but not yet admitted to the ready queue
    New,
    /// Admitted and eligible for dispatch
    Ready,
    /// Currently dispatched
    Running,
    /// Parked pending an external event
    Waiting,
    /// Finished; the owning slot may be reclaimed
    Terminated,
}

impl ProcState {
    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Waiting => "waiting",
            Self::Terminated => "terminated",
        }
    }

    /// Raw encoding stored in the PCB's atomic state cell
    pub(crate) const fn as_raw(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Ready => 1,
            Self::Running => 2,
            Self::Waiting => 3,
            Self::Terminated => 4,
        }
    }

    /// Total inverse of `as_raw`; unknown encodings decay to `Terminated`
    pub(crate) const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::New,
            1 => Self::Ready,
            2 => Self::Running,
            3 => Self::Waiting,
            _ => Self::Terminated,
        }
    }
}

impl fmt::Display for ProcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of one process control block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PcbSnapshot {
    pub pid: Pid,
    pub priority: Priority,
    pub state: ProcState,
}
