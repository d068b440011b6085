/*!
 * Scheduling Simulator Library
 * Process-table bookkeeping and the ready-queue heap exposed as a library
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::config::SimConfig;
pub use crate::core::errors::{ConfigError, DispatchError};
pub use crate::core::types::{Pid, Priority};
pub use crate::monitoring::init_tracing;
pub use crate::process::{DispatchStats, Dispatcher, Pcb, PcbSnapshot, ProcState, ProcessTable};
pub use crate::scheduler::{QueueStats, ReadyQueue};
