/*!
 * Process Module
 * PCB records, the owning table, and the dispatch manager
 */

pub mod manager;
pub mod pcb;
pub mod table;
pub mod types;

// Re-export for convenience
pub use manager::{DispatchStats, Dispatcher};
pub use pcb::Pcb;
pub use table::ProcessTable;
pub use types::{PcbSnapshot, ProcState};
