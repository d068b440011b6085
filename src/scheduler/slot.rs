/*!
 * Queue Slots
 * Non-owning heap entries and their rank comparator
 */

use crate::process::{Pcb, ProcState};
use std::sync::{Arc, Weak};

/// Rank used for heap ordering
pub(super) type Rank = i16;

/// Rank below every schedulable priority (priorities start at 1)
pub(super) const SENTINEL_RANK: Rank = -1;

/// One heap cell: a weak handle to a table-owned PCB.
///
/// Holding `Weak` makes "the queue never frees a process" structural; drop
/// order between queue and table cannot double-free or leak a block.
#[derive(Debug, Clone)]
pub(super) struct Slot(Weak<Pcb>);

impl Slot {
    pub(super) fn new(pcb: &Arc<Pcb>) -> Self {
        Self(Arc::downgrade(pcb))
    }

    /// Upgrade to a usable handle; `None` once the owner dropped the block
    pub(super) fn upgrade(&self) -> Option<Arc<Pcb>> {
        self.0.upgrade()
    }

    /// Effective priority for heap comparisons, re-read on every call.
    ///
    /// A live READY block ranks at its priority. Anything else takes the
    /// sentinel: a block whose state left READY while queued, or one whose
    /// owner already dropped it. Stale entries therefore sink and drain
    /// last instead of being searched out eagerly.
    pub(super) fn rank(&self) -> Rank {
        match self.0.upgrade() {
            Some(pcb) if pcb.state() == ProcState::Ready => Rank::from(pcb.priority()),
            _ => SENTINEL_RANK,
        }
    }
}
