/*!
 * Process Table
 * Index-addressed owner of every PCB's lifetime
 */

use super::pcb::Pcb;
use log::{debug, warn};
use std::sync::Arc;

/// Fixed-capacity table of optionally occupied PCB slots.
///
/// The table holds the only long-lived strong reference to each block. The
/// ready queue keeps weak handles, so clearing a slot (or dropping the whole
/// table) releases the block exactly once regardless of queue residency.
pub struct ProcessTable {
    slots: Box<[Option<Arc<Pcb>>]>,
}

impl ProcessTable {
    /// Create a table with `capacity` empty slots; capacities below 1 are raised to 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
        }
    }

    /// Number of slots, fixed at construction
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Occupant of `index`; `None` when the index is out of range or the slot is empty
    pub fn get(&self, index: usize) -> Option<&Arc<Pcb>> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Store `pcb` at `index`, dropping any previous occupant.
    ///
    /// An out-of-range index still takes ownership: the incoming block is
    /// dropped on the spot rather than leaked or signalled.
    pub fn put(&mut self, pcb: Pcb, index: usize) {
        match self.slots.get_mut(index) {
            Some(slot) => {
                if let Some(old) = slot.replace(Arc::new(pcb)) {
                    debug!("replaced {} at slot {}", old, index);
                }
            }
            None => warn!("discarding {} aimed at out-of-range slot {}", pcb, index),
        }
    }

    /// Drop the occupant of `index`, if any; returns whether a block was released
    pub fn clear(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => slot.take().is_some(),
            None => false,
        }
    }

    /// Iterate occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Pcb>> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let table = ProcessTable::new(0);
        assert_eq!(table.capacity(), 1);
        assert_eq!(table.occupied(), 0);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let table = ProcessTable::new(4);
        assert!(table.get(4).is_none());
        assert!(table.get(usize::MAX).is_none());
    }

    #[test]
    fn put_replaces_and_drops_previous_occupant() {
        let mut table = ProcessTable::new(2);
        table.put(Pcb::new(1, 10), 0);
        let probe = Arc::downgrade(table.get(0).unwrap());

        table.put(Pcb::new(2, 20), 0);
        assert!(probe.upgrade().is_none());
        assert_eq!(table.get(0).unwrap().pid(), 2);
        assert_eq!(table.occupied(), 1);
    }

    #[test]
    fn put_out_of_range_drops_the_incoming_block() {
        let mut table = ProcessTable::new(2);
        table.put(Pcb::new(9, 30), 7);
        assert_eq!(table.occupied(), 0);
    }

    #[test]
    fn clear_releases_exactly_once() {
        let mut table = ProcessTable::new(2);
        table.put(Pcb::new(1, 10), 1);
        let probe = Arc::downgrade(table.get(1).unwrap());

        assert!(table.clear(1));
        assert!(probe.upgrade().is_none());
        assert!(!table.clear(1));
        assert!(!table.clear(99));
    }
}
