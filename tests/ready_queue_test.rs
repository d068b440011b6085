/*!
 * Ready Queue Tests
 * Drain ordering, growth, staleness, and ownership behavior of the heap
 */

use pretty_assertions::assert_eq;
use sched_sim::{Pcb, ProcState, ProcessTable, ReadyQueue};
use std::sync::Arc;

fn blocks(priorities: &[u8]) -> Vec<Arc<Pcb>> {
    priorities
        .iter()
        .enumerate()
        .map(|(i, &p)| Arc::new(Pcb::new(i as u32 + 1, p)))
        .collect()
}

fn drain_priorities(queue: &mut ReadyQueue) -> Vec<u8> {
    let mut drained = Vec::new();
    while let Some(pcb) = queue.dequeue() {
        drained.push(pcb.priority());
    }
    drained
}

#[test]
fn test_mixed_priorities_drain_in_descending_order() {
    let mut queue = ReadyQueue::new();
    let blocks = blocks(&[10, 50, 1, 25]);
    for block in &blocks {
        queue.enqueue(Some(block));
    }

    assert_eq!(queue.len(), 4);
    assert_eq!(drain_priorities(&mut queue), vec![50, 25, 10, 1]);
}

#[test]
fn test_empty_queue_dequeues_nothing() {
    let mut queue = ReadyQueue::new();
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_none());
    // Still usable afterwards.
    let block = Arc::new(Pcb::new(1, 7));
    queue.enqueue(Some(&block));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_out_of_range_priority_is_clamped_and_ordered() {
    let mut queue = ReadyQueue::new();
    let blocks = blocks(&[40, 99, 10]);
    for block in &blocks {
        queue.enqueue(Some(block));
    }

    // The block's own clamp already normalized 99 down to the maximum.
    assert_eq!(blocks[1].priority(), 50);
    assert_eq!(drain_priorities(&mut queue), vec![50, 40, 10]);
}

#[test]
fn test_growth_preserves_order_and_accounting() {
    let mut queue = ReadyQueue::new();
    let baseline = queue.capacity();
    let priorities: Vec<u8> = (0..20).map(|i| (i * 7 % 50) as u8 + 1).collect();
    let blocks = blocks(&priorities);
    for block in &blocks {
        queue.enqueue(Some(block));
    }

    assert_eq!(queue.len(), 20);
    assert!(queue.capacity() > baseline);
    assert!(queue.stats().growths >= 1);

    let drained = drain_priorities(&mut queue);
    assert_eq!(drained.len(), 20);
    assert!(drained.windows(2).all(|w| w[0] >= w[1]));

    let stats = queue.stats();
    assert_eq!(stats.enqueued, 20);
    assert_eq!(stats.dequeued, 20);
    assert_eq!(stats.peak_len, 20);
}

#[test]
fn test_parked_entry_is_bypassed_by_later_ready_insert() {
    let mut queue = ReadyQueue::new();
    let parked = Arc::new(Pcb::new(1, 50));
    let ready = Arc::new(Pcb::new(2, 5));

    queue.enqueue(Some(&parked));
    parked.set_state(ProcState::Waiting);
    queue.enqueue(Some(&ready));

    let first = queue.dequeue().unwrap();
    assert_eq!(first.pid(), 2);
    assert_eq!(first.state(), ProcState::Running);

    // The parked one still surfaces eventually, stamped RUNNING on the way
    // out like any other extraction.
    let second = queue.dequeue().unwrap();
    assert_eq!(second.pid(), 1);
    assert_eq!(second.state(), ProcState::Running);
}

#[test]
fn test_enqueue_stamps_ready_and_dequeue_stamps_running() {
    let mut queue = ReadyQueue::new();
    let block = Arc::new(Pcb::new(1, 20));
    assert_eq!(block.state(), ProcState::New);

    queue.enqueue(Some(&block));
    assert_eq!(block.state(), ProcState::Ready);

    let dispatched = queue.dequeue().unwrap();
    assert_eq!(dispatched.state(), ProcState::Running);
}

#[test]
fn test_queue_residency_never_adds_ownership() {
    let mut queue = ReadyQueue::new();
    let block = Arc::new(Pcb::new(1, 20));
    assert_eq!(Arc::strong_count(&block), 1);

    queue.enqueue(Some(&block));
    assert_eq!(Arc::strong_count(&block), 1);
    assert_eq!(Arc::weak_count(&block), 1);

    let dispatched = queue.dequeue().unwrap();
    assert_eq!(Arc::strong_count(&block), 2);
    drop(dispatched);
    assert_eq!(Arc::strong_count(&block), 1);
}

#[test]
fn test_entries_of_a_dropped_table_are_reclaimed() {
    let mut table = ProcessTable::new(4);
    let mut queue = ReadyQueue::new();
    for i in 0..4 {
        table.put(Pcb::new(i as u32 + 1, (i as u8 + 1) * 10), i);
        queue.enqueue(table.get(i));
    }
    assert_eq!(queue.len(), 4);

    // Dropping the sole owner leaves four dead handles behind.
    drop(table);

    assert!(queue.dequeue().is_none());
    let stats = queue.stats();
    assert_eq!(stats.reclaimed, 4);
    assert_eq!(stats.dequeued, 0);
    assert!(queue.is_empty());
}

#[test]
fn test_cleared_slot_makes_the_queued_entry_stale() {
    let mut table = ProcessTable::new(3);
    let mut queue = ReadyQueue::new();
    for (i, priority) in [30u8, 50, 10].iter().enumerate() {
        table.put(Pcb::new(i as u32 + 1, *priority), i);
        queue.enqueue(table.get(i));
    }

    // Drop the highest-priority block out from under the queue.
    assert!(table.clear(1));

    let drained: Vec<u32> = std::iter::from_fn(|| queue.dequeue())
        .map(|pcb| pcb.pid())
        .collect();
    assert_eq!(drained, vec![1, 3]);
    assert_eq!(queue.stats().reclaimed, 1);
}

#[test]
fn test_visitor_walks_the_array_without_mutating() {
    let mut queue = ReadyQueue::new();
    let blocks = blocks(&[10, 50, 1, 25]);
    for block in &blocks {
        queue.enqueue(Some(block));
    }

    let mut visited = Vec::new();
    queue.for_each_in_heap_order(|pcb| visited.push(pcb.priority()));
    assert_eq!(visited.len(), queue.len());
    // The root is always the maximum; deeper order is layout, not sorted.
    assert_eq!(visited[0], 50);

    queue.display_all();
    assert_eq!(queue.len(), 4);
}

#[test]
fn test_table_get_composes_with_enqueue() {
    let mut table = ProcessTable::new(2);
    let mut queue = ReadyQueue::new();
    table.put(Pcb::new(1, 12), 0);

    queue.enqueue(table.get(0));
    // Empty and out-of-range slots hand the queue a no-op.
    queue.enqueue(table.get(1));
    queue.enqueue(table.get(50));

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.stats().enqueued, 1);
}
