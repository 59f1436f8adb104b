//! Min-priority frontier used by [Search](crate::Search).
use crate::Cost;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queued cell. Ordered by `priority`, then by `sequence`; the cell index never takes
/// part in the comparison.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    pub priority: Cost,
    pub sequence: u64,
    pub index: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap pops the smallest priority first, and among
        // equal priorities the entry that was pushed first
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// [BinaryHeap] of [FrontierEntry] that hands out strictly increasing sequence numbers.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }
    /// Queues `index` with the given priority and returns the sequence number it received.
    pub fn push(&mut self, priority: Cost, index: usize) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            priority,
            sequence,
            index,
        });
        sequence
    }
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
