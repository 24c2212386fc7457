use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<P, T> {
    priority: P,
    seq: u64,
    payload: T,
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue with lazy deletion.
///
/// Entries are never updated or removed in place: a better priority for the same
/// payload is pushed as a new entry, and the consumer discards stale entries when
/// they surface. Equal priorities pop in insertion order.
#[derive(Debug)]
pub struct Frontier<P, T> {
    heap: BinaryHeap<Reverse<Entry<P, T>>>,
    next_seq: u64,
}

impl<P: Ord, T> Default for Frontier<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> Frontier<P, T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, priority: P, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            payload,
        }));
    }

    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.payload))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// All pending entries, stale ones included, in the order they would pop.
    pub fn ordered(&self) -> Vec<(&P, &T)> {
        let mut entries: Vec<&Entry<P, T>> = self.heap.iter().map(|Reverse(e)| e).collect();
        entries.sort_unstable();
        entries
            .into_iter()
            .map(|e| (&e.priority, &e.payload))
            .collect()
    }
}
