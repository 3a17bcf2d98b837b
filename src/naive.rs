//! Sorted-vector implementation, kept as the simple reference.
use crate::entry::Entry;
pub use crate::StableQueue;
use crate::EmptyQueue;
use std::fmt;

/// A stable priority queue that re-sorts its vector on every push.
///
/// The vector is kept ascending under [`Entry`]'s order, so the front of the queue sits at the
/// tail and pop is cheap; the cost is the `n log(n)` sort per push. That makes this the slow but
/// obviously-correct counterpart to [`crate::heap::Queue`] — handy for differential tests and as
/// a baseline in benchmarks, not something to reach for otherwise.
#[derive(Debug, Clone)]
pub struct Queue<T, P> {
    entries: Vec<Entry<T, P>>,
    next_sequence: u64,
}

impl<T, P: Ord> StableQueue<T, P> for Queue<T, P> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_sequence: 0,
        }
    }

    fn push(&mut self, item: T, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push(Entry {
            item,
            priority,
            sequence,
        });
        self.entries.sort();
    }

    fn pop(&mut self) -> Result<T, EmptyQueue> {
        self.entries.pop().map(|e| e.item).ok_or(EmptyQueue)
    }

    fn peek(&self) -> Result<&T, EmptyQueue> {
        self.entries.last().map(|e| &e.item).ok_or(EmptyQueue)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, P: Ord> Default for Queue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Same rendering contract as the heap queue: highest rank first, ties in arrival order.
impl<T: fmt::Display, P: Ord + fmt::Display> fmt::Display for Queue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "Queue: empty");
        }
        writeln!(f, "Queue:")?;
        for e in self.entries.iter().rev() {
            writeln!(f, "  {} (priority: {})", e.item, e.priority)?;
        }
        Ok(())
    }
}
