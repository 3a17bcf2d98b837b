//! Binary-heap implementation, the default choice.
use crate::entry::Entry;
pub use crate::StableQueue;
use crate::EmptyQueue;
use std::collections::BinaryHeap;
use std::fmt;

/// A stable priority queue backed by a binary heap.
///
/// The heap is keyed on (priority descending, sequence ascending), so its max element is always
/// the entry [`StableQueue`]'s total order puts first. Push and pop take `log(n)` time, peek is
/// constant; compare [`crate::naive::Queue`], which pays `n log(n)` per push to keep its vector
/// sorted.
///
/// ## Usage
///
/// ```rust
/// use priority_fifo::{heap::Queue, StableQueue};
///
/// let mut q = Queue::new();
/// q.push("task1", 3);
/// q.push("task2", 1);
/// q.push("task3", 2);
///
/// assert_eq!(q.peek(), Ok(&"task1"));
/// assert_eq!(q.pop(), Ok("task1"));
/// assert_eq!(q.pop(), Ok("task3"));
/// assert_eq!(q.pop(), Ok("task2"));
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T, P> {
    entries: BinaryHeap<Entry<T, P>>,
    next_sequence: u64,
}

impl<T, P: Ord> StableQueue<T, P> for Queue<T, P> {
    fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
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
    }

    fn pop(&mut self) -> Result<T, EmptyQueue> {
        self.entries.pop().map(|e| e.item).ok_or(EmptyQueue)
    }

    fn peek(&self) -> Result<&T, EmptyQueue> {
        self.entries.peek().map(|e| &e.item).ok_or(EmptyQueue)
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

/// Diagnostic rendering: one line per entry, highest rank first, ties in arrival order.
///
/// Best-effort only; nothing beyond that ordering is promised about the format.
impl<T: fmt::Display, P: Ord + fmt::Display> fmt::Display for Queue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "Queue: empty");
        }
        // BinaryHeap iteration is unordered; rank a borrowed view instead.
        let mut ranked: Vec<&Entry<T, P>> = self.entries.iter().collect();
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        writeln!(f, "Queue:")?;
        for e in ranked {
            writeln!(f, "  {} (priority: {})", e.item, e.priority)?;
        }
        Ok(())
    }
}
