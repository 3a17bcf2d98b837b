//! Priority queues with first-in-first-out ties.
//!
//! See documentation for [`StableQueue`].
pub mod heap;
pub mod naive;

mod entry;

use thiserror::Error;

/// Error returned by [`StableQueue::pop`] and [`StableQueue::peek`] when the queue holds no
/// entries.
///
/// A failed call leaves the queue untouched, so retrying without an intervening
/// [`StableQueue::push`] fails identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is empty")]
pub struct EmptyQueue;

/// A priority queue whose ties are broken by arrival order.
///
/// Implementations maintain a strict total order over the entries they hold:
///
/// ```text
/// a precedes b  iff  a.priority > b.priority,
///               or   a.priority == b.priority and a was pushed before b
/// ```
///
/// Priority alone is not a total order, since ties are expected and common; breaking them by
/// insertion order means equal-priority items are served in the order they arrived, which is the
/// behavior most scheduling callers expect. The order is strict because each entry also carries a
/// sequence number unique within its queue.
///
/// ## Usage
///
/// ```rust
/// use priority_fifo::{heap, StableQueue};
///
/// let mut q = heap::Queue::new();
/// q.push("medium", 5);
/// q.push("urgent", 10);
/// q.push("also urgent", 10);
///
/// assert_eq!(q.pop(), Ok("urgent"));
/// assert_eq!(q.pop(), Ok("also urgent"));
/// assert_eq!(q.pop(), Ok("medium"));
/// assert!(q.pop().is_err());
/// ```
///
/// Two implementations share this contract: [`heap::Queue`], which should be the default choice,
/// and [`naive::Queue`], which re-sorts a vector on every insertion. They are observably
/// identical; only their costs differ.
pub trait StableQueue<T, P: Ord> {
    /// Construct an empty queue.
    ///
    /// Sequence numbers are local to each queue instance, so independent queues never interfere
    /// with each other's tie-breaking.
    fn new() -> Self;

    /// Insert `item` with the given `priority`.
    ///
    /// Never fails. Equal priorities are allowed; among them, items pop in push order.
    fn push(&mut self, item: T, priority: P);

    /// Remove and return the item that precedes all others under the total order.
    fn pop(&mut self) -> Result<T, EmptyQueue>;

    /// Return the item [`StableQueue::pop`] would yield, without removing it.
    fn peek(&self) -> Result<&T, EmptyQueue>;

    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Whether the queue holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
