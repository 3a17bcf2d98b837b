//! The queued unit shared by every queue implementation.
use std::cmp::Ordering;

/// One queued unit: the caller's payload plus the two keys that order it.
///
/// An entry is created at push, destroyed at pop, and never mutated in between. `sequence` is
/// assigned from the owning queue's counter and is unique within that queue, which is what makes
/// the order below strict.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T, P> {
    pub(crate) item: T,
    pub(crate) priority: P,
    pub(crate) sequence: u64,
}

/// Greater means "pops sooner": higher priority first, then lower sequence (earlier arrival)
/// first. Keyed this way, the max of a [`std::collections::BinaryHeap`] and the tail of an
/// ascending-sorted vector are both the queue's front.
impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}
