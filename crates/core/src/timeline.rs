//! Timeline module - delayed card transitions on the engine clock
//!
//! The engine never sleeps. It records each delayed transition with the
//! millisecond it becomes due, and the host advances the clock with
//! [`Timeline::advance`]. Every transition carries the deck generation it was
//! scheduled under; the engine drops transitions whose generation is stale.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// What a delayed transition does to its two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// `MatchPending -> Matched` for a found pair.
    Finish,
    /// `Revealed -> Hidden` for a mismatched pair.
    Conceal,
}

/// A delayed mutation of two cards, captured at scheduling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub kind: TransitionKind,
    pub first: usize,
    pub second: usize,
    pub generation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    transition: Transition,
}

// Min-heap on (due_ms, seq): earliest first, FIFO among equal deadlines.
impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Scheduled>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Schedule `transition` to fire `delay_ms` from now. Returns the due time.
    pub fn schedule(&mut self, delay_ms: u32, transition: Transition) -> u64 {
        let due_ms = self.now_ms + u64::from(delay_ms);
        self.queue.push(Scheduled {
            due_ms,
            seq: self.next_seq,
            transition,
        });
        self.next_seq += 1;
        due_ms
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.now_ms += u64::from(elapsed_ms);
    }

    /// Remove and return the earliest transition that is due.
    pub fn pop_due(&mut self) -> Option<Transition> {
        if self.queue.peek()?.due_ms > self.now_ms {
            return None;
        }
        self.queue.pop().map(|s| s.transition)
    }

    /// Milliseconds until the earliest transition is due (0 if overdue).
    pub fn ms_until_next(&self) -> Option<u64> {
        self.queue
            .peek()
            .map(|s| s.due_ms.saturating_sub(self.now_ms))
    }
}
