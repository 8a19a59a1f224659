//! Deadline-ordered timer queue.
//!
//! Every time-based behavior (countdown refresh, theme rotation, story
//! steps, particle spawning) is a [`Task`] with a deadline, drained by
//! the app on each tick. Tasks for the same logical sequence fire in the
//! order scheduled (equal deadlines resolve FIFO). Repetition is the
//! handler's job: it reschedules itself. Cancellation is never done by
//! removing entries; stale story tasks are dropped by their session tag
//! at dispatch time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use crate::particles::EmitterKind;

/// A unit of deferred work owned by one of the app's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Per-second countdown refresh.
    CountdownTick,
    /// One-shot alignment to the next half-hour boundary.
    ThemeAlign,
    /// Recurring half-hour theme advance.
    ThemeRotate,
    /// Begin the story reveal for the given writing session.
    StoryStart { session: u64 },
    /// Reveal the next character(s) of the given writing session.
    StoryStep { session: u64 },
    /// Hide the story cursor once the given session has finished.
    StoryCursorHide { session: u64 },
    /// Spawn pass for one particle emitter.
    Spawn(EmitterKind),
    /// End of the RSVP validation shake cue.
    ShakeClear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    deadline: Instant,
    seq: u64,
    task: Task,
}

// BinaryHeap is a max-heap; invert so the earliest deadline (and lowest
// sequence number among equals) surfaces first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, deadline: Instant, task: Task) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            deadline,
            seq,
            task,
        });
    }

    pub fn schedule_in(&mut self, now: Instant, delay: Duration, task: Task) {
        self.schedule_at(now + delay, task);
    }

    /// Pops every task whose deadline has passed, in nondecreasing
    /// deadline order.
    pub fn due(&mut self, now: Instant) -> Vec<Task> {
        let mut ready = Vec::new();
        while self
            .heap
            .peek()
            .is_some_and(|entry| entry.deadline <= now)
        {
            if let Some(entry) = self.heap.pop() {
                ready.push(entry.task);
            }
        }
        ready
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
