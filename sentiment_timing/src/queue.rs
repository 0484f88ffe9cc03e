// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot timer queue.

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

/// Opaque handle to a scheduled timer.
///
/// Ids are never reused within a queue, so a stale id can be cancelled
/// safely: it simply no longer matches anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: Duration,
    payload: T,
}

/// A queue of cancellable one-shot timers.
///
/// Entries are kept sorted by deadline; ties keep scheduling order. The
/// expected population is tiny (a handful of effects per gesture), so a
/// sorted `Vec` is used rather than a heap.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to fire once `deadline` is reached.
    pub fn schedule_at(&mut self, deadline: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let index = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            index,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Schedules `payload` to fire `delay` after `now`.
    ///
    /// The deadline saturates at [`Duration::MAX`].
    pub fn schedule_after(&mut self, now: Duration, delay: Duration, payload: T) -> TimerId {
        self.schedule_at(now.saturating_add(delay), payload)
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired or was already cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Returns `true` if the timer is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts use this to arm their own platform timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerId, T)> {
        if self.entries.first().is_some_and(|e| e.deadline <= now) {
            let entry = self.entries.remove(0);
            Some((entry.id, entry.payload))
        } else {
            None
        }
    }

    /// Returns an iterator that removes every timer due at `now`, in firing order.
    ///
    /// Timers left undrained when the iterator is dropped stay in the queue.
    pub fn drain_due(&mut self, now: Duration) -> DrainDue<'_, T> {
        DrainDue { queue: self, now }
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator returned by [`TimerQueue::drain_due`].
#[derive(Debug)]
pub struct DrainDue<'a, T> {
    queue: &'a mut TimerQueue<T>,
    now: Duration,
}

impl<T> Iterator for DrainDue<'_, T> {
    type Item = (TimerId, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_due(self.now)
    }
}
