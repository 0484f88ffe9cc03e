// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `sentiment_timing` crate.
//!
//! These model the way a gesture cycle uses the queue: a pair of timers is
//! scheduled on release and cancelled wholesale when a new cycle begins.

use core::time::Duration;

use sentiment_timing::{TimerId, TimerQueue};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cue {
    Reveal,
    Clear,
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn schedule_cycle(q: &mut TimerQueue<Cue>, now: Duration) -> (TimerId, TimerId) {
    (
        q.schedule_after(now, ms(500), Cue::Reveal),
        q.schedule_after(now, ms(600), Cue::Clear),
    )
}

#[test]
fn full_cycle_fires_reveal_then_clear() {
    let mut q = TimerQueue::new();
    schedule_cycle(&mut q, ms(1_000));

    assert_eq!(q.next_deadline(), Some(ms(1_500)));
    let fired: Vec<Cue> = q.drain_due(ms(2_000)).map(|(_, cue)| cue).collect();
    assert_eq!(fired, [Cue::Reveal, Cue::Clear]);
}

#[test]
fn interrupted_cycle_never_fires() {
    let mut q = TimerQueue::new();
    let (reveal, clear) = schedule_cycle(&mut q, ms(0));

    // A new press at 200ms cancels both.
    q.cancel(reveal);
    q.cancel(clear);

    assert!(q.drain_due(ms(10_000)).next().is_none());
}

#[test]
fn cancelling_a_partly_fired_cycle_is_safe() {
    let mut q = TimerQueue::new();
    let (reveal, clear) = schedule_cycle(&mut q, ms(0));

    assert_eq!(q.pop_due(ms(550)), Some((reveal, Cue::Reveal)));

    // Reveal already fired: cancelling it is a no-op, clear is still pending.
    assert_eq!(q.cancel(reveal), None);
    assert_eq!(q.cancel(clear), Some(Cue::Clear));
    assert!(q.is_empty());
}

#[test]
fn overlapping_cycles_keep_deadline_order() {
    let mut q = TimerQueue::new();
    schedule_cycle(&mut q, ms(0));
    schedule_cycle(&mut q, ms(50));

    let deadlines: Vec<Duration> = core::iter::from_fn(|| {
        let next = q.next_deadline()?;
        q.pop_due(next).map(|_| next)
    })
    .collect();
    assert_eq!(deadlines, [ms(500), ms(550), ms(600), ms(650)]);
}
