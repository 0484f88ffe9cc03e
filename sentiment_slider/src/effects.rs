// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-release effect sequencing.
//!
//! Releasing the slider starts a short timed sequence: first the confirm
//! button is revealed, then the ripple left at the release point is cleared.
//! [`EffectSequencer`] owns the two one-shot timers for the current gesture
//! cycle. Starting a new cycle, or cancelling, discards whatever has not yet
//! fired, so a stale reveal can never leak into a later drag.

use core::time::Duration;

use sentiment_timing::{TimerId, TimerQueue};
use smallvec::SmallVec;

use crate::SentimentValue;

/// Delays between release and each post-release effect.
///
/// The default is 500 ms to reveal the confirm button and 600 ms to clear the
/// ripple. Slower sequences such as 800 ms / 1000 ms are a configuration
/// choice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectTimings {
    /// Delay from release until the confirm button is revealed.
    pub reveal_confirm: Duration,
    /// Delay from release until the ripple is cleared.
    pub clear_ripple: Duration,
}

impl EffectTimings {
    /// Creates timings from the two delays.
    #[must_use]
    pub const fn new(reveal_confirm: Duration, clear_ripple: Duration) -> Self {
        Self {
            reveal_confirm,
            clear_ripple,
        }
    }

    /// Returns `true` if the reveal fires no later than the ripple clear.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.reveal_confirm <= self.clear_ripple
    }
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(600))
    }
}

/// A post-release effect that became due.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Show the confirm button.
    RevealConfirm,
    /// Remove the ripple(s) left by the release.
    ClearRipples,
}

/// Opaque identity of a ripple, unique within one slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(pub(crate) u64);

impl RippleId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Which ring of a release ripple this is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RippleLayer {
    /// The inner ring. Every colorway shows it.
    Primary,
    /// The outer, concentric ring shown by the spectacular colorway.
    Secondary,
}

/// Transient visual feedback anchored at the release position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ripple {
    /// Identity, for hosts that key animations.
    pub id: RippleId,
    /// Anchor along the track, as a percentage.
    pub position: SentimentValue,
    /// Ring of the ripple.
    pub layer: RippleLayer,
}

#[derive(Copy, Clone, Debug)]
struct Cycle {
    reveal: TimerId,
    clear: TimerId,
}

/// Schedules and cancels the post-release effects of one gesture cycle.
#[derive(Clone, Debug)]
pub struct EffectSequencer {
    timings: EffectTimings,
    timers: TimerQueue<Effect>,
    cycle: Option<Cycle>,
}

impl EffectSequencer {
    /// Creates an idle sequencer.
    #[must_use]
    pub fn new(timings: EffectTimings) -> Self {
        Self {
            timings,
            timers: TimerQueue::new(),
            cycle: None,
        }
    }

    /// Returns the configured delays.
    #[must_use]
    pub fn timings(&self) -> EffectTimings {
        self.timings
    }

    /// Starts a new cycle for a release at `now`, cancelling any previous one.
    pub fn begin(&mut self, now: Duration) {
        self.cancel();
        let reveal = self
            .timers
            .schedule_after(now, self.timings.reveal_confirm, Effect::RevealConfirm);
        let clear = self
            .timers
            .schedule_after(now, self.timings.clear_ripple, Effect::ClearRipples);
        self.cycle = Some(Cycle { reveal, clear });
    }

    /// Cancels whatever is still pending in the current cycle.
    ///
    /// Returns `true` if at least one timer was still pending. Cancelling an
    /// idle or fully fired sequencer is a no-op.
    pub fn cancel(&mut self) -> bool {
        let Some(cycle) = self.cycle.take() else {
            return false;
        };
        let reveal = self.timers.cancel(cycle.reveal).is_some();
        let clear = self.timers.cancel(cycle.clear).is_some();
        if reveal || clear {
            log::debug!("cancelled pending effects (reveal: {reveal}, clear: {clear})");
        }
        reveal || clear
    }

    /// Returns the effects that became due at `now`, in firing order.
    pub fn advance(&mut self, now: Duration) -> SmallVec<[Effect; 2]> {
        let fired: SmallVec<[Effect; 2]> = self.timers.drain_due(now).map(|(_, e)| e).collect();
        if self.timers.is_empty() {
            self.cycle = None;
        }
        fired
    }

    /// Returns `true` while any effect is still scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Earliest pending deadline, for hosts arming a platform timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }
}
