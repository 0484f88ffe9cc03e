// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;
use core::time::Duration;

use sentiment_color::{ColorDescriptor, Colorway, SentimentColorMapper};
use smallvec::SmallVec;

use crate::confirm::ConfirmationPort;
use crate::effects::{Effect, EffectSequencer, EffectTimings, Ripple, RippleId, RippleLayer};
use crate::label::SentimentBucket;
use crate::options::SliderOptions;
use crate::scroll::{ScrollHold, ScrollSuppressor};
use crate::tracker::{TrackBounds, compute_position};
use crate::SentimentValue;

/// Interaction state of a slider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// Resting between interactions.
    #[default]
    Idle,
    /// A pointer or touch is pressed on the slider.
    Dragging,
    /// Released; post-release effects are still pending.
    Released,
}

/// The sentiment slider interaction engine.
///
/// Feed it host input (`press`, `move_to`, `release`), advance its effects
/// with `tick`, and read back what to show: the value, its color and label,
/// live ripples and whether the confirm button is visible. Nothing here
/// renders; the host draws from these queries after each call.
///
/// Build one with [`SliderBuilder`](crate::SliderBuilder).
pub struct SentimentSlider {
    value: SentimentValue,
    state: GestureState,
    colorway: Colorway,
    question_text: String,
    next_button_text: String,
    ripples: SmallVec<[Ripple; 2]>,
    next_ripple_id: u64,
    confirm_visible: bool,
    effects: EffectSequencer,
    scroll: ScrollSuppressor,
    scroll_hold: Option<ScrollHold>,
    port: ConfirmationPort,
}

impl SentimentSlider {
    pub(crate) fn from_parts(
        options: SliderOptions,
        scroll: ScrollSuppressor,
        port: ConfirmationPort,
    ) -> Self {
        Self {
            value: options.initial_value,
            state: GestureState::Idle,
            colorway: options.colorway,
            question_text: options.question_text,
            next_button_text: options.next_button_text,
            ripples: SmallVec::new(),
            next_ripple_id: 0,
            confirm_visible: false,
            effects: EffectSequencer::new(options.timings),
            scroll,
            scroll_hold: None,
            port,
        }
    }

    /// Starts a drag.
    ///
    /// Hides ripples and the confirm button, cancels pending effects from the
    /// previous cycle and suppresses page scrolling. Returns `false` (and does
    /// nothing) if a drag is already in progress.
    pub fn press(&mut self) -> bool {
        if self.state == GestureState::Dragging {
            return false;
        }
        self.effects.cancel();
        self.ripples.clear();
        self.confirm_visible = false;
        if self.scroll_hold.is_none() {
            self.scroll_hold = Some(self.scroll.acquire());
        }
        log::debug!("{:?} -> Dragging at {}", self.state, self.value);
        self.state = GestureState::Dragging;
        true
    }

    /// Starts a drag and immediately moves to `coordinate`, as a press on the
    /// track itself does.
    pub fn press_at(&mut self, coordinate: f64, track: &TrackBounds) -> bool {
        let started = self.press();
        if started {
            self.move_to(coordinate, track);
        }
        started
    }

    /// Updates the value from a pointer coordinate on `track`.
    ///
    /// Returns `true` if the value changed. Ignored outside a drag.
    pub fn move_to(&mut self, coordinate: f64, track: &TrackBounds) -> bool {
        if self.state != GestureState::Dragging {
            return false;
        }
        let value = compute_position(coordinate, track, self.value);
        self.update_value(value)
    }

    /// Updates the value from a raw range-control value (such as a native
    /// range input's change event), rounding and clamping it.
    ///
    /// Returns `true` if the value changed. Ignored outside a drag and for NaN.
    pub fn set_raw_value(&mut self, raw: f64) -> bool {
        if self.state != GestureState::Dragging {
            return false;
        }
        match SentimentValue::from_f64(raw) {
            Some(value) => self.update_value(value),
            None => false,
        }
    }

    fn update_value(&mut self, value: SentimentValue) -> bool {
        if value == self.value {
            return false;
        }
        log::trace!("value {} -> {}", self.value, value);
        self.value = value;
        true
    }

    /// Ends the drag at time `now`.
    ///
    /// Releases scroll suppression, leaves a ripple at the current value and
    /// schedules the confirm-button reveal and ripple clear. Returns `false`
    /// (and does nothing) if no drag is in progress.
    pub fn release(&mut self, now: Duration) -> bool {
        if self.state != GestureState::Dragging {
            return false;
        }
        self.scroll_hold = None;
        self.spawn_ripples();
        self.effects.begin(now);
        log::debug!("Dragging -> Released at {}", self.value);
        self.state = GestureState::Released;
        true
    }

    fn spawn_ripples(&mut self) {
        self.ripples.clear();
        let layers: &[RippleLayer] = match self.colorway {
            Colorway::Standard => &[RippleLayer::Primary],
            Colorway::Spectacular => &[RippleLayer::Primary, RippleLayer::Secondary],
        };
        for &layer in layers {
            let id = RippleId(self.next_ripple_id);
            self.next_ripple_id += 1;
            self.ripples.push(Ripple {
                id,
                position: self.value,
                layer,
            });
        }
    }

    /// Aborts a drag without starting post-release effects, keeping the
    /// current value. Returns `false` if no drag is in progress.
    pub fn cancel(&mut self) -> bool {
        if self.state != GestureState::Dragging {
            return false;
        }
        self.scroll_hold = None;
        log::debug!("Dragging -> Idle (cancelled) at {}", self.value);
        self.state = GestureState::Idle;
        true
    }

    /// Fires effects that are due at `now` and returns them in firing order.
    pub fn tick(&mut self, now: Duration) -> SmallVec<[Effect; 2]> {
        let fired = self.effects.advance(now);
        for effect in &fired {
            log::debug!("effect fired: {effect:?}");
            match effect {
                Effect::RevealConfirm => self.confirm_visible = true,
                Effect::ClearRipples => {
                    self.ripples.clear();
                    if self.state == GestureState::Released {
                        self.state = GestureState::Idle;
                    }
                }
            }
        }
        fired
    }

    /// Sends the current value to the application's confirmation callback
    /// and returns it.
    ///
    /// Works in any state and regardless of button visibility. Hides the
    /// confirm button. Whether the value is reset afterwards is up to the
    /// application, via [`reset`](Self::reset).
    pub fn confirm(&mut self) -> u8 {
        self.confirm_visible = false;
        self.port.confirm(self.value)
    }

    /// Externally resets the slider to `value` and returns it to rest.
    ///
    /// Cancels pending effects, hides ripples and the confirm button and ends
    /// any drag in progress.
    pub fn reset(&mut self, value: SentimentValue) {
        self.effects.cancel();
        self.ripples.clear();
        self.confirm_visible = false;
        self.scroll_hold = None;
        self.state = GestureState::Idle;
        self.value = value;
        log::debug!("reset to {value}");
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> SentimentValue {
        self.value
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Background color for the current value.
    #[must_use]
    pub fn color(&self) -> ColorDescriptor {
        self.colorway.map_value_to_color(self.value.get())
    }

    /// Sentiment bucket for the current value.
    #[must_use]
    pub fn bucket(&self) -> SentimentBucket {
        SentimentBucket::for_value(self.value)
    }

    /// Feedback text for the current value.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.bucket().label()
    }

    /// Ripples currently on screen.
    #[must_use]
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Whether the confirm button is revealed.
    #[must_use]
    pub fn is_confirm_visible(&self) -> bool {
        self.confirm_visible
    }

    /// Earliest pending effect deadline, for arming a host timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.effects.next_deadline()
    }

    /// Selected color strategy.
    #[must_use]
    pub fn colorway(&self) -> Colorway {
        self.colorway
    }

    /// Post-release effect delays.
    #[must_use]
    pub fn timings(&self) -> EffectTimings {
        self.effects.timings()
    }

    /// Question text.
    #[must_use]
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Confirm button text.
    #[must_use]
    pub fn next_button_text(&self) -> &str {
        &self.next_button_text
    }

    /// Shared scroll suppressor this slider acquires while dragging.
    #[must_use]
    pub fn scroll_suppressor(&self) -> &ScrollSuppressor {
        &self.scroll
    }

    /// Number of values confirmed so far.
    #[must_use]
    pub fn confirmations(&self) -> u64 {
        self.port.confirmations()
    }
}

impl fmt::Debug for SentimentSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentSlider")
            .field("value", &self.value)
            .field("state", &self.state)
            .field("colorway", &self.colorway)
            .field("ripples", &self.ripples)
            .field("confirm_visible", &self.confirm_visible)
            .field("effects", &self.effects)
            .field("holds_scroll", &self.scroll_hold.is_some())
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}
