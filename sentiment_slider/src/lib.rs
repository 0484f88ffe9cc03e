// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sentiment Slider: a headless gesture-to-value engine for sentiment capture.
//!
//! A sentiment slider asks a question ("How do you feel?"), lets the user drag
//! a one-dimensional control to a value between 0 (most negative) and 100
//! (most positive), recolors itself and shows a text label as the value moves,
//! and finally reveals a confirm button shortly after the user lets go.
//!
//! This crate owns the state behind that interaction. It does not render,
//! listen for platform events, or read a clock. The host feeds it input and
//! timestamps and draws whatever the queries report.
//!
//! - [`tracker`]: map pointer coordinates on a track to a clamped value.
//! - [`SentimentBucket`]: discrete label for a value via ordered thresholds.
//! - [`scroll`]: reference-counted page-scroll suppression shared by sliders.
//! - [`effects`]: cancellable post-release effects (confirm reveal, ripple clear).
//! - [`SentimentSlider`]: the gesture state machine tying these together.
//! - [`ConfirmationPort`]: the single exit for confirmed values.
//!
//! Colors come from `sentiment_color`; the [`Colorway`] chosen at construction
//! decides which strategy paints the background.
//!
//! ## Gesture cycle
//!
//! ```text
//!            press                 release(now)            clear fires
//!   Idle ───────────▶ Dragging ────────────────▶ Released ─────────────▶ Idle
//!                      │   ▲                        │
//!                      └───┘ move_to / set_raw_value │ press (cancels pending effects)
//!                                                   ▼
//!                                                Dragging
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use sentiment_slider::tracker::TrackBounds;
//! use sentiment_slider::{GestureState, SliderBuilder};
//!
//! let confirmed = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&confirmed);
//!
//! let mut slider = SliderBuilder::new()
//!     .on_confirm(move |value| sink.set(Some(value)))
//!     .build()
//!     .unwrap();
//!
//! // A 200px track starting at x = 100.
//! let track = TrackBounds::new(100.0, 200.0);
//!
//! slider.press();
//! slider.move_to(260.0, &track);
//! assert_eq!(slider.value().get(), 80);
//! assert_eq!(slider.label(), "Somewhat Positive");
//!
//! slider.release(Duration::from_millis(0));
//! assert_eq!(slider.state(), GestureState::Released);
//! assert!(!slider.is_confirm_visible());
//!
//! slider.tick(Duration::from_millis(501));
//! assert!(slider.is_confirm_visible());
//!
//! slider.confirm();
//! assert_eq!(confirmed.get(), Some(80));
//! ```
//!
//! ## Several sliders on one page
//!
//! Give every slider a clone of one [`ScrollSuppressor`] via
//! [`SliderBuilder::scroll_suppressor`]. Scrolling then stays suppressed until
//! every slider has stopped dragging.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`SliderOptions`],
//!   [`EffectTimings`], [`SentimentValue`] and [`Colorway`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod confirm;
pub mod effects;
mod label;
mod options;
pub mod scroll;
mod slider;
pub mod tracker;
mod value;

pub use confirm::ConfirmationPort;
pub use effects::{Effect, EffectSequencer, EffectTimings, Ripple, RippleId, RippleLayer};
pub use label::{SentimentBucket, label_for};
pub use options::{
    BuildError, DEFAULT_NEXT_BUTTON_TEXT, DEFAULT_QUESTION_TEXT, SliderBuilder, SliderOptions,
};
pub use scroll::{ScrollHold, ScrollInput, ScrollSuppressor};
pub use sentiment_color::{ColorDescriptor, Colorway, SentimentColorMapper};
pub use slider::{GestureState, SentimentSlider};
pub use value::SentimentValue;
