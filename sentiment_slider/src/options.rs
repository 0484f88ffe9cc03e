// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::time::Duration;

use sentiment_color::Colorway;

use crate::confirm::ConfirmationPort;
use crate::effects::EffectTimings;
use crate::scroll::ScrollSuppressor;
use crate::{SentimentSlider, SentimentValue};

/// Question shown above the slider unless configured otherwise.
pub const DEFAULT_QUESTION_TEXT: &str = "How do you feel?";

/// Confirm button text unless configured otherwise.
pub const DEFAULT_NEXT_BUTTON_TEXT: &str = "Next question";

/// Plain-data slider configuration.
///
/// With the `serde` feature this can be loaded from a host's own config
/// files; missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderOptions {
    /// Value shown before any interaction.
    pub initial_value: SentimentValue,
    /// Question text, passed through unmodified.
    pub question_text: String,
    /// Confirm button text, passed through unmodified.
    pub next_button_text: String,
    /// Color strategy, fixed for the slider's lifetime.
    pub colorway: Colorway,
    /// Post-release effect delays.
    pub timings: EffectTimings,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            initial_value: SentimentValue::NEUTRAL,
            question_text: DEFAULT_QUESTION_TEXT.into(),
            next_button_text: DEFAULT_NEXT_BUTTON_TEXT.into(),
            colorway: Colorway::default(),
            timings: EffectTimings::default(),
        }
    }
}

/// Error returned by [`SliderBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// No confirmation callback was configured.
    MissingConfirmHandler,
    /// The ripple would be cleared before the confirm button is revealed.
    InvalidTimings {
        /// Configured reveal delay.
        reveal_confirm: Duration,
        /// Configured clear delay.
        clear_ripple: Duration,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfirmHandler => {
                f.write_str("a confirmation callback is required to build a slider")
            }
            Self::InvalidTimings {
                reveal_confirm,
                clear_ripple,
            } => write!(
                f,
                "clear-ripple delay {clear_ripple:?} is shorter than reveal-confirm delay {reveal_confirm:?}"
            ),
        }
    }
}

impl core::error::Error for BuildError {}

/// Builder for [`SentimentSlider`].
///
/// ```rust
/// use sentiment_slider::{Colorway, SliderBuilder};
///
/// let slider = SliderBuilder::new()
///     .initial_value(30)
///     .colorway(Colorway::Spectacular)
///     .question_text("How was your visit?")
///     .on_confirm(|value| println!("confirmed {value}"))
///     .build()
///     .unwrap();
///
/// assert_eq!(slider.value().get(), 30);
/// assert_eq!(slider.question_text(), "How was your visit?");
/// ```
pub struct SliderBuilder {
    options: SliderOptions,
    scroll: Option<ScrollSuppressor>,
    on_confirm: Option<Box<dyn FnMut(u8)>>,
}

impl SliderBuilder {
    /// Starts from the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SliderOptions::default())
    }

    /// Starts from existing options.
    #[must_use]
    pub fn with_options(options: SliderOptions) -> Self {
        Self {
            options,
            scroll: None,
            on_confirm: None,
        }
    }

    /// Sets the initial value, clamped into `0..=100`.
    #[must_use]
    pub fn initial_value(mut self, value: i64) -> Self {
        self.options.initial_value = SentimentValue::new(value);
        self
    }

    /// Sets the question text.
    #[must_use]
    pub fn question_text(mut self, text: impl Into<String>) -> Self {
        self.options.question_text = text.into();
        self
    }

    /// Sets the confirm button text.
    #[must_use]
    pub fn next_button_text(mut self, text: impl Into<String>) -> Self {
        self.options.next_button_text = text.into();
        self
    }

    /// Selects the color strategy.
    #[must_use]
    pub fn colorway(mut self, colorway: Colorway) -> Self {
        self.options.colorway = colorway;
        self
    }

    /// Sets the post-release effect delays.
    #[must_use]
    pub fn timings(mut self, timings: EffectTimings) -> Self {
        self.options.timings = timings;
        self
    }

    /// Shares a scroll suppressor with other sliders on the same page.
    ///
    /// Without this, the slider gets a private suppressor.
    #[must_use]
    pub fn scroll_suppressor(mut self, scroll: ScrollSuppressor) -> Self {
        self.scroll = Some(scroll);
        self
    }

    /// Sets the callback that receives confirmed values. Required.
    #[must_use]
    pub fn on_confirm(mut self, on_confirm: impl FnMut(u8) + 'static) -> Self {
        self.on_confirm = Some(Box::new(on_confirm));
        self
    }

    /// Validates the configuration and builds the slider.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingConfirmHandler`] if [`on_confirm`](Self::on_confirm) was never called.
    /// - [`BuildError::InvalidTimings`] if the ripple clear is scheduled before the reveal.
    pub fn build(self) -> Result<SentimentSlider, BuildError> {
        let Some(on_confirm) = self.on_confirm else {
            log::warn!("rejected slider configuration: no confirmation callback");
            return Err(BuildError::MissingConfirmHandler);
        };
        let timings = self.options.timings;
        if !timings.is_ordered() {
            log::warn!("rejected slider configuration: {timings:?}");
            return Err(BuildError::InvalidTimings {
                reveal_confirm: timings.reveal_confirm,
                clear_ripple: timings.clear_ripple,
            });
        }
        Ok(SentimentSlider::from_parts(
            self.options,
            self.scroll.unwrap_or_default(),
            ConfirmationPort::from_boxed(on_confirm),
        ))
    }
}

impl Default for SliderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SliderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderBuilder")
            .field("options", &self.options)
            .field("scroll", &self.scroll)
            .field("has_on_confirm", &self.on_confirm.is_some())
            .finish()
    }
}
