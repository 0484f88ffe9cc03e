// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use crate::SentimentValue;

/// The boundary through which a confirmed value leaves the slider.
///
/// Wraps the application's callback. Each call to [`ConfirmationPort::confirm`]
/// invokes it exactly once with the value as given; the port neither clamps
/// nor transforms it.
pub struct ConfirmationPort {
    sink: Box<dyn FnMut(u8)>,
    confirmations: u64,
}

impl ConfirmationPort {
    /// Creates a port that forwards to `sink`.
    pub fn new(sink: impl FnMut(u8) + 'static) -> Self {
        Self::from_boxed(Box::new(sink))
    }

    pub(crate) fn from_boxed(sink: Box<dyn FnMut(u8)>) -> Self {
        Self {
            sink,
            confirmations: 0,
        }
    }

    /// Delivers `value` to the application.
    pub fn confirm(&mut self, value: SentimentValue) -> u8 {
        let value = value.get();
        self.confirmations += 1;
        log::debug!("confirming value {value}");
        (self.sink)(value);
        value
    }

    /// Number of values delivered so far.
    #[must_use]
    pub fn confirmations(&self) -> u64 {
        self.confirmations
    }
}

impl fmt::Debug for ConfirmationPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmationPort")
            .field("confirmations", &self.confirmations)
            .finish_non_exhaustive()
    }
}
