// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A sentiment value: an integer in `0..=100`, where 50 is neutral.
///
/// Every constructor clamps, so a `SentimentValue` is always in range.
///
/// ```rust
/// use sentiment_slider::SentimentValue;
///
/// assert_eq!(SentimentValue::new(120).get(), 100);
/// assert_eq!(SentimentValue::new(-5).get(), 0);
/// assert_eq!(SentimentValue::from_f64(79.6).map(SentimentValue::get), Some(80));
/// assert_eq!(SentimentValue::from_f64(f64::NAN), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "u8"))]
pub struct SentimentValue(u8);

impl SentimentValue {
    /// The most negative value.
    pub const MIN: Self = Self(0);
    /// The neutral midpoint.
    pub const NEUTRAL: Self = Self(50);
    /// The most positive value.
    pub const MAX: Self = Self(100);

    /// Creates a value, clamping into `0..=100`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        // The clamp guarantees the conversion succeeds.
        Self(u8::try_from(value.clamp(0, 100)).unwrap_or(50))
    }

    /// Creates a value from a float, rounding to the nearest integer and
    /// clamping into `0..=100`.
    ///
    /// Returns `None` for NaN.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        let rounded = libm::round(value.clamp(0.0, 100.0));
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to 0..=100 before the cast"
        )]
        let value = rounded as u8;
        Some(Self(value))
    }

    /// Returns the value as an integer in `0..=100`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction of the full range, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for SentimentValue {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<i64> for SentimentValue {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<SentimentValue> for u8 {
    fn from(value: SentimentValue) -> Self {
        value.0
    }
}

impl fmt::Display for SentimentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
