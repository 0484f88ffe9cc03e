// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::SentimentValue;

/// Discrete sentiment category derived from a [`SentimentValue`].
///
/// Variants are ordered from most negative to most positive, so buckets can be
/// compared directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SentimentBucket {
    /// Below 20.
    Negative,
    /// 20 to 39.
    SomewhatNegative,
    /// 40 to 47.
    SlightlyNegative,
    /// 48 to 52.
    Neutral,
    /// 53 to 60.
    SlightlyPositive,
    /// 61 to 80.
    SomewhatPositive,
    /// Above 80.
    Positive,
}

impl SentimentBucket {
    /// Classifies `value`.
    ///
    /// Thresholds are checked in order and the first match wins. The negative
    /// side compares with `<` against 20/40/48 while the positive side compares
    /// with `>` against 80/60/52, so the neutral band is `48..=52`.
    #[must_use]
    pub fn for_value(value: SentimentValue) -> Self {
        match value.get() {
            v if v < 20 => Self::Negative,
            v if v < 40 => Self::SomewhatNegative,
            v if v < 48 => Self::SlightlyNegative,
            v if v > 80 => Self::Positive,
            v if v > 60 => Self::SomewhatPositive,
            v if v > 52 => Self::SlightlyPositive,
            _ => Self::Neutral,
        }
    }

    /// Text shown to the user for this bucket.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::SomewhatNegative => "Somewhat Negative",
            Self::SlightlyNegative => "Slightly Negative",
            Self::Neutral => "Neutral",
            Self::SlightlyPositive => "Slightly Positive",
            Self::SomewhatPositive => "Somewhat Positive",
            Self::Positive => "Positive",
        }
    }
}

impl fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the bucket for `value`. Shorthand for [`SentimentBucket::for_value`].
#[must_use]
pub fn label_for(value: SentimentValue) -> SentimentBucket {
    SentimentBucket::for_value(value)
}
