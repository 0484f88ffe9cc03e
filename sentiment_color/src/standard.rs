// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{ColorDescriptor, MAX_VALUE, Rgb8, SentimentColorMapper};

/// Piecewise RGB ramp with the center pinned to gold.
///
/// - Below 50 the red channel stays saturated and green fades in, giving red
///   at 0 through orange towards the center.
/// - Exactly 50 is gold, `rgb(255, 215, 0)`.
/// - Above 50 red fades out and a little blue appears near the top, giving
///   yellow-green through rich green at 100.
///
/// ```rust
/// use sentiment_color::{Rgb8, Standard};
///
/// assert_eq!(Standard::rgb(0), Rgb8::new(255, 50, 0));
/// assert_eq!(Standard::rgb(50), Standard::CENTER);
/// assert_eq!(Standard::rgb(100), Rgb8::new(120, 220, 24));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Standard;

impl Standard {
    /// The pinned neutral color.
    pub const CENTER: Rgb8 = Rgb8::new(255, 215, 0);

    /// Returns the solid color for `value`, clamped to `0..=100`.
    #[must_use]
    pub fn rgb(value: u8) -> Rgb8 {
        let value = value.min(MAX_VALUE);
        let v = f64::from(value);
        match value {
            50 => Self::CENTER,
            0..50 => {
                // 1 at the negative end, approaching 0 near the center.
                let negative = 1.0 - v / 50.0;
                let green = 50.0
                    + if negative < 0.5 {
                        150.0 * (1.0 - negative * 2.0)
                    } else {
                        0.0
                    };
                Rgb8::new(255, channel(green), 0)
            }
            _ => {
                // Approaching 0 near the center, 1 at the positive end.
                let positive = (v - 50.0) / 50.0;
                let red = 120.0 + 130.0 * (1.0 - positive);
                let blue = if positive > 0.7 {
                    (positive - 0.7) * 80.0
                } else {
                    0.0
                };
                Rgb8::new(channel(red), 220, channel(blue))
            }
        }
    }
}

impl SentimentColorMapper for Standard {
    fn map_value_to_color(&self, value: u8) -> ColorDescriptor {
        ColorDescriptor::Solid(Self::rgb(value))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the value is rounded and clamped into the u8 range first"
)]
fn channel(x: f64) -> u8 {
    libm::round(x).clamp(0.0, 255.0) as u8
}
