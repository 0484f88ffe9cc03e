// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{ColorDescriptor, HslColor, MAX_VALUE, SentimentColorMapper};

/// Continuous hue gradient from red (0) to green (100).
///
/// The hue sweeps `0°..=120°` linearly with the value. The background is a
/// two-stop gradient whose second stop sits 20° further along, capped at
/// 120°, so the surface always leans towards the positive end.
///
/// ```rust
/// use sentiment_color::Spectacular;
///
/// assert_eq!(Spectacular::hues(0), (0.0, 20.0));
/// assert_eq!(Spectacular::hues(50), (60.0, 80.0));
/// assert_eq!(Spectacular::hues(100), (120.0, 120.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spectacular;

impl Spectacular {
    /// Hue at the positive end, in degrees.
    pub const MAX_HUE: f32 = 120.0;
    /// Hue offset of the second gradient stop.
    pub const HUE_STEP: f32 = 20.0;
    /// Saturation of both stops, in percent.
    pub const SATURATION: f32 = 85.0;
    /// Lightness of both stops, in percent.
    pub const LIGHTNESS: f32 = 50.0;

    /// Returns the `(start, end)` hues for `value`, clamped to `0..=100`.
    #[must_use]
    pub fn hues(value: u8) -> (f32, f32) {
        let value = f32::from(value.min(MAX_VALUE));
        // `value * 6 / 5` is exact up to the final division, which keeps
        // hues like 39.6 free of accumulated error.
        let hue = value * 6.0 / 5.0;
        let next = (hue + Self::HUE_STEP).min(Self::MAX_HUE);
        (hue, next)
    }

    fn stop(hue: f32) -> HslColor {
        HslColor::new(hue, Self::SATURATION, Self::LIGHTNESS)
    }
}

impl SentimentColorMapper for Spectacular {
    fn map_value_to_color(&self, value: u8) -> ColorDescriptor {
        let (from, to) = Self::hues(value);
        ColorDescriptor::LinearGradient {
            from: Self::stop(from),
            to: Self::stop(to),
        }
    }
}
