// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sentiment Color: value → color strategies for sentiment sliders.
//!
//! A sentiment slider recolors its background continuously as the value moves
//! between 0 (most negative) and 100 (most positive). This crate holds the
//! mapping from value to color, behind a single trait so that the interaction
//! engine never needs to know which look is active:
//!
//! - [`SentimentColorMapper`]: the strategy interface.
//! - [`Standard`]: piecewise RGB ramp from red through a pinned gold center to green.
//! - [`Spectacular`]: continuous HSL hue gradient from red to green.
//! - [`Colorway`]: a `Copy` selector over the two built-in strategies.
//! - [`ColorDescriptor`]: the strategy output, either a solid color or a
//!   two-stop linear gradient.
//!
//! Every strategy is a pure function of the value. None of them sees
//! interaction state.
//!
//! ## Minimal example
//!
//! ```rust
//! use sentiment_color::{ColorDescriptor, Colorway, Rgb8, SentimentColorMapper};
//!
//! let neutral = Colorway::Standard.map_value_to_color(50);
//! assert_eq!(neutral, ColorDescriptor::Solid(Rgb8::new(255, 215, 0)));
//!
//! // The same descriptor can be rendered as a `peniko` brush or as CSS.
//! let _brush = neutral.to_brush(320.0);
//! assert_eq!(neutral.to_string(), "rgb(255, 215, 0)");
//!
//! let gradient = Colorway::Spectacular.map_value_to_color(100);
//! assert_eq!(
//!     gradient.to_string(),
//!     "linear-gradient(90deg, hsl(120,85%,50%), hsl(120,85%,50%))"
//! );
//! ```
//!
//! ## Custom strategies
//!
//! Hosts can implement [`SentimentColorMapper`] for their own types. Values
//! above 100 are clamped to 100 by the built-in strategies; custom strategies
//! are expected to do the same.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std`. Rounding goes through `libm` so results are
//! identical with and without `std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod colorway;
mod descriptor;
mod spectacular;
mod standard;

pub use colorway::Colorway;
pub use descriptor::{ColorDescriptor, HslColor, Rgb8};
pub use spectacular::Spectacular;
pub use standard::Standard;

/// Highest value accepted by the built-in strategies.
pub const MAX_VALUE: u8 = 100;

/// A pure mapping from a sentiment value in `0..=100` to a color.
pub trait SentimentColorMapper {
    /// Returns the color for `value`.
    fn map_value_to_color(&self, value: u8) -> ColorDescriptor;
}

impl<M: SentimentColorMapper + ?Sized> SentimentColorMapper for &M {
    fn map_value_to_color(&self, value: u8) -> ColorDescriptor {
        (**self).map_value_to_color(value)
    }
}
