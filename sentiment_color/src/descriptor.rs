// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::color::{AlphaColor, Hsl, Srgb};
use peniko::{Brush, Color, ColorStop, Extend, Gradient, GradientKind, LinearGradientPosition};

/// An opaque 8-bit sRGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to a `peniko` color.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A color in HSL, with hue in degrees and saturation/lightness in percent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HslColor {
    /// Hue in degrees.
    pub hue: f32,
    /// Saturation in `0..=100`.
    pub saturation: f32,
    /// Lightness in `0..=100`.
    pub lightness: f32,
}

impl HslColor {
    /// Creates a color from its components.
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Converts to a `peniko` (sRGB) color.
    #[must_use]
    pub fn to_color(self) -> Color {
        AlphaColor::<Hsl>::new([self.hue, self.saturation, self.lightness, 1.0]).convert::<Srgb>()
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Output of a [`SentimentColorMapper`](crate::SentimentColorMapper).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorDescriptor {
    /// A single solid background color.
    Solid(Rgb8),
    /// A left-to-right two-stop gradient.
    LinearGradient {
        /// Color at the start (left edge).
        from: HslColor,
        /// Color at the end (right edge).
        to: HslColor,
    },
}

impl ColorDescriptor {
    /// Builds a `peniko` brush for a surface `width` units wide.
    ///
    /// Gradients run horizontally from `x = 0` to `x = width`, the same
    /// direction as a CSS `90deg` linear gradient.
    #[must_use]
    pub fn to_brush(&self, width: f64) -> Brush {
        match *self {
            Self::Solid(rgb) => Brush::Solid(rgb.to_color()),
            Self::LinearGradient { from, to } => {
                let stops = [
                    ColorStop::from((0.0, from.to_color())),
                    ColorStop::from((1.0, to.to_color())),
                ];
                Brush::Gradient(Gradient {
                    kind: GradientKind::Linear(LinearGradientPosition::new(
                        (0.0, 0.0),
                        (width, 0.0),
                    )),
                    extend: Extend::Pad,
                    stops: stops.as_slice().into(),
                    ..Gradient::default()
                })
            }
        }
    }

    /// Returns the solid color, or `None` for gradients.
    #[must_use]
    pub fn solid(&self) -> Option<Rgb8> {
        match *self {
            Self::Solid(rgb) => Some(rgb),
            Self::LinearGradient { .. } => None,
        }
    }
}

/// Renders the descriptor as a CSS `background` value.
impl fmt::Display for ColorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(rgb) => write!(f, "{rgb}"),
            Self::LinearGradient { from, to } => {
                write!(f, "linear-gradient(90deg, {from}, {to})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn solid_renders_as_css_rgb() {
        let c = ColorDescriptor::Solid(Rgb8::new(255, 50, 0));
        assert_eq!(c.to_string(), "rgb(255, 50, 0)");
    }

    #[test]
    fn gradient_renders_as_css_linear_gradient() {
        let c = ColorDescriptor::LinearGradient {
            from: HslColor::new(39.6, 85.0, 50.0),
            to: HslColor::new(59.6, 85.0, 50.0),
        };
        assert_eq!(
            c.to_string(),
            "linear-gradient(90deg, hsl(39.6,85%,50%), hsl(59.6,85%,50%))"
        );
    }

    #[test]
    fn solid_brush_keeps_channels() {
        let brush = ColorDescriptor::Solid(Rgb8::new(255, 215, 0)).to_brush(100.0);
        let Brush::Solid(color) = brush else {
            panic!("expected a solid brush");
        };
        let rgba = color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 215, 0, 255));
    }

    #[test]
    fn gradient_brush_spans_the_width() {
        let c = ColorDescriptor::LinearGradient {
            from: HslColor::new(0.0, 85.0, 50.0),
            to: HslColor::new(20.0, 85.0, 50.0),
        };
        let Brush::Gradient(gradient) = c.to_brush(320.0) else {
            panic!("expected a gradient brush");
        };
        let GradientKind::Linear(line) = gradient.kind else {
            panic!("expected a linear gradient");
        };
        assert_eq!(line.start.x, 0.0);
        assert_eq!(line.end.x, 320.0);
        assert_eq!(gradient.stops.len(), 2);
    }

    #[test]
    fn pure_red_hue_converts_to_red_dominant_srgb() {
        let rgba = HslColor::new(0.0, 85.0, 50.0).to_color().to_rgba8();
        assert!(rgba.r > 200, "red channel should dominate: {rgba:?}");
        assert!(rgba.g < 40, "green channel should be low: {rgba:?}");
        assert!(rgba.b < 40, "blue channel should be low: {rgba:?}");
    }

    #[test]
    fn solid_accessor() {
        assert_eq!(
            ColorDescriptor::Solid(Rgb8::new(1, 2, 3)).solid(),
            Some(Rgb8::new(1, 2, 3))
        );
        let g = ColorDescriptor::LinearGradient {
            from: HslColor::new(0.0, 85.0, 50.0),
            to: HslColor::new(20.0, 85.0, 50.0),
        };
        assert_eq!(g.solid(), None);
    }
}
