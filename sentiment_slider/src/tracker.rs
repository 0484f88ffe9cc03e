// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input tracking: map a pointer coordinate on a track to a sentiment value.
//!
//! ## Usage
//!
//! 1) Describe the track's on-screen geometry with [`TrackBounds`], either
//!    directly or from a [`Rect`] via [`TrackBounds::from_rect`].
//! 2) On each pointer or touch event, call [`compute_position`] (or
//!    [`compute_position_at`] with a [`Point`]) together with the value
//!    currently shown.
//!
//! Coordinates outside the track clamp to the nearest end. Degenerate geometry
//! (zero, negative or NaN length) and NaN coordinates leave the previous value
//! unchanged.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use sentiment_slider::tracker::{TrackAxis, TrackBounds, compute_position_at};
//! use sentiment_slider::SentimentValue;
//!
//! let track = TrackBounds::from_rect(Rect::new(100.0, 0.0, 300.0, 40.0), TrackAxis::Horizontal);
//! let previous = SentimentValue::NEUTRAL;
//!
//! assert_eq!(compute_position_at(Point::new(260.0, 20.0), &track, previous).get(), 80);
//! assert_eq!(compute_position_at(Point::new(20.0, 20.0), &track, previous).get(), 0);
//! ```

use kurbo::{Point, Rect};

use crate::SentimentValue;

/// The axis a track is dragged along.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrackAxis {
    /// Values grow left to right.
    #[default]
    Horizontal,
    /// Values grow bottom to top, as y coordinates decrease.
    Vertical,
}

/// One-dimensional track geometry in the same units as pointer coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackBounds {
    /// Coordinate of the 0 end of the track: the left edge of a horizontal
    /// track, the bottom edge of a vertical one.
    pub start: f64,
    /// Length of the track along its axis.
    pub length: f64,
    /// Axis used to project points onto the track.
    pub axis: TrackAxis,
}

impl TrackBounds {
    /// Creates a horizontal track starting at `start` with the given length.
    #[must_use]
    pub const fn new(start: f64, length: f64) -> Self {
        Self {
            start,
            length,
            axis: TrackAxis::Horizontal,
        }
    }

    /// Derives track geometry from the track's rectangle.
    ///
    /// A vertical track starts at `y1`, so its bottom edge maps to 0.
    #[must_use]
    pub fn from_rect(rect: Rect, axis: TrackAxis) -> Self {
        let (start, length) = match axis {
            TrackAxis::Horizontal => (rect.x0, rect.width()),
            TrackAxis::Vertical => (rect.y1, rect.height()),
        };
        Self {
            start,
            length,
            axis,
        }
    }

    /// Returns `true` if the track cannot map coordinates to values.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length.is_nan() || self.length <= 0.0
    }

    /// Projects `point` onto the track's axis.
    #[must_use]
    pub fn position_of(&self, point: Point) -> f64 {
        match self.axis {
            TrackAxis::Horizontal => point.x,
            TrackAxis::Vertical => point.y,
        }
    }

    /// Returns the unclamped percentage along the track, or `None` if the
    /// track is degenerate.
    #[must_use]
    pub fn percentage(&self, coordinate: f64) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        let offset = match self.axis {
            TrackAxis::Horizontal => coordinate - self.start,
            TrackAxis::Vertical => self.start - coordinate,
        };
        Some(offset / self.length * 100.0)
    }
}

/// Maps a coordinate along the track to a clamped, rounded value.
///
/// Returns `previous` unchanged for degenerate tracks and NaN input.
#[must_use]
pub fn compute_position(
    coordinate: f64,
    track: &TrackBounds,
    previous: SentimentValue,
) -> SentimentValue {
    track
        .percentage(coordinate)
        .and_then(SentimentValue::from_f64)
        .unwrap_or(previous)
}

/// Like [`compute_position`], projecting `point` onto the track's axis first.
#[must_use]
pub fn compute_position_at(
    point: Point,
    track: &TrackBounds,
    previous: SentimentValue,
) -> SentimentValue {
    compute_position(track.position_of(point), track, previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREV: SentimentValue = SentimentValue::NEUTRAL;

    fn track() -> TrackBounds {
        TrackBounds::new(100.0, 200.0)
    }

    #[test]
    fn maps_linearly_across_the_track() {
        let t = track();
        assert_eq!(compute_position(100.0, &t, PREV).get(), 0);
        assert_eq!(compute_position(150.0, &t, PREV).get(), 25);
        assert_eq!(compute_position(200.0, &t, PREV).get(), 50);
        assert_eq!(compute_position(300.0, &t, PREV).get(), 100);
    }

    #[test]
    fn rounds_to_nearest_integer() {
        let t = track();
        // 100 + 2 * 33.4 → 33.4%
        assert_eq!(compute_position(166.8, &t, PREV).get(), 33);
        // 100 + 2 * 33.6 → 33.6%
        assert_eq!(compute_position(167.2, &t, PREV).get(), 34);
    }

    #[test]
    fn clamps_outside_the_track() {
        let t = track();
        assert_eq!(compute_position(-1_000.0, &t, PREV), SentimentValue::MIN);
        assert_eq!(compute_position(99.0, &t, PREV), SentimentValue::MIN);
        assert_eq!(compute_position(301.0, &t, PREV), SentimentValue::MAX);
        assert_eq!(compute_position(f64::INFINITY, &t, PREV), SentimentValue::MAX);
    }

    #[test]
    fn zero_length_track_keeps_previous_value() {
        let t = TrackBounds::new(100.0, 0.0);
        let prev = SentimentValue::new(42);
        assert!(t.is_degenerate());
        assert_eq!(compute_position(150.0, &t, prev), prev);
    }

    #[test]
    fn negative_and_nan_length_keep_previous_value() {
        let prev = SentimentValue::new(7);
        assert_eq!(
            compute_position(150.0, &TrackBounds::new(100.0, -20.0), prev),
            prev
        );
        assert_eq!(
            compute_position(150.0, &TrackBounds::new(100.0, f64::NAN), prev),
            prev
        );
    }

    #[test]
    fn nan_coordinate_keeps_previous_value() {
        let prev = SentimentValue::new(61);
        assert_eq!(compute_position(f64::NAN, &track(), prev), prev);
    }

    #[test]
    fn from_rect_uses_the_selected_axis() {
        let rect = Rect::new(10.0, 20.0, 110.0, 220.0);

        let h = TrackBounds::from_rect(rect, TrackAxis::Horizontal);
        assert_eq!((h.start, h.length), (10.0, 100.0));
        assert_eq!(compute_position_at(Point::new(60.0, 999.0), &h, PREV).get(), 50);

        let v = TrackBounds::from_rect(rect, TrackAxis::Vertical);
        assert_eq!((v.start, v.length), (220.0, 200.0));
        assert_eq!(compute_position_at(Point::new(999.0, 220.0), &v, PREV).get(), 0);
        assert_eq!(compute_position_at(Point::new(999.0, 170.0), &v, PREV).get(), 25);
        assert_eq!(compute_position_at(Point::new(999.0, 20.0), &v, PREV).get(), 100);
    }

    #[test]
    fn vertical_track_grows_upward() {
        let v = TrackBounds::from_rect(Rect::new(0.0, 0.0, 10.0, 100.0), TrackAxis::Vertical);
        assert_eq!(compute_position_at(Point::new(5.0, 90.0), &v, PREV).get(), 10);
        assert_eq!(compute_position_at(Point::new(5.0, 10.0), &v, PREV).get(), 90);
        // Past either end clamps.
        assert_eq!(compute_position_at(Point::new(5.0, 150.0), &v, PREV), SentimentValue::MIN);
        assert_eq!(compute_position_at(Point::new(5.0, -5.0), &v, PREV), SentimentValue::MAX);
    }

    #[test]
    fn inverted_rect_is_degenerate() {
        // kurbo does not normalize rects, so x1 < x0 yields a negative width.
        let t = TrackBounds::from_rect(Rect::new(200.0, 0.0, 100.0, 10.0), TrackAxis::Horizontal);
        assert!(t.is_degenerate());
        assert_eq!(compute_position(150.0, &t, PREV), PREV);
    }
}
