// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::{ColorDescriptor, SentimentColorMapper, Spectacular, Standard};

/// Selects one of the built-in color strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Colorway {
    /// Solid piecewise-RGB background, see [`Standard`].
    #[default]
    Standard,
    /// Hue gradient background, see [`Spectacular`].
    Spectacular,
}

impl Colorway {
    /// All built-in colorways.
    pub const ALL: [Self; 2] = [Self::Standard, Self::Spectacular];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Spectacular => "spectacular",
        }
    }
}

impl SentimentColorMapper for Colorway {
    fn map_value_to_color(&self, value: u8) -> ColorDescriptor {
        match self {
            Self::Standard => Standard.map_value_to_color(value),
            Self::Spectacular => Spectacular.map_value_to_color(value),
        }
    }
}

impl fmt::Display for Colorway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
