use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};

/// Clamp a wide integer channel value into 0..=255
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

// ============================================================================
// Channel
// ============================================================================

/// One of the three color channels of an RGB pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl FromStr for Channel {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(RasterError::InvalidParameter(format!(
                "unknown channel '{}' (expected red, green or blue)",
                other
            ))),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Color
// ============================================================================

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, clamping each channel into 0..=255
    #[inline]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Look up a palette color used for blank canvases
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::BLACK),
            "red" => Ok(Self::RED),
            "green" => Ok(Self::GREEN),
            "blue" => Ok(Self::BLUE),
            other => Err(RasterError::InvalidParameter(format!(
                "unknown background color '{}'",
                other
            ))),
        }
    }

    #[inline]
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Same color with one channel replaced (clamped)
    #[inline]
    pub fn with_channel(self, channel: Channel, value: i32) -> Self {
        let v = clamp_channel(value);
        match channel {
            Channel::Red => Self { r: v, ..self },
            Channel::Green => Self { g: v, ..self },
            Channel::Blue => Self { b: v, ..self },
        }
    }

    /// Integer mean of the three channels, floored
    #[inline]
    pub fn mean(self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }

    /// Gray color with every channel set to `mean()`
    #[inline]
    pub fn to_gray(self) -> Self {
        let m = self.mean();
        Self::new(m, m, m)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(c: Color) -> Self {
        (c.r, c.g, c.b)
    }
}
