//! Data models for normalized stitch geometry and thread colors.

pub mod palette;

use crate::constants::RGB8_MAX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized world-space coordinate
///
/// Produced from decoder units by dividing by the import scale and
/// flipping the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Normalize raw decoder coordinates: `(x / scale, -y / scale)`.
    pub fn from_raw(x: f64, y: f64, scale: f64) -> Self {
        Self {
            x: x / scale,
            y: -y / scale,
        }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(&self, other: &Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// RGB color with float channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert 8-bit decoder channels to floats in [0, 1]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / RGB8_MAX,
            g: f64::from(g) / RGB8_MAX,
            b: f64::from(b) / RGB8_MAX,
        }
    }

    /// RGBA with an opaque alpha channel, as host color ramps expect
    pub fn to_rgba(self) -> [f64; 4] {
        [self.r, self.g, self.b, 1.0]
    }

    /// Channels paired with their names, in r, g, b order
    pub fn channels(&self) -> [(&'static str, f64); 3] {
        [("red", self.r), ("green", self.g), ("blue", self.b)]
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
    }
}
