//! Thread palette
//!
//! Ordered list of thread colors. Index 0 is the thread in use before the
//! first color change; each color change advances to the next index.

use super::Rgb;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered, index-addressable thread colors
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadPalette {
    colors: Vec<Rgb>,
}

impl ThreadPalette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Build a palette from 8-bit decoder thread colors
    pub fn from_rgb8<I>(threads: I) -> Self
    where
        I: IntoIterator<Item = (u8, u8, u8)>,
    {
        let colors: Vec<Rgb> = threads
            .into_iter()
            .map(|(r, g, b)| Rgb::from_rgb8(r, g, b))
            .collect();
        debug!("Built thread palette with {} colors", colors.len());
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.colors.iter()
    }

    /// Check that the palette is non-empty and every channel is in [0, 1]
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }

        for (index, color) in self.colors.iter().enumerate() {
            for (channel, value) in color.channels() {
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(ColorError::ChannelOutOfRange {
                        index,
                        channel,
                        value,
                    });
                }
            }
        }

        Ok(())
    }
}

impl From<Vec<Rgb>> for ThreadPalette {
    fn from(colors: Vec<Rgb>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Rgb> for ThreadPalette {
    fn from_iter<T: IntoIterator<Item = Rgb>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
