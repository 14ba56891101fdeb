//! Constant-interpolation thread color ramp
//!
//! Each thread `i` of an `n`-thread palette owns one stop at `i / n`,
//! truncated to three decimals. A host ramp in constant mode, fed the
//! same truncated key, then returns exactly one color per thread with no
//! bleed between neighbours.
//!
//! Truncation (not rounding) keeps the table reproducible and makes the
//! key computed at shading time land exactly on its stop.

use serde::{Deserialize, Serialize};
use stitchkit_core::constants::COLOR_STOP_RESOLUTION;
use stitchkit_core::{ColorError, Rgb, ThreadPalette};
use tracing::{debug, warn};

/// Truncate a ramp position to three decimal digits
pub fn truncate_position(value: f64) -> f64 {
    (value * COLOR_STOP_RESOLUTION).floor() / COLOR_STOP_RESOLUTION
}

/// Normalized ramp key for a thread: truncated `thread_index / thread_count`
///
/// Returns `None` for an empty palette.
pub fn shading_key(thread_index: usize, thread_count: usize) -> Option<f64> {
    if thread_count == 0 {
        return None;
    }
    Some(truncate_position(thread_index as f64 / thread_count as f64))
}

/// One ramp entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position in [0, 1), truncated to three decimals
    pub position: f64,
    pub color: Rgb,
    /// Palette index that produced this stop
    pub thread_index: usize,
}

/// Stop table built once per document
///
/// Deserialization re-checks the table so a stored ramp can never be
/// empty or out of order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRamp")]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
    thread_count: usize,
    collisions: usize,
}

#[derive(Deserialize)]
struct StoredRamp {
    stops: Vec<ColorStop>,
    thread_count: usize,
    collisions: usize,
}

impl TryFrom<StoredRamp> for ColorRamp {
    type Error = ColorError;

    fn try_from(stored: StoredRamp) -> Result<Self, Self::Error> {
        let StoredRamp {
            stops,
            thread_count,
            collisions,
        } = stored;

        if stops.is_empty() || thread_count == 0 {
            return Err(ColorError::EmptyPalette);
        }
        if stops.len() + collisions != thread_count {
            return Err(invalid_ramp(format!(
                "{} stops and {} collisions do not add up to {} threads",
                stops.len(),
                collisions,
                thread_count
            )));
        }
        if let Some(stop) = stops
            .iter()
            .find(|stop| !(0.0..1.0).contains(&stop.position) || stop.thread_index >= thread_count)
        {
            return Err(invalid_ramp(format!(
                "stop for thread {} at {} is outside the ramp",
                stop.thread_index, stop.position
            )));
        }
        if stops.windows(2).any(|pair| pair[0].position >= pair[1].position) {
            return Err(invalid_ramp("stop positions are not strictly increasing".to_string()));
        }

        Ok(Self {
            stops,
            thread_count,
            collisions,
        })
    }
}

fn invalid_ramp(reason: String) -> ColorError {
    ColorError::InvalidRamp { reason }
}

impl ColorRamp {
    /// Build the stop table for `palette`
    ///
    /// Fails on an empty palette or a channel outside [0, 1]. When the
    /// palette is large enough for two indices to truncate to the same
    /// position, the first index keeps the stop and the collision is
    /// counted.
    pub fn new(palette: &ThreadPalette) -> Result<Self, ColorError> {
        palette.validate()?;

        let thread_count = palette.len();
        let mut stops: Vec<ColorStop> = Vec::with_capacity(thread_count);
        let mut collisions = 0;

        for (thread_index, color) in palette.iter().enumerate() {
            let position = truncate_position(thread_index as f64 / thread_count as f64);

            if let Some(last) = stops.last() {
                if position <= last.position {
                    collisions += 1;
                    warn!(
                        "Thread {} truncates to stop {:.3} already held by thread {}",
                        thread_index, position, last.thread_index
                    );
                    continue;
                }
            }

            stops.push(ColorStop {
                position,
                color: *color,
                thread_index,
            });
        }

        debug!(
            "Built color ramp: {} threads, {} stops, {} collisions",
            thread_count,
            stops.len(),
            collisions
        );

        Ok(Self {
            stops,
            thread_count,
            collisions,
        })
    }

    /// Stops in strictly increasing position order
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Number of palette threads the ramp was built from
    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Palette indices that lost their stop to truncation
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Constant interpolation: color of the last stop at or below `fac`
    ///
    /// Keys below the first stop take the first color; keys at or above
    /// the last stop take the last color.
    pub fn evaluate(&self, fac: f64) -> Rgb {
        let idx = self.stops.partition_point(|stop| stop.position <= fac);
        self.stops[idx.saturating_sub(1)].color
    }

    /// Color for a thread index, using the same key as shading
    ///
    /// Indices past the end of the palette reuse the last thread's color.
    pub fn lookup(&self, thread_index: usize) -> Rgb {
        if thread_index >= self.thread_count {
            debug!(
                "Thread {} is outside the {}-color palette",
                thread_index, self.thread_count
            );
        }
        let key = thread_index as f64 / self.thread_count as f64;
        self.evaluate(truncate_position(key))
    }

    /// Ramp key the shader derives for `thread_index`
    pub fn shading_key(&self, thread_index: usize) -> f64 {
        truncate_position(thread_index as f64 / self.thread_count as f64)
    }
}

/// Build the stop table for `palette`
pub fn build_color_stops(palette: &ThreadPalette) -> Result<Vec<ColorStop>, ColorError> {
    Ok(ColorRamp::new(palette)?.stops)
}
