//! Error handling for StitchKit
//!
//! Provides error types for each stage of an import:
//! - Stitch errors (segmenter configuration and interruption)
//! - Color errors (thread palette and color ramp construction)
//! - Decode errors (the upstream stitch stream could not be produced)
//!
//! Unknown stitch commands are deliberately absent: the segmenter counts
//! and logs them instead of failing.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Segmenter error type
///
/// Raised before a pass starts (invalid configuration) or when a pass
/// is interrupted by its caller. Never raised for individual events.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StitchError {
    /// Coordinate scale divisor is zero, negative, or not finite
    #[error("Invalid coordinate scale {scale}: must be a finite value > 0")]
    InvalidScale {
        /// The rejected scale value.
        scale: f64,
    },

    /// Segmentation was cancelled between events
    #[error("Segmentation interrupted after {processed} events")]
    Interrupted {
        /// Number of events consumed before the interruption was observed.
        processed: usize,
    },
}

/// Color error type
///
/// Represents thread palette problems that prevent shading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Palette has no threads, so no color stops can be produced
    #[error("Thread palette is empty")]
    EmptyPalette,

    /// A color channel lies outside [0, 1] or is not finite
    #[error("Thread {index} has {channel} channel {value} outside [0, 1]")]
    ChannelOutOfRange {
        /// Palette index of the offending thread.
        index: usize,
        /// Channel name ("red", "green" or "blue").
        channel: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A stored ramp does not describe a usable stop table
    #[error("Invalid color ramp: {reason}")]
    InvalidRamp {
        /// What is inconsistent about the stop table.
        reason: String,
    },
}

/// Decode error type
///
/// The stitch stream and palette come from an external decoder. These
/// errors surface as an aborted import.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The decoder output could not be produced or read
    #[error("Stitch stream unavailable: {reason}")]
    Unavailable {
        /// Why the stream could not be obtained.
        reason: String,
    },

    /// The decoder output was read but is not a valid stitch document
    #[error("Invalid stitch document: {reason}")]
    InvalidDocument {
        /// Why the document was rejected.
        reason: String,
    },
}

/// Main error type for StitchKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Segmenter error
    #[error(transparent)]
    Stitch(#[from] StitchError),

    /// Palette or color ramp error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Upstream decoder error
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A configuration value the pipeline cannot use
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if the upstream stitch stream could not be produced
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is a palette error (fatal to shading only)
    pub fn is_palette_error(&self) -> bool {
        matches!(self, Error::Color(_))
    }

    /// Check if a configuration value was rejected
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidSetting { .. } | Error::Stitch(StitchError::InvalidScale { .. })
        )
    }

    /// Check if a segmentation pass was interrupted
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Stitch(StitchError::Interrupted { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
