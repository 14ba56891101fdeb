//! # StitchKit Core
//!
//! Core types, constants, and errors for StitchKit.
//! Provides the normalized point and color types shared by the
//! segmenter, the color indexer, and the import pipeline.

pub mod constants;
pub mod data;
pub mod error;

pub use data::{palette::ThreadPalette, Point2, Rgb};

pub use error::{ColorError, DecodeError, Error, Result, StitchError};
