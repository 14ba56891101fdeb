//! Stitch stream segmentation
//!
//! This module provides:
//! - Stitch command codes and raw events
//! - Path sections
//! - The single-pass segmenter and its statistics

pub mod command;
pub mod section;
pub mod segmenter;

pub use command::*;
pub use section::*;
pub use segmenter::*;
