//! # StitchKit Visualizer
//!
//! Stitch stream segmentation and thread shading for StitchKit.
//! Includes the segmenter, color ramp builder, and emission planning.

pub mod stitch;
pub mod visualizer;

pub use stitch::{
    segment, Interrupted, Section, SegmentStats, Segmentation, Segmenter, SegmenterConfig,
    StitchCommand, StitchEvent,
};

pub use visualizer::{
    build_color_stops, shading_key, truncate_position, Bounds, ColorRamp, ColorStop,
    EmissionPlan, PlanSettings, SectionPlan, StitchArc,
};
