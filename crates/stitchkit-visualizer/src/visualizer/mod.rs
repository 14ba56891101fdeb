//! Shading and emission data for segmented stitch paths
//!
//! This module provides:
//! - Constant-interpolation thread color ramps
//! - Emission plans for downstream geometry builders
//! - Bounds of segmented geometry

pub mod bounds;
pub mod color_ramp;
pub mod emission;

pub use bounds::Bounds;
pub use color_ramp::{build_color_stops, shading_key, truncate_position, ColorRamp, ColorStop};
pub use emission::{EmissionPlan, PlanSettings, SectionPlan, StitchArc};
