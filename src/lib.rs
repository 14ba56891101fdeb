//! # StitchKit
//!
//! Turns decoded machine-embroidery stitch programs into per-thread path
//! sections ready for curve emission, with:
//! - Segmentation of the stitch stream at jumps, trims, stops and color changes
//! - Optional jump wires drawn as connecting lines
//! - A constant color ramp mapping each thread index to its palette color
//!
//! ## Architecture
//!
//! StitchKit is organized as a workspace with multiple crates:
//!
//! 1. **stitchkit-core** - Points, colors, thread palettes, errors
//! 2. **stitchkit-visualizer** - Segmenter, color ramp, emission planning
//! 3. **stitchkit-settings** - JSON/TOML configuration
//! 4. **stitchkit** - Document loading, the import pipeline and the CLI
//!
//! Decoding embroidery file formats and building host geometry are left to
//! the caller; documents arrive as JSON and leave as an [`EmissionPlan`].

pub mod cli;
pub mod document;
pub mod import;

pub use stitchkit_core::data;

pub use stitchkit_core::{
    ColorError, DecodeError, Error, Point2, Result, Rgb, StitchError, ThreadPalette,
};

pub use stitchkit_visualizer::{
    build_color_stops, segment, shading_key, truncate_position, Bounds, ColorRamp, ColorStop,
    EmissionPlan, Interrupted, PlanSettings, Section, SectionPlan, SegmentStats, Segmentation,
    Segmenter, SegmenterConfig, StitchArc, StitchCommand, StitchEvent,
};

pub use stitchkit_settings::{Config, ImportSettings, RenderSettings, SettingsError};

pub use document::StitchDocument;
pub use import::{import_pattern, import_pattern_interruptible, ImportReport, ImportSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
