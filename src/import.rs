//! Import pipeline: stitch document in, sections and shading out.

use crate::document::StitchDocument;
use std::fmt;
use std::sync::atomic::AtomicBool;
use stitchkit_core::{Error, Result};
use stitchkit_settings::{Config, ConfigError};
use stitchkit_visualizer::{
    Bounds, ColorRamp, EmissionPlan, Section, SegmentStats, Segmentation, Segmenter,
};
use tracing::{info, warn};

/// Everything an external geometry emitter needs for one document
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub sections: Vec<Section>,
    pub stats: SegmentStats,
    /// `None` when the palette is empty; the import proceeds unshaded
    pub ramp: Option<ColorRamp>,
    pub plan: EmissionPlan,
    pub bounds: Bounds,
}

impl ImportReport {
    pub fn is_shaded(&self) -> bool {
        self.ramp.is_some()
    }

    /// One-line outcome for the user
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            events: self.stats.events,
            sections: self.sections.len(),
            visible_sections: self.plan.visible_sections().count(),
            threads: self.stats.thread_count(),
            stops: self.ramp.as_ref().map_or(0, |ramp| ramp.stops().len()),
            unknown_commands: self.stats.unknown_count(),
            width: self.bounds.width(),
            height: self.bounds.height(),
        }
    }
}

/// Counts reported after a successful import
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportSummary {
    pub events: usize,
    pub sections: usize,
    pub visible_sections: usize,
    pub threads: usize,
    pub stops: usize,
    pub unknown_commands: usize,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} events -> {} sections ({} visible), {} threads, {} color stops, {} unknown commands, extent {:.4} x {:.4}",
            self.events,
            self.sections,
            self.visible_sections,
            self.threads,
            self.stops,
            self.unknown_commands,
            self.width,
            self.height
        )
    }
}

/// Segment and shade a document
///
/// An empty palette is not fatal: the sections are still produced and the
/// report carries no ramp. Invalid configuration fails before any event
/// is read.
pub fn import_pattern(document: &StitchDocument, config: &Config) -> Result<ImportReport> {
    let segmenter = segmenter_for(config)?;
    let segmentation = segmenter.segment(&document.events);
    build_report(segmentation, document, config)
}

/// Like [`import_pattern`], polling `cancel` between events
pub fn import_pattern_interruptible(
    document: &StitchDocument,
    config: &Config,
    cancel: &AtomicBool,
) -> Result<ImportReport> {
    let segmenter = segmenter_for(config)?;
    let segmentation = segmenter
        .segment_interruptible(&document.events, cancel)
        .map_err(|interrupted| {
            warn!(
                "Import cancelled with {} sections completed",
                interrupted.completed.len()
            );
            Error::from(interrupted.error())
        })?;
    build_report(segmentation, document, config)
}

fn segmenter_for(config: &Config) -> Result<Segmenter> {
    let segmenter_config = config.import.segmenter_config()?;
    config.render.validate().map_err(|e| match e {
        ConfigError::ValueOutOfRange { key, value } => Error::InvalidSetting {
            key,
            reason: format!("{} is not a finite value >= 0", value),
        },
        other => Error::other(other.to_string()),
    })?;
    Ok(Segmenter::new(segmenter_config))
}

fn build_report(
    segmentation: Segmentation,
    document: &StitchDocument,
    config: &Config,
) -> Result<ImportReport> {
    let ramp = if document.palette.is_empty() {
        warn!("Thread palette is empty; sections will not be shaded");
        None
    } else {
        Some(ColorRamp::new(&document.palette)?)
    };

    if let Some(ramp) = &ramp {
        let threads = segmentation.stats.thread_count();
        if threads > ramp.thread_count() {
            warn!(
                "Pattern uses {} threads but the palette has {}; extra threads reuse the last color",
                threads,
                ramp.thread_count()
            );
        }
    }

    let Segmentation { sections, stats } = segmentation;
    let plan = EmissionPlan::build(&sections, ramp.as_ref(), config.render.plan_settings());
    let bounds = Bounds::from_sections(&sections);

    let report = ImportReport {
        sections,
        stats,
        ramp,
        plan,
        bounds,
    };
    info!("Import complete: {}", report.summary());
    Ok(report)
}
