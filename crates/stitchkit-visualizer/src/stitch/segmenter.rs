//! Stitch stream segmenter
//!
//! Groups a time-ordered stream of stitch events into per-thread path
//! sections in a single left-to-right pass. One accumulator section is
//! open at any time; boundary commands close it and open the next one.
//!
//! Boundary handling per command:
//! - `Stitch` appends its point
//! - `Jump` appends its point when jump wires are shown, otherwise closes
//!   the section and opens a jump-only one without the point
//! - `ColorChange` closes the section and advances the thread index
//! - `Trim` and `End` close the section and drop their point
//! - `Stop`, `NeedleSet` and unknown codes close the section and start
//!   the next one with their point
//!
//! The pass never fails on event content. Unknown codes are counted in
//! [`SegmentStats`] and logged.

use super::command::{StitchCommand, StitchEvent};
use super::section::Section;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use stitchkit_core::constants::DEFAULT_SCALE;
use stitchkit_core::{Point2, StitchError};
use tracing::{debug, trace, warn};

/// Validated segmenter configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmenterConfig {
    scale: f64,
    show_jump_wires: bool,
}

impl SegmenterConfig {
    /// Create a configuration, rejecting a scale that is not a finite value > 0
    pub fn new(scale: f64, show_jump_wires: bool) -> Result<Self, StitchError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(StitchError::InvalidScale { scale });
        }
        Ok(Self {
            scale,
            show_jump_wires,
        })
    }

    /// Divisor applied to raw decoder coordinates
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Whether jumps are drawn as part of the path
    pub fn show_jump_wires(&self) -> bool {
        self.show_jump_wires
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            show_jump_wires: true,
        }
    }
}

/// Per-pass event counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStats {
    pub events: usize,
    pub stitches: usize,
    pub jumps: usize,
    pub trims: usize,
    pub stops: usize,
    pub color_changes: usize,
    pub needle_sets: usize,
    pub ends: usize,
    /// Unrecognized decoder codes and how often each occurred
    pub unknown_codes: BTreeMap<i32, usize>,
}

impl SegmentStats {
    fn record(&mut self, command: StitchCommand) {
        self.events += 1;
        match command {
            StitchCommand::Stitch => self.stitches += 1,
            StitchCommand::Jump => self.jumps += 1,
            StitchCommand::Trim => self.trims += 1,
            StitchCommand::Stop => self.stops += 1,
            StitchCommand::ColorChange => self.color_changes += 1,
            StitchCommand::NeedleSet => self.needle_sets += 1,
            StitchCommand::End => self.ends += 1,
            StitchCommand::Unknown(code) => *self.unknown_codes.entry(code).or_insert(0) += 1,
        }
    }

    /// Total number of events with an unrecognized code
    pub fn unknown_count(&self) -> usize {
        self.unknown_codes.values().sum()
    }

    /// Number of distinct threads referenced by the stream
    pub fn thread_count(&self) -> usize {
        self.color_changes + 1
    }
}

/// Result of a complete segmentation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    pub sections: Vec<Section>,
    pub stats: SegmentStats,
}

impl Segmentation {
    /// Total number of emitted points across all sections
    pub fn point_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}

/// A pass that was cancelled between events
///
/// Holds every section closed before the interruption. The open
/// accumulator is discarded because it never reached a boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Interrupted {
    pub completed: Vec<Section>,
    pub stats: SegmentStats,
    pub processed: usize,
}

impl Interrupted {
    pub fn error(&self) -> StitchError {
        StitchError::Interrupted {
            processed: self.processed,
        }
    }
}

/// Accumulator carried through one pass
struct SectionBuilder {
    config: SegmenterConfig,
    thread_index: usize,
    current: Section,
    sections: Vec<Section>,
    stats: SegmentStats,
}

impl SectionBuilder {
    fn new(config: SegmenterConfig) -> Self {
        Self {
            config,
            thread_index: 0,
            current: Section::new(0),
            sections: Vec::new(),
            stats: SegmentStats::default(),
        }
    }

    fn step(&mut self, index: usize, event: &StitchEvent) {
        let command = event.command;
        let show_jump_wires = self.config.show_jump_wires;
        self.stats.record(command);

        if let StitchCommand::Unknown(code) = command {
            if self.stats.unknown_codes.get(&code) == Some(&1) {
                warn!("Event {}: unknown stitch command code {}", index, code);
            }
        }

        if command.closes_section(show_jump_wires) {
            let next = match command {
                StitchCommand::Jump => {
                    trace!("Event {}: hidden jump closes section", index);
                    Section::jump_only(self.thread_index)
                }
                StitchCommand::ColorChange => {
                    self.thread_index += 1;
                    trace!("Event {}: color change to thread {}", index, self.thread_index);
                    Section::new(self.thread_index)
                }
                _ => {
                    trace!("Event {}: {} closes section", index, command);
                    Section::new(self.thread_index)
                }
            };
            self.close(next);
        }

        if command.keeps_point(show_jump_wires) {
            self.current.push(Point2::from_raw(event.x, event.y, self.config.scale));
        }
    }

    fn close(&mut self, next: Section) {
        let done = std::mem::replace(&mut self.current, next);
        self.sections.push(done);
    }

    fn finish(mut self) -> Segmentation {
        self.sections.push(self.current);
        Segmentation {
            sections: self.sections,
            stats: self.stats,
        }
    }
}

/// Single-pass stitch stream segmenter
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment a complete event stream
    ///
    /// The final accumulator is always emitted, so an empty stream yields
    /// exactly one empty section on thread 0.
    pub fn segment(&self, events: &[StitchEvent]) -> Segmentation {
        debug!(
            "Segmenting {} events (scale={}, jump wires={})",
            events.len(),
            self.config.scale,
            self.config.show_jump_wires
        );

        let segmentation = events
            .iter()
            .enumerate()
            .fold(SectionBuilder::new(self.config), |mut builder, (index, event)| {
                builder.step(index, event);
                builder
            })
            .finish();

        log_summary(&segmentation);
        segmentation
    }

    /// Segment a stream, polling `cancel` before each event
    ///
    /// Sections closed before the flag was observed are returned intact in
    /// the `Interrupted` value.
    pub fn segment_interruptible(
        &self,
        events: &[StitchEvent],
        cancel: &AtomicBool,
    ) -> Result<Segmentation, Interrupted> {
        self.segment_until(events, |_| cancel.load(Ordering::Relaxed))
    }

    /// Segment a stream, asking `should_stop` with each event index before
    /// the event is processed
    pub fn segment_until<F>(
        &self,
        events: &[StitchEvent],
        mut should_stop: F,
    ) -> Result<Segmentation, Interrupted>
    where
        F: FnMut(usize) -> bool,
    {
        let mut builder = SectionBuilder::new(self.config);

        for (index, event) in events.iter().enumerate() {
            if should_stop(index) {
                debug!(
                    "Segmentation cancelled after {} of {} events",
                    index,
                    events.len()
                );
                return Err(Interrupted {
                    completed: builder.sections,
                    stats: builder.stats,
                    processed: index,
                });
            }
            builder.step(index, event);
        }

        let segmentation = builder.finish();
        log_summary(&segmentation);
        Ok(segmentation)
    }
}

fn log_summary(segmentation: &Segmentation) {
    let stats = &segmentation.stats;
    debug!(
        "Segmentation complete: {} sections, {} points, stitches={}, jumps={}, trims={}, color changes={}, ends={}, unknown={}",
        segmentation.sections.len(),
        segmentation.point_count(),
        stats.stitches,
        stats.jumps,
        stats.trims,
        stats.color_changes,
        stats.ends,
        stats.unknown_count()
    );
}

/// Segment `events` with the given scale and jump-wire policy
pub fn segment(
    events: &[StitchEvent],
    scale: f64,
    show_jump_wires: bool,
) -> Result<Vec<Section>, StitchError> {
    let config = SegmenterConfig::new(scale, show_jump_wires)?;
    Ok(Segmenter::new(config).segment(events).sections)
}
