//! Path sections produced by the segmenter

use serde::{Deserialize, Serialize};
use stitchkit_core::Point2;

/// One continuous, single-thread polyline extracted from a stitch stream
///
/// Sections are produced once by a segmentation pass and never mutated
/// after emission. A section with fewer than two points draws nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    pub thread_index: usize,
    pub points: Vec<Point2>,
    /// Opened by a hidden jump and has not received a point since.
    pub is_jump_only: bool,
}

impl Section {
    pub fn new(thread_index: usize) -> Self {
        Self {
            thread_index,
            points: Vec::new(),
            is_jump_only: false,
        }
    }

    pub(crate) fn jump_only(thread_index: usize) -> Self {
        Self {
            thread_index,
            points: Vec::new(),
            is_jump_only: true,
        }
    }

    pub(crate) fn push(&mut self, point: Point2) {
        self.points.push(point);
        self.is_jump_only = false;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the section has at least one visible segment
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Consecutive point pairs, one per visible stitch segment
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Total polyline length in normalized units
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance_to(&b)).sum()
    }
}
