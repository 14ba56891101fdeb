//! Materialized decoder output
//!
//! A `StitchDocument` is what an external embroidery decoder hands over:
//! the complete stitch stream in decoder units and the thread palette.
//! It is read from JSON; no embroidery file format is parsed here.

use serde::{Deserialize, Serialize};
use std::path::Path;
use stitchkit_core::{DecodeError, ThreadPalette};
use stitchkit_visualizer::StitchEvent;
use tracing::debug;

/// Stitch stream and palette of one document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StitchDocument {
    pub events: Vec<StitchEvent>,
    #[serde(default)]
    pub palette: ThreadPalette,
}

impl StitchDocument {
    pub fn new(events: Vec<StitchEvent>, palette: ThreadPalette) -> Self {
        Self { events, palette }
    }

    /// Parse a JSON document
    pub fn from_json(content: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(content).map_err(|e| DecodeError::InvalidDocument {
            reason: e.to_string(),
        })
    }

    /// Read a JSON document from disk
    pub fn load(path: &Path) -> Result<Self, DecodeError> {
        let content = std::fs::read_to_string(path).map_err(|e| DecodeError::Unavailable {
            reason: format!("{}: {}", path.display(), e),
        })?;
        let document = Self::from_json(&content)?;
        debug!(
            "Loaded {} stitches and {} threads from {}",
            document.events.len(),
            document.palette.len(),
            path.display()
        );
        Ok(document)
    }

    pub fn to_json(&self) -> Result<String, DecodeError> {
        serde_json::to_string_pretty(self).map_err(|e| DecodeError::InvalidDocument {
            reason: e.to_string(),
        })
    }
}
