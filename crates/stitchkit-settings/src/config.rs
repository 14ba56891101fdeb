//! Configuration for StitchKit imports
//!
//! Supports JSON and TOML files, chosen by file extension.
//!
//! Configuration is organized into two sections:
//! - Import settings consumed by the segmenter (scale, jump wires)
//! - Render settings forwarded to the geometry emitter

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stitchkit_core::constants::{
    DEFAULT_SCALE, DEFAULT_SECTION_LIFT, DEFAULT_THREAD_THICKNESS, DEFAULT_Z_HEIGHT,
};
use stitchkit_core::StitchError;
use stitchkit_visualizer::{PlanSettings, SegmenterConfig};
use tracing::debug;

const CONFIG_DIR_NAME: &str = "stitchkit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings consumed by the segmenter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Decoder units per normalized unit
    pub scale: f64,
    /// Draw jumps as connecting lines instead of breaking the path
    pub show_jump_wires: bool,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            show_jump_wires: true,
        }
    }
}

impl ImportSettings {
    /// Validated segmenter configuration for these settings
    pub fn segmenter_config(&self) -> Result<SegmenterConfig, StitchError> {
        SegmenterConfig::new(self.scale, self.show_jump_wires)
    }
}

/// Settings forwarded to the geometry emitter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub thread_thickness: f64,
    pub z_height: f64,
    pub section_lift: f64,
    /// Whether the host should create a thread material
    pub create_material: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            thread_thickness: DEFAULT_THREAD_THICKNESS,
            z_height: DEFAULT_Z_HEIGHT,
            section_lift: DEFAULT_SECTION_LIFT,
            create_material: true,
        }
    }
}

impl RenderSettings {
    /// Reject negative or non-finite geometry values
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("render.thread_thickness", self.thread_thickness),
            ("render.z_height", self.z_height),
            ("render.section_lift", self.section_lift),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn plan_settings(&self) -> PlanSettings {
        PlanSettings {
            thread_thickness: self.thread_thickness,
            z_height: self.z_height,
            section_lift: self.section_lift,
            create_material: self.create_material,
        }
    }
}

/// Complete StitchKit configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub import: ImportSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location in the platform config directory
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load configuration from a .json or .toml file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a .json or .toml file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate all settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.import.segmenter_config().is_err() {
            return Err(ConfigError::ValueOutOfRange {
                key: "import.scale".to_string(),
                value: self.import.scale.to_string(),
            }
            .into());
        }
        self.render.validate()?;
        Ok(())
    }
}
