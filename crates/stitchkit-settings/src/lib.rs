//! StitchKit Settings Crate
//!
//! Handles import and render configuration, file persistence, and validation.

pub mod config;
pub mod error;

pub use config::{Config, ImportSettings, RenderSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
