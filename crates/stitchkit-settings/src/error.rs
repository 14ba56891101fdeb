//! Failures while reading, writing or checking a StitchKit config file

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// Config file exists but could not be read
    #[error("Cannot read config {0}")]
    LoadError(String),

    #[error("Cannot write config {0}")]
    SaveError(String),

    /// No platform config directory to fall back to
    #[error("No config location: {0}")]
    ConfigDirectory(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error("Malformed JSON config: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Malformed TOML config: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Cannot encode config as TOML: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Config contents StitchKit refuses to use
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Only `.toml` and `.json` files are understood
    #[error("Config files must end in .toml or .json, not '{0}'")]
    UnsupportedFormat(String),

    #[error("{key} = {value} is out of range")]
    ValueOutOfRange { key: String, value: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
