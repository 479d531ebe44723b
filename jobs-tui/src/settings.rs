//! User settings read from `settings.toml`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use jobs_lib::model::Variant;
use log::{LevelFilter, debug};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid log level '{0}'")]
    LogLevel(String),
}

/// Start-up configuration of the form.
///
/// ```toml
/// locale = "uk"
/// variant = "company-url"
/// log_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale of validation messages.
    pub locale: String,
    /// Which optional fields the form shows.
    pub variant: Variant,
    /// Level for the file log.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            variant: Variant::default(),
            log_level: "debug".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a file; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&text)
    }

    /// Parse settings from TOML text.
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.level_filter()?;
        Ok(settings)
    }

    /// The configured log level.
    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }
}
