//! Configuration module for the numcheck CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the numcheck application.

use dirs::{config_dir, home_dir};
use numlit_drv::{DriverOptions, DEFAULT_OUTPUT_EXTENSION, DEFAULT_OUTPUT_SUFFIX};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{NumcheckError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "numcheck.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Where and how results are written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Summary report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Output file configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Appended to the input file stem.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Output file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory for output files. Unset means next to each input file.
    #[serde(default)]
    pub dir: Option<String>,

    /// Echo each result to the console.
    #[serde(default = "default_true")]
    pub echo: bool,
}

/// Summary report configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Summary format for the check command (text, json).
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}

fn default_extension() -> String {
    DEFAULT_OUTPUT_EXTENSION.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            extension: default_extension(),
            dir: None,
            echo: true,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl OutputConfig {
    /// Builds driver options from this configuration.
    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            output_suffix: self.suffix.clone(),
            output_extension: self.extension.clone(),
            output_dir: self.dir.as_ref().map(PathBuf::from),
            echo: self.echo,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NumcheckError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            NumcheckError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("numcheck").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("numcheck").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
