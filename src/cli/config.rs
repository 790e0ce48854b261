use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use tracklist_converter::{TracklistFormat, DEFAULT_FILE_STEM};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Formats written on each run
    pub formats: Vec<TracklistFormat>,

    /// File name stem of every output file
    pub file_stem: String,

    /// Leave label info out of every format
    pub no_labels: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            formats: TracklistFormat::ALL.to_vec(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            no_labels: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults when no file is given
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.file_stem.trim().is_empty() {
            bail!("output.file_stem must not be empty");
        }
        if self.output.file_stem.contains(['/', '\\']) {
            bail!("output.file_stem must be a file name, not a path");
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<log::LevelFilter> {
        self.logging
            .level
            .parse()
            .with_context(|| format!("Invalid log level '{}'", self.logging.level))
    }
}
