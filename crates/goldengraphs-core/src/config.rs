//! Logging configuration for hosts embedding goldengraphs
//!
//! The algorithms take every option as an argument, so the only thing worth
//! configuring from a file is how the crate's `tracing` output is set up.
//! Hosts can embed [`LoggingConfig`] in their own TOML config or load it
//! standalone.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{GraphError, Result};

/// Bare level names accepted in `level`
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log at debug level when no explicit level is set
    #[serde(default)]
    pub verbose: bool,

    /// Explicit level (`trace` .. `off`) or a full filter directive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LoggingConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check that `level` is a known level or a filter directive
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.level {
            let level = level.trim();
            if level.contains('=') {
                return Ok(());
            }
            if !LEVELS.contains(&level.to_lowercase().as_str()) {
                bail_invalid!("log level", level);
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for LoggingConfig {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}
