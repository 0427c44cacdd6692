//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use log::LevelFilter;
use sentline_core::ReformatConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Target file configuration
    #[serde(default)]
    pub target: ReformatConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level used when no -v flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Parse and validate TOML configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.target.path().as_os_str().is_empty() {
            return Err(CliError::ConfigError("target.path is empty".to_string()));
        }
        self.logging.level_filter()?;
        Ok(())
    }

    /// Reformat configuration, with `path` taking precedence over the file
    pub fn reformat_config(&self, path: Option<&Path>) -> ReformatConfig {
        match path {
            Some(path) => self.target.clone().with_path(path),
            None => self.target.clone(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level name
    pub fn level_filter(&self) -> Result<LevelFilter, CliError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| CliError::InvalidLogLevel(self.level.clone()))
    }
}
