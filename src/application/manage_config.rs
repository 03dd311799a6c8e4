//! Config management use case

use crate::error::{MindnoteError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for managing journal configuration
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.root)?;

        match key {
            "entries_file" => Ok(config.entries_file),
            "utc_offset" => Ok(config.utc_offset.unwrap_or_else(|| "local".to_string())),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MindnoteError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: entries_file, utc_offset, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.root)?;

        match key {
            "entries_file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(MindnoteError::Config(
                        "entries_file cannot be empty".to_string(),
                    ));
                }
                config.entries_file = value.to_string();
            }
            "utc_offset" => {
                config.utc_offset =
                    Config::parse_utc_offset(value)?.map(|offset| offset.to_string());
            }
            "created" => {
                return Err(MindnoteError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MindnoteError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: entries_file, utc_offset",
                    key
                )));
            }
        }

        config.save_to_dir(&self.root)?;
        tracing::debug!(key, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }
}
