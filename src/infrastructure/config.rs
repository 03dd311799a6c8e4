//! Configuration management

use crate::error::{MindnoteError, Result};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding per-journal metadata
pub const META_DIR: &str = ".mindnote";

/// Default entries file name, relative to the journal root
pub const DEFAULT_ENTRIES_FILE: &str = "entries.toml";

/// Calendar the observer reads entry dates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observer {
    /// The machine's zone, daylight saving included, looked up per instant
    Local,
    Fixed(FixedOffset),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_entries_file")]
    pub entries_file: String,
    /// Fixed observer offset such as "+02:00"; the machine's zone when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
    pub created: DateTime<Utc>,
}

fn default_entries_file() -> String {
    DEFAULT_ENTRIES_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            entries_file: default_entries_file(),
            utc_offset: None,
            created: Utc::now(),
        }
    }

    /// Load config from .mindnote/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MindnoteError::NotMindnoteDirectory(path.to_path_buf())
            } else {
                MindnoteError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MindnoteError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.observer_offset()?;
        Ok(config)
    }

    /// Save config to .mindnote/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        let config_path = meta_dir.join("config.toml");

        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MindnoteError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Parse a `utc_offset` value; "local" clears it
    pub fn parse_utc_offset(value: &str) -> Result<Option<FixedOffset>> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("local") {
            return Ok(None);
        }
        value
            .parse::<FixedOffset>()
            .map(Some)
            .map_err(|_| MindnoteError::Config(format!("Invalid utc_offset: '{}'", value)))
    }

    /// The configured fixed offset, if any
    pub fn observer_offset(&self) -> Result<Option<FixedOffset>> {
        match &self.utc_offset {
            Some(value) => Self::parse_utc_offset(value),
            None => Ok(None),
        }
    }

    pub fn observer(&self) -> Result<Observer> {
        Ok(match self.observer_offset()? {
            Some(offset) => Observer::Fixed(offset),
            None => Observer::Local,
        })
    }
}
