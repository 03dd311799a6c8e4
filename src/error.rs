//! Error types for mindnote

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mindnote
#[derive(Debug, Error)]
pub enum MindnoteError {
    #[error("Not a mindnote directory: {0}")]
    NotMindnoteDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Entry store error: {0}")]
    Store(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MindnoteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MindnoteError::NotMindnoteDirectory(_) => 2,
            MindnoteError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MindnoteError::NotMindnoteDirectory(path) => {
                format!(
                    "Not a mindnote directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'mindnote init' in this directory to create a new journal\n\
                    • Navigate to an existing mindnote directory\n\
                    • Set MINDNOTE_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MindnoteError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'mindnote notes' to see every entry and its id\n\
                    • Entry ids are case-sensitive",
                    id
                )
            }
            MindnoteError::Config(msg) => {
                if msg.contains("utc_offset") {
                    format!(
                        "{}\n\n\
                        Expected format: +HH:MM or -HH:MM, or 'local'\n\
                        Example: mindnote config utc_offset +02:00",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            MindnoteError::Store(msg) => {
                format!(
                    "Entry store error: {}\n\n\
                    Suggestions:\n\
                    • Check that the entries file is valid TOML\n\
                    • Each [[entries]] table needs id, date, note and mood_emoji",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MindnoteError
pub type Result<T> = std::result::Result<T, MindnoteError>;
