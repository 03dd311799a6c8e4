//! Entry store

use crate::domain::JournalEntry;
use crate::error::{MindnoteError, Result};
use crate::infrastructure::config::{Config, DEFAULT_ENTRIES_FILE, META_DIR};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of journal entries
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Directory relative image references resolve against
    fn root(&self) -> &Path;

    /// Fetch every entry, most recent first
    async fn load_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Number of stored entries
    fn entry_count(&self) -> Result<usize>;
}

/// On-disk shape of the entries file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EntryFile {
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
}

impl EntryFile {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| MindnoteError::Store(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Journal stored in a directory with a `.mindnote` metadata folder
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
    entries_file: String,
}

impl FileSystemStore {
    /// Create a store over the given root using the default entries file
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore {
            root,
            entries_file: DEFAULT_ENTRIES_FILE.to_string(),
        }
    }

    /// Open an initialized journal, reading its entries file name from config
    pub fn open(root: PathBuf) -> Result<(Self, Config)> {
        let config = Config::load_from_dir(&root)?;
        let store = FileSystemStore {
            root,
            entries_file: config.entries_file.clone(),
        };
        Ok((store, config))
    }

    /// Discover journal root by walking up from current directory.
    /// First checks MINDNOTE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<PathBuf> {
        if let Ok(root_path) = std::env::var("MINDNOTE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(path);
            } else {
                return Err(MindnoteError::Config(format!(
                    "MINDNOTE_ROOT is set to '{}' but no .mindnote directory found. \
                    Run 'mindnote init' in that directory or unset MINDNOTE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                return Ok(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MindnoteError::NotMindnoteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    /// Create the .mindnote directory and an empty entries file
    pub fn initialize(&self, config: &Config) -> Result<()> {
        if self.is_initialized() {
            return Err(MindnoteError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(META_DIR))?;
        config.save_to_dir(&self.root)?;

        let entries_path = self.root.join(&config.entries_file);
        if !entries_path.exists() {
            fs::write(&entries_path, EntryFile::default().to_toml()?)?;
        }

        tracing::debug!(root = %self.root.display(), "initialized journal");
        Ok(())
    }

    pub fn entries_path(&self) -> PathBuf {
        self.root.join(&self.entries_file)
    }

    /// A missing entries file is an empty journal
    fn parse_entries(&self, contents: Option<String>) -> Result<Vec<JournalEntry>> {
        let Some(contents) = contents else {
            tracing::debug!(path = %self.entries_path().display(), "entries file missing");
            return Ok(Vec::new());
        };

        let mut entries = EntryFile::parse(&contents)?.entries;
        warn_on_duplicate_ids(&entries);

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    fn read_entries_sync(&self) -> Result<Vec<JournalEntry>> {
        let contents = match fs::read_to_string(self.entries_path()) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(MindnoteError::Io(e)),
        };
        self.parse_entries(contents)
    }
}

fn warn_on_duplicate_ids(entries: &[JournalEntry]) {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(&entry.id) {
            tracing::warn!(id = %entry.id, "duplicate entry id");
        }
    }
}

#[async_trait]
impl EntryStore for FileSystemStore {
    fn root(&self) -> &Path {
        &self.root
    }

    async fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        let contents = match tokio::fs::read_to_string(self.entries_path()).await {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(MindnoteError::Io(e)),
        };
        let entries = self.parse_entries(contents)?;
        tracing::debug!(count = entries.len(), "loaded entries");
        Ok(entries)
    }

    fn entry_count(&self) -> Result<usize> {
        Ok(self.read_entries_sync()?.len())
    }
}
