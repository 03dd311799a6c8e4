//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStore};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::new(path.to_path_buf());
    let config = Config::new();
    store.initialize(&config)?;

    println!("Initialized mindnote journal at {}", path.display());
    println!("Entries file: {}", config.entries_file);

    Ok(())
}
