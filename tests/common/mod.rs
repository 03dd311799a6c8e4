#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{DateTime, Utc};
use mindnote::domain::JournalEntry;
use mindnote::infrastructure::store::EntryFile;
use std::fs;
use std::path::Path;

pub fn mindnote_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mindnote").unwrap();
    cmd.env_remove("MINDNOTE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a journal observed on the machine's zone
pub fn init_journal(path: &Path) {
    mindnote_cmd().arg("init").arg(path).assert().success();
}

/// Initialize a journal observed on UTC so relative labels are deterministic
pub fn init_utc_journal(path: &Path) {
    init_journal(path);
    mindnote_cmd()
        .current_dir(path)
        .args(["config", "utc_offset", "+00:00"])
        .assert()
        .success();
}

pub fn write_entries(path: &Path, entries: Vec<JournalEntry>) {
    let file = EntryFile { entries };
    fs::write(path.join("entries.toml"), file.to_toml().unwrap()).unwrap();
}

pub fn entry(id: &str, date: DateTime<Utc>, note: &str) -> JournalEntry {
    JournalEntry::new(id, date, note).with_mood("🙂")
}
