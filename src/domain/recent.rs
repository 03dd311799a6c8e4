//! Home screen recency selection

use crate::domain::JournalEntry;

/// Maximum number of entries shown on the home screen
pub const RECENT_ENTRY_LIMIT: usize = 3;

/// What the home screen shows under "recent entries"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentEntries<'a> {
    /// No entries at all; show the empty state
    Empty,
    /// Up to `RECENT_ENTRY_LIMIT` entries, in input order
    Entries(&'a [JournalEntry]),
}

impl RecentEntries<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, RecentEntries::Empty)
    }
}

/// Take the first few entries of a most-recent-first list.
///
/// The input order is trusted as-is; nothing is re-sorted here.
pub fn select_recent(entries: &[JournalEntry]) -> RecentEntries<'_> {
    if entries.is_empty() {
        return RecentEntries::Empty;
    }

    let limit = entries.len().min(RECENT_ENTRY_LIMIT);
    RecentEntries::Entries(&entries[..limit])
}
