//! Consecutive-day streak computation

use crate::domain::day::epoch_day;
use crate::domain::JournalEntry;
use chrono::{DateTime, TimeZone};

/// Streak length at which the flame marker is shown
pub const FLAME_THRESHOLD: u32 = 3;

/// Count consecutive epoch days, walking back from the day containing `now`,
/// that have at least one entry.
///
/// Entries may arrive in any order. A missing entry for today yields 0 no
/// matter how long the run before it was.
pub fn calculate_streak<Tz: TimeZone>(entries: &[JournalEntry], now: &DateTime<Tz>) -> u32 {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let current_day = epoch_day(now);
    let mut streak: u32 = 0;

    for entry in sorted {
        let entry_day = epoch_day(&entry.date);
        let expected = current_day - i64::from(streak);

        if entry_day == expected {
            streak += 1;
        } else if entry_day < expected {
            break;
        }
        // entry_day > expected: same day already counted, or a future entry
    }

    streak
}

/// Home screen statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakSummary {
    pub streak_days: u32,
    pub total_entries: usize,
}

impl StreakSummary {
    pub fn new(streak_days: u32, total_entries: usize) -> Self {
        StreakSummary {
            streak_days,
            total_entries,
        }
    }

    pub fn shows_flame(&self) -> bool {
        self.streak_days >= FLAME_THRESHOLD
    }

    pub fn streak_text(&self) -> String {
        format!("{} day streak", self.streak_days)
    }

    pub fn entries_text(&self) -> String {
        format!("{} total entries", self.total_entries)
    }
}
