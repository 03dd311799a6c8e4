//! Journal entry model

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identifier of an entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        EntryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dated journal record.
///
/// Entries are authored elsewhere and only read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: DateTime<Utc>,
    pub note: String,
    pub mood_emoji: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Empty, a demo image identifier, or an external image reference
    #[serde(default)]
    pub image_path: String,
}

impl JournalEntry {
    pub fn new(id: impl Into<String>, date: DateTime<Utc>, note: impl Into<String>) -> Self {
        JournalEntry {
            id: EntryId::new(id),
            date,
            note: note.into(),
            mood_emoji: String::new(),
            tags: Vec::new(),
            image_path: String::new(),
        }
    }

    pub fn with_mood(mut self, mood_emoji: impl Into<String>) -> Self {
        self.mood_emoji = mood_emoji.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    /// The entry's timestamp as seen on the observer's calendar
    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.date.with_timezone(tz)
    }

    /// Time of day, e.g. "2:30 PM"
    pub fn formatted_time<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.date_in(tz).format("%-I:%M %p").to_string()
    }

    /// Short absolute date, e.g. "Mar 3, 2024"
    pub fn short_date<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.date_in(tz).format("%b %-d, %Y").to_string()
    }

    /// Tags rendered as "#a #b"; empty when the entry has no tags
    pub fn tags_as_string(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
