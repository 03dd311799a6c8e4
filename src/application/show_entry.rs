//! Open a single entry by id

use crate::application::entry_card::EntryCard;
use crate::application::screen::Screen;
use crate::domain::{relative_label, ImageLoader};
use crate::error::{MindnoteError, Result};
use crate::infrastructure::EntryStore;
use chrono::{DateTime, TimeZone};
use std::fmt;

/// A single entry with both its relative and absolute date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetail {
    pub card: EntryCard,
    pub short_date: String,
    pub time: String,
}

/// Service for looking up one entry
pub struct ShowEntryService<S, L> {
    store: S,
    loader: L,
}

impl<S: EntryStore, L: ImageLoader> ShowEntryService<S, L> {
    pub fn new(store: S, loader: L) -> Self {
        ShowEntryService { store, loader }
    }

    /// `Ok(None)` when the screen was dismissed before the load finished
    pub async fn execute<Tz: TimeZone>(
        &self,
        screen: &Screen,
        id: &str,
        now: &DateTime<Tz>,
    ) -> Result<Option<EntryDetail>>
    where
        Tz::Offset: fmt::Display,
    {
        let Some(entries) = screen.load_entries(&self.store).await else {
            return Ok(None);
        };

        let entry = entries
            .iter()
            .find(|entry| entry.id.as_str() == id)
            .ok_or_else(|| MindnoteError::EntryNotFound(id.to_string()))?;

        let tz = now.timezone();
        Ok(Some(EntryDetail {
            card: EntryCard::build(entry, relative_label(entry, now), &self.loader).await,
            short_date: entry.short_date(&tz),
            time: entry.formatted_time(&tz),
        }))
    }
}
