//! Notes list use case

use crate::application::entry_card::{EntryCard, EntryList};
use crate::application::screen::Screen;
use crate::domain::ImageLoader;
use crate::infrastructure::EntryStore;
use chrono::TimeZone;
use std::fmt;

/// Lists every entry in store order (most recent first)
pub struct ListEntriesService<S, L> {
    store: S,
    loader: L,
}

impl<S: EntryStore, L: ImageLoader> ListEntriesService<S, L> {
    pub fn new(store: S, loader: L) -> Self {
        ListEntriesService { store, loader }
    }

    /// Dates are shown as short dates on `tz`'s calendar
    pub async fn execute<Tz: TimeZone>(&self, screen: &Screen, tz: &Tz) -> Option<EntryList>
    where
        Tz::Offset: fmt::Display,
    {
        let entries = screen.load_entries(&self.store).await?;

        let mut cards = Vec::with_capacity(entries.len());
        for entry in &entries {
            cards.push(EntryCard::build(entry, entry.short_date(tz), &self.loader).await);
        }

        Some(EntryList::from_cards(cards))
    }
}
