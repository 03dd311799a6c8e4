//! Home screen use case

use crate::application::entry_card::{EntryCard, EntryList};
use crate::application::screen::Screen;
use crate::domain::{
    calculate_streak, relative_label, select_recent, ImageLoader, RecentEntries, StreakSummary,
};
use crate::infrastructure::EntryStore;
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Everything the home screen renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub stats: StreakSummary,
    pub recent: EntryList,
}

/// Service assembling the home summary
pub struct HomeService<S, L> {
    store: S,
    loader: L,
}

impl<S: EntryStore, L: ImageLoader> HomeService<S, L> {
    pub fn new(store: S, loader: L) -> Self {
        HomeService { store, loader }
    }

    /// Build the home view as of `now`; `None` if `screen` was dismissed
    pub async fn execute<Tz: TimeZone>(
        &self,
        screen: &Screen,
        now: &DateTime<Tz>,
    ) -> Option<HomeView>
    where
        Tz::Offset: fmt::Display,
    {
        let entries = screen.load_entries(&self.store).await?;

        let total_entries = self.store.entry_count().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "entry count unavailable");
            entries.len()
        });
        let stats = StreakSummary::new(calculate_streak(&entries, now), total_entries);

        let recent = match select_recent(&entries) {
            RecentEntries::Empty => EntryList::Empty,
            RecentEntries::Entries(selected) => {
                let mut cards = Vec::with_capacity(selected.len());
                for entry in selected {
                    let label = relative_label(entry, now);
                    cards.push(EntryCard::build(entry, label, &self.loader).await);
                }
                EntryList::Cards(cards)
            }
        };

        Some(HomeView { stats, recent })
    }
}
