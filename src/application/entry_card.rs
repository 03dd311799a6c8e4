//! Display-ready view of an entry

use crate::domain::{bind_image, EntryId, ImageLoader, ImageSlot, ImageSource, JournalEntry};

/// One entry as a screen shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard {
    pub id: EntryId,
    pub date_label: String,
    pub mood_emoji: String,
    pub note: String,
    /// "#a #b", empty when untagged
    pub tags: String,
    pub image: ImageSlot,
}

impl EntryCard {
    pub async fn build(
        entry: &JournalEntry,
        date_label: String,
        loader: &dyn ImageLoader,
    ) -> Self {
        let mut image = ImageSlot::default();
        bind_image(&ImageSource::classify(&entry.image_path), &mut image, loader).await;

        EntryCard {
            id: entry.id.clone(),
            date_label,
            mood_emoji: entry.mood_emoji.clone(),
            note: entry.note.clone(),
            tags: entry.tags_as_string(),
            image,
        }
    }
}

/// A list of cards, or the empty state when there is nothing to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryList {
    Empty,
    Cards(Vec<EntryCard>),
}

impl EntryList {
    pub fn from_cards(cards: Vec<EntryCard>) -> Self {
        if cards.is_empty() {
            EntryList::Empty
        } else {
            EntryList::Cards(cards)
        }
    }

    pub fn cards(&self) -> &[EntryCard] {
        match self {
            EntryList::Empty => &[],
            EntryList::Cards(cards) => cards,
        }
    }
}
