//! Output formatting utilities

use crate::application::{EntryCard, EntryDetail, EntryList, HomeView};
use crate::domain::image::LoadedImage;
use crate::domain::ImageSlot;

const FLAME: &str = "🔥";

/// Describe what an image slot shows, `None` when the slot is hidden
pub fn format_image_slot(slot: &ImageSlot) -> Option<String> {
    match slot {
        ImageSlot::Hidden => None,
        ImageSlot::Bundled(demo) => Some(demo.asset_name().to_string()),
        ImageSlot::Pending(reference) => Some(format!("{} (unavailable)", reference)),
        ImageSlot::Loaded(LoadedImage::LocalFile(path)) => Some(path.display().to_string()),
        ImageSlot::Loaded(LoadedImage::Remote(url)) => Some(url.clone()),
    }
}

fn push_card(output: &mut String, card: &EntryCard, with_details: bool) {
    if with_details && !card.mood_emoji.is_empty() {
        output.push_str(&format!(
            "{}  {}  [{}]\n",
            card.date_label, card.mood_emoji, card.id
        ));
    } else {
        output.push_str(&format!("{}  [{}]\n", card.date_label, card.id));
    }

    for line in card.note.lines() {
        output.push_str(&format!("  {}\n", line));
    }
    if with_details && !card.tags.is_empty() {
        output.push_str(&format!("  {}\n", card.tags));
    }
    if let Some(image) = format_image_slot(&card.image) {
        output.push_str(&format!("  image: {}\n", image));
    }
}

/// Format the home summary
pub fn format_home(view: &HomeView) -> String {
    let mut output = String::new();

    if view.stats.shows_flame() {
        output.push_str(&format!("{} {}\n", view.stats.streak_text(), FLAME));
    } else {
        output.push_str(&format!("{}\n", view.stats.streak_text()));
    }
    output.push_str(&format!("{}\n\n", view.stats.entries_text()));

    match &view.recent {
        EntryList::Empty => {
            output.push_str("No recent entries. Your latest entries will show up here.\n");
        }
        EntryList::Cards(cards) => {
            output.push_str("Recent entries\n");
            for card in cards {
                push_card(&mut output, card, false);
            }
        }
    }

    output
}

/// Format the full notes list
pub fn format_entry_list(list: &EntryList) -> String {
    match list {
        EntryList::Empty => "No notes found".to_string(),
        EntryList::Cards(cards) => {
            let mut output = String::new();
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    output.push('\n');
                }
                push_card(&mut output, card, true);
            }
            output
        }
    }
}

/// Format one entry in full
pub fn format_entry_detail(detail: &EntryDetail) -> String {
    let card = &detail.card;
    let mut output = format!("{}  [{}]\n", card.date_label, card.id);
    output.push_str(&format!("Date: {} {}\n", detail.short_date, detail.time));
    if !card.mood_emoji.is_empty() {
        output.push_str(&format!("Mood: {}\n", card.mood_emoji));
    }
    if !card.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", card.tags));
    }
    if let Some(image) = format_image_slot(&card.image) {
        output.push_str(&format!("Image: {}\n", image));
    }
    output.push('\n');
    output.push_str(&card.note);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DemoImage, EntryId, StreakSummary};
    use std::path::PathBuf;

    fn card(id: &str, label: &str) -> EntryCard {
        EntryCard {
            id: EntryId::new(id),
            date_label: label.to_string(),
            mood_emoji: "🙂".to_string(),
            note: format!("note {}", id),
            tags: String::new(),
            image: ImageSlot::Hidden,
        }
    }

    #[test]
    fn test_format_image_slot() {
        assert_eq!(format_image_slot(&ImageSlot::Hidden), None);
        assert_eq!(
            format_image_slot(&ImageSlot::Bundled(DemoImage::Family)).unwrap(),
            "family_sunset"
        );
        assert_eq!(
            format_image_slot(&ImageSlot::Pending("a.jpg".to_string())).unwrap(),
            "a.jpg (unavailable)"
        );
        assert_eq!(
            format_image_slot(&ImageSlot::Loaded(LoadedImage::LocalFile(PathBuf::from(
                "/p/a.jpg"
            ))))
            .unwrap(),
            "/p/a.jpg"
        );
    }

    #[test]
    fn test_format_empty_home() {
        let view = HomeView {
            stats: StreakSummary::new(0, 0),
            recent: EntryList::Empty,
        };
        let output = format_home(&view);
        assert!(output.starts_with("0 day streak\n0 total entries\n"));
        assert!(output.contains("No recent entries"));
        assert!(!output.contains(FLAME));
    }

    #[test]
    fn test_format_home_with_flame() {
        let view = HomeView {
            stats: StreakSummary::new(3, 7),
            recent: EntryList::Cards(vec![card("a", "Today, 9:00 AM")]),
        };
        let output = format_home(&view);
        assert!(output.contains("3 day streak 🔥"));
        assert!(output.contains("7 total entries"));
        assert!(output.contains("Recent entries\nToday, 9:00 AM  [a]\n  note a\n"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&EntryList::Empty), "No notes found");
    }

    #[test]
    fn test_format_entry_list_hides_empty_tags() {
        let mut tagged = card("b", "Jan 2, 2025");
        tagged.tags = "#work".to_string();
        let list = EntryList::Cards(vec![tagged, card("a", "Jan 1, 2025")]);

        let output = format_entry_list(&list);
        assert_eq!(
            output,
            "Jan 2, 2025  🙂  [b]\n  note b\n  #work\n\nJan 1, 2025  🙂  [a]\n  note a\n"
        );
    }

    #[test]
    fn test_format_entry_detail() {
        let mut c = card("a", "Yesterday, 7:45 AM");
        c.image = ImageSlot::Bundled(DemoImage::Lightbulb);
        let detail = EntryDetail {
            card: c,
            short_date: "Jan 17, 2025".to_string(),
            time: "7:45 AM".to_string(),
        };

        let output = format_entry_detail(&detail);
        assert!(output.starts_with("Yesterday, 7:45 AM  [a]\n"));
        assert!(output.contains("Date: Jan 17, 2025 7:45 AM\n"));
        assert!(output.contains("Mood: 🙂\n"));
        assert!(output.contains("Image: lightbulb\n"));
        assert!(output.ends_with("\nnote a\n"));
    }
}
