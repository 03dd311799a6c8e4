//! Domain layer - Entry model and the pure derivations over it

pub mod day;
pub mod entry;
pub mod image;
pub mod recent;
pub mod relative_date;
pub mod streak;

pub use entry::{EntryId, JournalEntry};
pub use image::{bind_image, is_demo_image, DemoImage, ImageLoader, ImageSlot, ImageSource};
pub use recent::{select_recent, RecentEntries};
pub use relative_date::relative_label;
pub use streak::{calculate_streak, StreakSummary};
