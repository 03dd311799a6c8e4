//! Application layer - Use cases and orchestration

pub mod entry_card;
pub mod home;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod screen;
pub mod show_entry;

pub use entry_card::{EntryCard, EntryList};
pub use home::{HomeService, HomeView};
pub use list_entries::ListEntriesService;
pub use manage_config::ConfigService;
pub use screen::Screen;
pub use show_entry::{EntryDetail, ShowEntryService};
