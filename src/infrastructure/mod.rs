//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod image_loader;
pub mod store;

pub use config::Config;
pub use image_loader::FileSystemImageLoader;
pub use store::{EntryStore, FileSystemStore};
