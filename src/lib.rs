//! mindnote - Personal journal dashboard
//!
//! Reads dated journal entries and derives the home summary (consecutive-day
//! streak, entry count, recent entries with relative dates) and the full
//! entry list.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MindnoteError;
