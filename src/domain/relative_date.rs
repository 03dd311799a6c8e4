//! Relative date labels ("Today, 2:30 PM", "Yesterday, 9:05 AM", "Mar 3, 2024")

use crate::domain::day::same_calendar_day;
use crate::domain::JournalEntry;
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Label an entry relative to the observer's current date-time.
///
/// Day equality is decided on the observer's calendar (the zone of `now`),
/// not on epoch days.
pub fn relative_label<Tz: TimeZone>(entry: &JournalEntry, now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let tz = now.timezone();
    let entry_date = entry.date_in(&tz);
    let today = now.date_naive();

    if same_calendar_day(&entry_date, &today) {
        format!("Today, {}", entry.formatted_time(&tz))
    } else if today
        .pred_opt()
        .is_some_and(|yesterday| same_calendar_day(&entry_date, &yesterday))
    {
        format!("Yesterday, {}", entry.formatted_time(&tz))
    } else {
        entry.short_date(&tz)
    }
}
