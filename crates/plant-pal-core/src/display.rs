//! Display Formatting
//!
//! Text shown for reminders on the page.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::ReminderEntry;

/// Shown in place of the reminder list when it is empty
pub const EMPTY_REMINDERS: &str = "No reminders yet. Add one from a plant card.";

/// Due time in the viewer's zone, e.g. `2024-03-08 09:00`
pub fn format_due<Tz: TimeZone>(next_due: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    next_due.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

/// One reminder row: `Basil: every 2 day(s). Next: 2024-03-03 09:00`
pub fn describe_reminder<Tz: TimeZone>(entry: &ReminderEntry, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    format!(
        "{}: every {} day(s). Next: {}",
        entry.plant_name,
        entry.every_days,
        format_due(&entry.next_due, tz)
    )
}
