//! Reminder Entity
//!
//! A scheduled watering reminder. Entries are snapshots: the plant name and
//! interval are copied at creation and never re-synced with the catalog.

use chrono::{DateTime, Days, Duration, LocalResult, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One recurring watering reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderEntry {
    /// Catalog id of the plant (not checked against the catalog)
    #[serde(rename = "id")]
    pub plant_id: String,
    /// Plant display name at creation time
    #[serde(rename = "name")]
    pub plant_name: String,
    #[serde(rename = "everyDays")]
    pub every_days: u32,
    /// When the reminder next fires
    #[serde(rename = "nextISO", with = "iso_millis")]
    pub next_due: DateTime<Utc>,
}

impl ReminderEntry {
    /// Schedule a reminder `every_days` calendar days after `now`.
    ///
    /// Returns `None` for a zero interval or a date outside chrono's range.
    pub fn schedule<Tz: TimeZone>(
        plant_id: &str,
        plant_name: &str,
        every_days: u32,
        now: &DateTime<Tz>,
    ) -> Option<Self> {
        if every_days == 0 {
            return None;
        }
        Some(Self {
            plant_id: plant_id.to_string(),
            plant_name: plant_name.to_string(),
            every_days,
            next_due: add_calendar_days(now, every_days)?,
        })
    }
}

/// Add whole calendar days in `now`'s zone, keeping the wall-clock time.
///
/// Result is truncated to milliseconds, the precision of the stored format.
/// A wall-clock time that falls in a DST gap resolves to the same elapsed
/// time as a fixed 24h-per-day offset; an ambiguous one takes the earlier
/// instant.
pub fn add_calendar_days<Tz: TimeZone>(now: &DateTime<Tz>, days: u32) -> Option<DateTime<Utc>> {
    let target = now.naive_local().checked_add_days(Days::new(u64::from(days)))?;
    let due = match now.timezone().from_local_datetime(&target) {
        LocalResult::Single(due) => due,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => now.clone().checked_add_signed(Duration::days(i64::from(days)))?,
    };
    Some(due.with_timezone(&Utc).trunc_subsecs(3))
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-03-01T09:30:00.000Z`.
///
/// Any RFC 3339 offset is accepted on read.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use chrono_tz::America::New_York;

    #[test]
    fn test_schedule_rejects_zero_interval() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        assert!(ReminderEntry::schedule("basil", "Basil", 0, &now).is_none());
    }

    #[test]
    fn test_add_calendar_days_crosses_month_end() {
        let now = Utc.with_ymd_and_hms(2024, 1, 30, 21, 15, 0).unwrap();
        let due = add_calendar_days(&now, 3).unwrap();
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 2, 2, 21, 15, 0).unwrap());
    }

    #[test]
    fn test_add_calendar_days_handles_leap_day() {
        let now = Utc.with_ymd_and_hms(2024, 2, 28, 6, 0, 0).unwrap();
        let due = add_calendar_days(&now, 1).unwrap();
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 2, 29, 6, 0, 0).unwrap());
    }

    #[test]
    fn test_add_calendar_days_keeps_local_wall_clock() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        let due = add_calendar_days(&now, 1).unwrap();
        assert_eq!(due.with_timezone(&tz), tz.with_ymd_and_hms(2025, 1, 1, 23, 30, 0).unwrap());
    }

    #[test]
    fn test_add_calendar_days_truncates_to_millis() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
            + Duration::nanoseconds(123_456_789);
        let due = add_calendar_days(&now, 2).unwrap();
        assert_eq!(due.timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn test_add_calendar_days_keeps_wall_clock_across_spring_forward() {
        let now = New_York.with_ymd_and_hms(2024, 3, 9, 9, 0, 0).unwrap();
        let due = add_calendar_days(&now, 2).unwrap();
        assert_eq!(due.with_timezone(&New_York), New_York.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap());
        // 47 elapsed hours, not 48
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 3, 11, 13, 0, 0).unwrap());
    }

    #[test]
    fn test_add_calendar_days_into_skipped_hour() {
        // 02:30 does not exist on 2024-03-10 in New York
        let now = New_York.with_ymd_and_hms(2024, 3, 9, 2, 30, 0).unwrap();
        let due = add_calendar_days(&now, 1).unwrap();
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap());
        assert_eq!(due.with_timezone(&New_York).format("%H:%M").to_string(), "03:30");
    }

    #[test]
    fn test_add_calendar_days_into_repeated_hour_takes_earlier() {
        // 01:30 happens twice on 2024-11-03 in New York (EDT then EST)
        let now = New_York.with_ymd_and_hms(2024, 11, 2, 1, 30, 0).unwrap();
        let due = add_calendar_days(&now, 1).unwrap();
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());
    }

    #[test]
    fn test_wire_field_names() {
        let entry = ReminderEntry {
            plant_id: "basil".to_string(),
            plant_name: "Basil".to_string(),
            every_days: 2,
            next_due: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"id":"basil","name":"Basil","everyDays":2,"nextISO":"2024-03-01T09:30:00.000Z"}"#
        );
    }

    #[test]
    fn test_reads_offset_timestamps() {
        let json = r#"{"id":"snake","name":"Snake Plant","everyDays":14,"nextISO":"2024-03-01T10:30:00+01:00"}"#;
        let entry: ReminderEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.next_due, Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
    }
}
