//! Display formatting for event dates and times.
//!
//! Every function here is total: it returns display text for any input and
//! never panics. Missing data renders as a "TBD" placeholder; data that is
//! present but unreadable renders as an "Invalid"/"Error" placeholder. The two
//! are kept apart in [`Placeholder`] so templates can style them differently.
//!
//! # Example
//!
//! ```rust
//! use wantage_core::format::EventTimeFormatter;
//! use wantage_core::time::EventTimeInput;
//!
//! let formatter = EventTimeFormatter::new();
//! let input = EventTimeInput::new("2025-07-05T11:00:00Z").with_end("2025-07-05T17:00:00Z");
//!
//! assert_eq!(formatter.format_date(input.start.as_deref()), "5 July 2025");
//! assert_eq!(formatter.format_time_range(&input), "12:00 pm - 6:00 pm");
//! ```

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::error::InstantError;
use crate::time::{
    DISPLAY_TIME_ZONE, DISPLAY_TIME_ZONE_NAME, EventTimeInput, read_instant, same_display_day,
};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Fixed text shown in place of a computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// No start date was provided.
    DateTbd,
    /// No start time was provided.
    TimeTbd,
    /// A date was provided but could not be read.
    InvalidDate,
    /// A time was provided but could not be read.
    InvalidTime,
    /// Building a time range failed.
    TimeError,
    /// A publish date is missing or unreadable.
    DateUnavailable,
}

impl Placeholder {
    /// Returns the display text for this placeholder.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateTbd => "Date TBD",
            Self::TimeTbd => "Time TBD",
            Self::InvalidDate => "Invalid Date",
            Self::InvalidTime => "Invalid Time",
            Self::TimeError => "Time Error",
            Self::DateUnavailable => "Date unavailable",
        }
    }

    /// Returns true if the placeholder stands for absent data.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::DateTbd | Self::TimeTbd | Self::DateUnavailable)
    }

    /// Returns true if the placeholder stands for data that failed to parse.
    pub fn is_malformed(&self) -> bool {
        !self.is_missing()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatted text, or the placeholder that replaced it.
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayText {
    /// Computed or author-supplied text.
    Text(String),
    /// A fixed placeholder.
    Placeholder(Placeholder),
}

impl DisplayText {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the string to render.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Placeholder(placeholder) => placeholder.as_str(),
        }
    }

    /// Returns the placeholder, if this is one.
    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            Self::Text(_) => None,
            Self::Placeholder(placeholder) => Some(*placeholder),
        }
    }

    /// Returns true if this is a placeholder rather than real text.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder().is_some()
    }

    /// Consumes the value and returns the string to render.
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Placeholder(placeholder) => placeholder.as_str().to_string(),
        }
    }
}

impl From<Placeholder> for DisplayText {
    fn from(placeholder: Placeholder) -> Self {
        Self::Placeholder(placeholder)
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for DisplayText {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for DisplayText {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for DisplayText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Date and time fields for an "add to calendar" export.
///
/// All wall-clock values are in [`DISPLAY_TIME_ZONE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSlot {
    /// Event name.
    pub name: String,
    /// Start date as `yyyy-MM-dd`.
    pub start_date: String,
    /// Start time as `HH:mm`.
    pub start_time: String,
    /// End date as `yyyy-MM-dd`.
    pub end_date: String,
    /// End time as `HH:mm`.
    pub end_time: String,
    /// IANA zone the wall-clock values are in.
    pub time_zone: String,
}

impl CalendarSlot {
    /// Builds the export fields for an event.
    ///
    /// The end falls back to the start when the event has no end. Returns
    /// `None` when the name is blank or any field cannot be produced.
    pub fn from_input(name: &str, input: &EventTimeInput) -> Option<Self> {
        let formatter = EventTimeFormatter::new();
        let start = input.start.as_deref();
        let end = input.end_or_start();

        let slot = Self {
            name: name.trim().to_string(),
            start_date: formatter.calendar_date(start),
            start_time: formatter.calendar_time(start),
            end_date: formatter.calendar_date(end),
            end_time: formatter.calendar_time(end),
            time_zone: DISPLAY_TIME_ZONE_NAME.to_string(),
        };

        let complete = [
            &slot.name,
            &slot.start_date,
            &slot.start_time,
            &slot.end_date,
            &slot.end_time,
        ]
        .iter()
        .all(|field| !field.is_empty());

        complete.then_some(slot)
    }
}

/// Formats event dates and times in the fixed display zone.
#[derive(Debug, Clone, Copy)]
pub struct EventTimeFormatter {
    tz: Tz,
}

impl Default for EventTimeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTimeFormatter {
    /// Creates a formatter for [`DISPLAY_TIME_ZONE`].
    pub fn new() -> Self {
        Self {
            tz: DISPLAY_TIME_ZONE,
        }
    }

    /// Returns the zone this formatter renders in.
    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    /// Formats the calendar date of an instant, e.g. "5 July 2025".
    pub fn format_date(&self, raw: Option<&str>) -> DisplayText {
        match read_instant(raw) {
            Ok(Some(instant)) => DisplayText::Text(self.date_of(&instant)),
            Ok(None) => Placeholder::DateTbd.into(),
            Err(err) => {
                warn!(%err, "unreadable event date");
                Placeholder::InvalidDate.into()
            }
        }
    }

    /// Formats the date for a detail page, e.g. "Saturday, July 5th, 2025".
    pub fn format_long_date(&self, raw: Option<&str>) -> DisplayText {
        match read_instant(raw) {
            Ok(Some(instant)) => DisplayText::Text(self.long_date_of(&instant)),
            Ok(None) => Placeholder::DateTbd.into(),
            Err(err) => {
                warn!(%err, "unreadable event date");
                Placeholder::InvalidDate.into()
            }
        }
    }

    /// Formats the wall-clock time of an instant, e.g. "2:00 pm".
    pub fn format_time(&self, raw: Option<&str>) -> DisplayText {
        match read_instant(raw) {
            Ok(Some(instant)) => DisplayText::Text(self.time_of(&instant)),
            Ok(None) => Placeholder::TimeTbd.into(),
            Err(err) => {
                warn!(%err, "unreadable event time");
                Placeholder::InvalidTime.into()
            }
        }
    }

    /// Formats the time description shown on cards and detail pages.
    ///
    /// A manual override wins outright. Otherwise the start time is shown,
    /// followed by the end time when there is one; an end on a different
    /// display-zone day also gets its date.
    pub fn format_time_range(&self, input: &EventTimeInput) -> DisplayText {
        if let Some(manual) = input.manual_override() {
            return DisplayText::text(manual);
        }

        match self.compute_time_range(input) {
            Ok(Some(range)) => DisplayText::Text(range),
            Ok(None) => Placeholder::TimeTbd.into(),
            Err(err) => {
                warn!(%err, "failed to format event time range");
                Placeholder::TimeError.into()
            }
        }
    }

    fn compute_time_range(&self, input: &EventTimeInput) -> Result<Option<String>, InstantError> {
        let Some(start) = read_instant(input.start.as_deref())? else {
            return Ok(None);
        };
        let start_time = self.time_of(&start);

        let Some(end) = read_instant(input.end.as_deref())? else {
            return Ok(Some(start_time));
        };
        let end_time = self.time_of(&end);

        if same_display_day(&start, &end) {
            Ok(Some(format!("{} - {}", start_time, end_time)))
        } else {
            Ok(Some(format!(
                "{} - {}, {}",
                start_time,
                end_time,
                self.date_of(&end)
            )))
        }
    }

    /// Formats the start date joined with the time range.
    ///
    /// The time range is left off when it is a placeholder.
    pub fn format_full_date_time(&self, input: &EventTimeInput) -> DisplayText {
        let date = self.format_date(input.start.as_deref());
        let range = self.format_time_range(input);

        if range.is_placeholder() {
            date
        } else {
            DisplayText::Text(format!("{}, {}", date, range))
        }
    }

    /// Formats the date as `yyyy-MM-dd`, or an empty string.
    pub fn calendar_date(&self, raw: Option<&str>) -> String {
        match read_instant(raw) {
            Ok(Some(instant)) => instant.with_timezone(&self.tz).format("%Y-%m-%d").to_string(),
            _ => String::new(),
        }
    }

    /// Formats the time as 24-hour `HH:mm`, or an empty string.
    pub fn calendar_time(&self, raw: Option<&str>) -> String {
        match read_instant(raw) {
            Ok(Some(instant)) => instant.with_timezone(&self.tz).format("%H:%M").to_string(),
            _ => String::new(),
        }
    }

    /// Formats a publish date relative to `now`, e.g. "3 days ago".
    pub fn format_published(&self, raw: Option<&str>, now: DateTime<Utc>) -> DisplayText {
        match read_instant(raw) {
            Ok(Some(published)) => {
                DisplayText::Text(format!("{} ago", distance_in_words(published, now)))
            }
            Ok(None) => Placeholder::DateUnavailable.into(),
            Err(err) => {
                warn!(%err, "unreadable publish date");
                Placeholder::DateUnavailable.into()
            }
        }
    }

    fn date_of(&self, instant: &DateTime<Utc>) -> String {
        instant.with_timezone(&self.tz).format("%-d %B %Y").to_string()
    }

    fn long_date_of(&self, instant: &DateTime<Utc>) -> String {
        let zoned = instant.with_timezone(&self.tz);
        format!(
            "{}, {} {}{}, {}",
            zoned.format("%A"),
            zoned.format("%B"),
            zoned.day(),
            ordinal_suffix(zoned.day()),
            zoned.year()
        )
    }

    fn time_of(&self, instant: &DateTime<Utc>) -> String {
        instant.with_timezone(&self.tz).format("%-I:%M %P").to_string()
    }
}

/// Returns the English ordinal suffix for a day of the month.
fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Describes the distance between two instants in words.
///
/// Thresholds follow the usual "about 2 hours" / "over 1 year" wording used by
/// blog listings. Order of the arguments does not matter.
pub fn distance_in_words(a: DateTime<Utc>, b: DateTime<Utc>) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (later - earlier).num_seconds();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45 {
        return format!("{} minutes", minutes);
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        return format!("about {} hours", hours);
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return format!("{} days", days);
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(months, "about 1 month", "about {} months");
    }

    let months = whole_months_between(earlier, later);
    if months < 12 {
        let nearest = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(nearest, "1 month", "{} months");
    }

    let months_into_year = months % 12;
    let years = months / 12;
    if months_into_year < 3 {
        plural(years, "about 1 year", "about {} years")
    } else if months_into_year < 9 {
        plural(years, "over 1 year", "over {} years")
    } else {
        plural(years + 1, "almost 1 year", "almost {} years")
    }
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{}", &count.to_string())
    }
}

/// Counts full calendar months from `earlier` to `later`.
fn whole_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = (later.year() - earlier.year()) as i64 * 12
        + later.month() as i64
        - earlier.month() as i64;

    let later_rest = (later.day(), later.time());
    let earlier_rest = (earlier.day(), earlier.time());
    if months > 0 && later_rest < earlier_rest {
        months -= 1;
    }
    months
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    mod placeholder {
        use super::*;

        #[test]
        fn text_values() {
            assert_eq!(Placeholder::DateTbd.as_str(), "Date TBD");
            assert_eq!(Placeholder::TimeTbd.as_str(), "Time TBD");
            assert_eq!(Placeholder::InvalidDate.as_str(), "Invalid Date");
            assert_eq!(Placeholder::InvalidTime.as_str(), "Invalid Time");
            assert_eq!(Placeholder::TimeError.as_str(), "Time Error");
            assert_eq!(Placeholder::DateUnavailable.as_str(), "Date unavailable");
        }

        #[test]
        fn missing_and_malformed_are_disjoint() {
            for placeholder in [
                Placeholder::DateTbd,
                Placeholder::TimeTbd,
                Placeholder::InvalidDate,
                Placeholder::InvalidTime,
                Placeholder::TimeError,
                Placeholder::DateUnavailable,
            ] {
                assert_ne!(placeholder.is_missing(), placeholder.is_malformed());
            }
            assert!(Placeholder::TimeTbd.is_missing());
            assert!(Placeholder::TimeError.is_malformed());
        }

        #[test]
        fn serde_name() {
            let json = serde_json::to_string(&Placeholder::TimeTbd).unwrap();
            assert_eq!(json, "\"time_tbd\"");
        }
    }

    mod display_text {
        use super::*;

        #[test]
        fn text_and_placeholder() {
            let text = DisplayText::text("2:00 pm");
            assert_eq!(text, "2:00 pm");
            assert!(!text.is_placeholder());

            let tbd = DisplayText::from(Placeholder::TimeTbd);
            assert_eq!(tbd, "Time TBD");
            assert_eq!(tbd.placeholder(), Some(Placeholder::TimeTbd));
            assert_eq!(tbd.into_string(), "Time TBD");
        }

        #[test]
        fn serializes_as_string() {
            let json = serde_json::to_string(&DisplayText::from(Placeholder::DateTbd)).unwrap();
            assert_eq!(json, "\"Date TBD\"");
            let json = serde_json::to_string(&DisplayText::text("5 July 2025")).unwrap();
            assert_eq!(json, "\"5 July 2025\"");
        }
    }

    mod formatter {
        use super::*;

        #[test]
        fn date_missing_and_invalid() {
            let formatter = EventTimeFormatter::new();
            assert_eq!(formatter.format_date(None), "Date TBD");
            assert_eq!(formatter.format_date(Some("")), "Date TBD");
            assert_eq!(formatter.format_date(Some("not-a-date")), "Invalid Date");
        }

        #[test]
        fn time_missing_and_invalid() {
            let formatter = EventTimeFormatter::new();
            assert_eq!(formatter.format_time(None), "Time TBD");
            assert_eq!(formatter.format_time(Some("not-a-date")), "Invalid Time");
        }

        #[test]
        fn time_twelve_hour_edges() {
            let formatter = EventTimeFormatter::new();
            // Midnight and noon in London (BST).
            assert_eq!(formatter.format_time(Some("2025-07-04T23:00:00Z")), "12:00 am");
            assert_eq!(formatter.format_time(Some("2025-07-05T11:00:00Z")), "12:00 pm");
            assert_eq!(formatter.format_time(Some("2025-07-05T08:05:00Z")), "9:05 am");
        }

        #[test]
        fn date_in_display_zone_not_utc() {
            let formatter = EventTimeFormatter::new();
            // 23:30Z on 5 July is already 6 July in London.
            assert_eq!(
                formatter.format_date(Some("2025-07-05T23:30:00Z")),
                "6 July 2025"
            );
            // In winter London is on UTC.
            assert_eq!(
                formatter.format_date(Some("2025-01-15T23:30:00Z")),
                "15 January 2025"
            );
        }

        #[test]
        fn time_range_start_malformed_is_error() {
            let formatter = EventTimeFormatter::new();
            let input = EventTimeInput::new("not-a-date");
            assert_eq!(
                formatter.format_time_range(&input).placeholder(),
                Some(Placeholder::TimeError)
            );
        }

        #[test]
        fn time_range_end_malformed_is_error() {
            let formatter = EventTimeFormatter::new();
            let input = EventTimeInput::new("2025-07-05T11:00:00Z").with_end("garbage");
            assert_eq!(formatter.format_time_range(&input), "Time Error");
        }

        #[test]
        fn time_range_missing_start_wins_over_bad_end() {
            let formatter = EventTimeFormatter::new();
            let input = EventTimeInput::from_fields(None, Some("garbage"), None);
            assert_eq!(formatter.format_time_range(&input), "Time TBD");
        }

        #[test]
        fn time_range_blank_end_is_no_end() {
            let formatter = EventTimeFormatter::new();
            let input = EventTimeInput::new("2025-07-05T11:00:00Z").with_end("");
            assert_eq!(formatter.format_time_range(&input), "12:00 pm");
        }

        #[test]
        fn time_range_inverted_same_day_rendered_as_given() {
            let formatter = EventTimeFormatter::new();
            let input = EventTimeInput::new("2025-07-05T17:00:00Z").with_end("2025-07-05T11:00:00Z");
            assert_eq!(formatter.format_time_range(&input), "6:00 pm - 12:00 pm");
        }

        #[test]
        fn full_date_time_drops_placeholder_range() {
            let formatter = EventTimeFormatter::new();
            let input = EventTimeInput::new("2025-07-05T11:00:00Z").with_end("garbage");
            assert_eq!(formatter.format_full_date_time(&input), "5 July 2025");

            let input = EventTimeInput::default();
            assert_eq!(formatter.format_full_date_time(&input), "Date TBD");
        }

        #[test]
        fn full_date_time_keeps_manual_override() {
            let formatter = EventTimeFormatter::new();
            let input = EventTimeInput::default().with_manual_display("Multiple sessions");
            assert_eq!(
                formatter.format_full_date_time(&input),
                "Date TBD, Multiple sessions"
            );
        }

        #[test]
        fn calendar_fields() {
            let formatter = EventTimeFormatter::new();
            let raw = Some("2025-07-05T22:30:00Z");
            assert_eq!(formatter.calendar_date(raw), "2025-07-05");
            assert_eq!(formatter.calendar_time(raw), "23:30");
            assert_eq!(formatter.calendar_date(None), "");
            assert_eq!(formatter.calendar_time(Some("nope")), "");
        }

        #[test]
        fn long_date_ordinals() {
            let formatter = EventTimeFormatter::new();
            assert_eq!(
                formatter.format_long_date(Some("2025-07-05T11:00:00Z")),
                "Saturday, July 5th, 2025"
            );
            assert_eq!(
                formatter.format_long_date(Some("2025-07-01T11:00:00Z")),
                "Tuesday, July 1st, 2025"
            );
            assert_eq!(
                formatter.format_long_date(Some("2025-07-22T11:00:00Z")),
                "Tuesday, July 22nd, 2025"
            );
            assert_eq!(
                formatter.format_long_date(Some("2025-07-13T11:00:00Z")),
                "Sunday, July 13th, 2025"
            );
            assert_eq!(formatter.format_long_date(None), "Date TBD");
        }

        #[test]
        fn time_zone_is_fixed() {
            assert_eq!(EventTimeFormatter::new().time_zone(), DISPLAY_TIME_ZONE);
            assert_eq!(EventTimeFormatter::default().time_zone().name(), "Europe/London");
        }
    }

    mod calendar_slot {
        use super::*;

        #[test]
        fn end_falls_back_to_start() {
            let input = EventTimeInput::new("2025-07-05T11:00:00Z");
            let slot = CalendarSlot::from_input("Street party", &input).unwrap();
            assert_eq!(slot.start_date, "2025-07-05");
            assert_eq!(slot.start_time, "12:00");
            assert_eq!(slot.end_date, "2025-07-05");
            assert_eq!(slot.end_time, "12:00");
            assert_eq!(slot.time_zone, "Europe/London");
        }

        #[test]
        fn incomplete_slots_are_rejected() {
            assert!(CalendarSlot::from_input("Party", &EventTimeInput::default()).is_none());
            assert!(
                CalendarSlot::from_input("  ", &EventTimeInput::new("2025-07-05T11:00:00Z"))
                    .is_none()
            );
            let input = EventTimeInput::new("2025-07-05T11:00:00Z").with_end("bad");
            assert!(CalendarSlot::from_input("Party", &input).is_none());
        }
    }

    mod distance {
        use super::*;

        #[test]
        fn short_distances() {
            let now = utc(2025, 7, 5, 12, 0, 0);
            assert_eq!(distance_in_words(now, now), "less than a minute");
            assert_eq!(
                distance_in_words(now - chrono::Duration::seconds(70), now),
                "1 minute"
            );
            assert_eq!(
                distance_in_words(now - chrono::Duration::minutes(10), now),
                "10 minutes"
            );
            assert_eq!(
                distance_in_words(now - chrono::Duration::minutes(60), now),
                "about 1 hour"
            );
            assert_eq!(
                distance_in_words(now - chrono::Duration::hours(5), now),
                "about 5 hours"
            );
        }

        #[test]
        fn day_and_month_distances() {
            let now = utc(2025, 7, 5, 12, 0, 0);
            assert_eq!(
                distance_in_words(now - chrono::Duration::hours(30), now),
                "1 day"
            );
            assert_eq!(
                distance_in_words(now - chrono::Duration::days(3), now),
                "3 days"
            );
            assert_eq!(
                distance_in_words(now - chrono::Duration::days(35), now),
                "about 1 month"
            );
            assert_eq!(
                distance_in_words(utc(2025, 2, 1, 12, 0, 0), now),
                "5 months"
            );
        }

        #[test]
        fn year_distances() {
            let now = utc(2025, 7, 5, 12, 0, 0);
            assert_eq!(distance_in_words(utc(2024, 6, 1, 12, 0, 0), now), "about 1 year");
            assert_eq!(distance_in_words(utc(2023, 12, 1, 12, 0, 0), now), "over 1 year");
            assert_eq!(distance_in_words(utc(2023, 9, 1, 12, 0, 0), now), "almost 2 years");
            assert_eq!(distance_in_words(utc(2022, 7, 1, 12, 0, 0), now), "about 3 years");
        }

        #[test]
        fn argument_order_does_not_matter() {
            let a = utc(2025, 7, 5, 12, 0, 0);
            let b = utc(2025, 7, 8, 12, 0, 0);
            assert_eq!(distance_in_words(a, b), distance_in_words(b, a));
        }

        #[test]
        fn published_placeholders() {
            let formatter = EventTimeFormatter::new();
            let now = utc(2025, 7, 5, 12, 0, 0);
            assert_eq!(formatter.format_published(None, now), "Date unavailable");
            assert_eq!(formatter.format_published(Some("junk"), now), "Date unavailable");
            assert_eq!(
                formatter.format_published(Some("2025-07-02T12:00:00Z"), now),
                "3 days ago"
            );
        }
    }
}
