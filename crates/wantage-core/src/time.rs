//! Instant parsing and the fixed display time zone.
//!
//! Content arrives as ISO-8601 strings. This module turns them into UTC
//! instants and provides [`EventTimeInput`], the per-render input to the
//! event formatter. All zoned rendering happens in [`DISPLAY_TIME_ZONE`],
//! never in the machine's local zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::{Europe, Tz};
use serde::{Deserialize, Serialize};

use crate::error::InstantError;

/// The zone every date and time is rendered in.
pub const DISPLAY_TIME_ZONE: Tz = Europe::London;

/// IANA name of [`DISPLAY_TIME_ZONE`], for calendar exports.
pub const DISPLAY_TIME_ZONE_NAME: &str = "Europe/London";

/// Naive datetime shapes accepted when no offset is given.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 instant.
///
/// Accepted shapes:
/// - RFC 3339 with offset or `Z`, fractional seconds allowed
///   (`2025-07-05T11:00:00.000Z`)
/// - a naive date-time, read as wall-clock time in [`DISPLAY_TIME_ZONE`]
/// - a bare date, read as midnight UTC
///
/// # Errors
///
/// Returns [`InstantError::Empty`] for blank input,
/// [`InstantError::NonexistentLocalTime`] for a naive time inside a DST gap and
/// [`InstantError::Malformed`] for anything else that does not parse.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, InstantError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InstantError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            // Ambiguous wall-clock times (the repeated autumn hour) take the earlier instant.
            return DISPLAY_TIME_ZONE
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| InstantError::nonexistent(trimmed));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(InstantError::malformed(trimmed))
}

/// Reads an optional instant field.
///
/// `None` and blank strings are "missing" and yield `Ok(None)`; anything else
/// must parse.
pub fn read_instant(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, InstantError> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse_instant(value).map(Some),
    }
}

/// Converts an instant to wall-clock time in the display zone.
pub fn to_display_zone(instant: &DateTime<Utc>) -> DateTime<Tz> {
    instant.with_timezone(&DISPLAY_TIME_ZONE)
}

/// Returns true if both instants fall on the same calendar day in the display zone.
pub fn same_display_day(a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
    to_display_zone(a).date_naive() == to_display_zone(b).date_naive()
}

/// Raw time fields of one event, as fetched from the content store.
///
/// Built fresh for each render; formatting reads it and never changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTimeInput {
    /// Start instant (ISO-8601), possibly missing or malformed.
    pub start: Option<String>,
    /// End instant (ISO-8601). Missing means the event has no defined end.
    pub end: Option<String>,
    /// Free-text override such as "All day".
    pub manual_display: Option<String>,
}

impl EventTimeInput {
    /// Creates an input with only a start instant.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            ..Default::default()
        }
    }

    /// Creates an input from optional fields, as they come off a document.
    pub fn from_fields(
        start: Option<&str>,
        end: Option<&str>,
        manual_display: Option<&str>,
    ) -> Self {
        Self {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            manual_display: manual_display.map(str::to_string),
        }
    }

    /// Builder method to set the end instant.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Builder method to set the manual display override.
    pub fn with_manual_display(mut self, text: impl Into<String>) -> Self {
        self.manual_display = Some(text.into());
        self
    }

    /// Returns the manual override when it carries any visible text.
    pub fn manual_override(&self) -> Option<&str> {
        self.manual_display
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Returns the end instant if set, otherwise the start instant.
    pub fn end_or_start(&self) -> Option<&str> {
        self.end
            .as_deref()
            .filter(|end| !end.trim().is_empty())
            .or(self.start.as_deref())
    }
}
