//! Countdown to the next event.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::time::read_instant;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// State of a countdown at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CountdownState {
    /// The target is missing, unreadable or already past.
    Started,
    /// Time left until the target.
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl CountdownState {
    /// Computes the countdown from `now` to `target`.
    pub fn until(target: Option<&str>, now: DateTime<Utc>) -> Self {
        let target = match read_instant(target) {
            Ok(Some(target)) => target,
            Ok(None) => return Self::Started,
            Err(err) => {
                warn!(%err, "invalid countdown target");
                return Self::Started;
            }
        };

        let left = (target - now).num_seconds();
        if left < 0 {
            return Self::Started;
        }

        Self::Remaining {
            days: left / SECONDS_PER_DAY,
            hours: (left % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (left % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: left % SECONDS_PER_MINUTE,
        }
    }

    pub fn has_started(&self) -> bool {
        matches!(self, Self::Started)
    }

    /// Returns labelled two-digit units, or an empty list once started.
    pub fn units(&self) -> Vec<(&'static str, String)> {
        match *self {
            Self::Started => Vec::new(),
            Self::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => vec![
                ("days", format!("{:02}", days)),
                ("hours", format!("{:02}", hours)),
                ("minutes", format!("{:02}", minutes)),
                ("seconds", format!("{:02}", seconds)),
            ],
        }
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => f.write_str("Event has started!"),
            Self::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => write!(f, "{:02}:{:02}:{:02}:{:02}", days, hours, minutes, seconds),
        }
    }
}
