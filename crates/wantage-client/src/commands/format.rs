//! `wantage format`: event time formatting without a content store.

use serde::Serialize;
use wantage_core::{CalendarSlot, DisplayText, EventTimeFormatter, EventTimeInput};

use crate::cli::OutputFormat;
use crate::commands::{join_lines, print_json};
use crate::error::ClientResult;

/// Every display form of one event time.
#[derive(Debug, Serialize)]
pub struct FormattedTimes {
    pub date: DisplayText,
    pub long_date: DisplayText,
    pub time: DisplayText,
    pub date_time: DisplayText,
    pub calendar: Option<CalendarSlot>,
}

impl FormattedTimes {
    pub fn new(name: &str, input: &EventTimeInput) -> Self {
        let formatter = EventTimeFormatter::new();
        let start = input.start.as_deref();
        Self {
            date: formatter.format_date(start),
            long_date: formatter.format_long_date(start),
            time: formatter.format_time_range(input),
            date_time: formatter.format_full_date_time(input),
            calendar: CalendarSlot::from_input(name, input),
        }
    }
}

pub fn run(name: &str, input: &EventTimeInput, output: OutputFormat) -> ClientResult<()> {
    let times = FormattedTimes::new(name, input);
    match output {
        OutputFormat::Json => print_json(&times),
        OutputFormat::Text => {
            print!("{}", render(&times));
            Ok(())
        }
    }
}

pub fn render(times: &FormattedTimes) -> String {
    let calendar = match &times.calendar {
        Some(slot) => format!(
            "Calendar:   {} {} → {} {} ({})",
            slot.start_date, slot.start_time, slot.end_date, slot.end_time, slot.time_zone
        ),
        None => "Calendar:   unavailable".to_string(),
    };
    join_lines(vec![
        format!("Date:       {}", times.date),
        format!("Long date:  {}", times.long_date),
        format!("Time:       {}", times.time),
        format!("Date/time:  {}", times.date_time),
        calendar,
    ])
}
