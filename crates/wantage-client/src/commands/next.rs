//! `wantage next`: the home page hero, the next event and its countdown.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use wantage_content::{ContentClient, normalize_event};
use wantage_core::{CountdownState, EventView};

use crate::cli::OutputFormat;
use crate::commands::{ellipsis, join_lines, print_json};
use crate::config::DisplaySettings;
use crate::error::ClientResult;

#[derive(Debug, Serialize)]
pub struct NextEvent {
    pub event: Option<EventView>,
    pub countdown: Option<CountdownState>,
}

impl NextEvent {
    pub fn new(event: Option<EventView>, now: DateTime<Utc>) -> Self {
        let countdown = event
            .as_ref()
            .map(|event| CountdownState::until(event.start.as_deref(), now));
        Self { event, countdown }
    }
}

pub async fn run(
    client: &ContentClient,
    display: &DisplaySettings,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> ClientResult<()> {
    let event = client
        .latest_event()
        .await?
        .map(|doc| EventView::from_record(&normalize_event(&doc), client.images(), now));
    debug!(found = event.is_some(), "next event");
    let next = NextEvent::new(event, now);

    match output {
        OutputFormat::Json => print_json(&next),
        OutputFormat::Text => {
            print!("{}", render(&next, display));
            Ok(())
        }
    }
}

pub fn render(next: &NextEvent, display: &DisplaySettings) -> String {
    let Some(event) = &next.event else {
        return format!("{}\n", display.no_events_text);
    };

    let mut lines = vec![
        event.title.clone(),
        event.date_time.to_string(),
        event.location.clone(),
    ];
    if !event.description.is_empty() {
        lines.push(ellipsis(&event.description, display.max_description_length).into_owned());
    }

    match next.countdown {
        Some(countdown @ CountdownState::Remaining { .. }) => {
            let units = countdown
                .units()
                .into_iter()
                .map(|(label, value)| format!("{} {}", value, label))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(String::new());
            lines.push(units);
        }
        Some(CountdownState::Started) => {
            lines.push(String::new());
            lines.push(CountdownState::Started.to_string());
        }
        None => {}
    }
    lines.push(event.url.clone());
    join_lines(lines)
}
