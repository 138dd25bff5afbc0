//! `wantage event <slug>`: one event in detail.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wantage_content::{ContentClient, normalize_event};
use wantage_core::image::PLACEHOLDER_IMAGE;
use wantage_core::{CountdownState, EventView, body_lines};

use crate::cli::OutputFormat;
use crate::commands::{join_lines, print_json};
use crate::error::{ClientError, ClientResult};

/// An event with its countdown, if it has not finished.
#[derive(Debug, Serialize)]
pub struct EventDetail {
    pub event: EventView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<CountdownState>,
}

impl EventDetail {
    pub fn new(event: EventView, now: DateTime<Utc>) -> Self {
        let countdown = event
            .is_upcoming
            .then(|| CountdownState::until(event.start.as_deref(), now));
        Self { event, countdown }
    }
}

pub async fn run(
    client: &ContentClient,
    slug: &str,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> ClientResult<()> {
    let document = client
        .event_by_slug(slug)
        .await?
        .ok_or_else(|| ClientError::NotFound(format!("event \"{}\"", slug)))?;
    let record = normalize_event(&document);
    let detail = EventDetail::new(EventView::from_record(&record, client.images(), now), now);

    match output {
        OutputFormat::Json => print_json(&detail),
        OutputFormat::Text => {
            print!("{}", render(&detail));
            Ok(())
        }
    }
}

pub fn render(detail: &EventDetail) -> String {
    let event = &detail.event;
    let mut lines = vec![
        event.title.clone(),
        event.long_date.to_string(),
        format!("Time:      {}", event.time),
        format!("Location:  {}", event.location),
    ];
    if let Some(organizer) = &event.organizer {
        lines.push(format!("Organizer: {}", organizer));
    }
    if let Some(email) = &event.contact_email {
        lines.push(format!("Contact:   {}", email));
    }
    if event.hero_image_url != PLACEHOLDER_IMAGE {
        lines.push(format!("Image:     {}", event.hero_image_url));
    }
    match &detail.countdown {
        Some(CountdownState::Started) => lines.push(CountdownState::Started.to_string()),
        Some(countdown) => lines.push(format!("Starts in: {}", countdown)),
        None => {}
    }

    if !event.description.is_empty() {
        lines.push(String::new());
        lines.push(event.description.clone());
    }
    if !event.long_description.is_empty() {
        lines.push(String::new());
        lines.extend(body_lines(&event.long_description));
    }

    if !event.features.is_empty() {
        lines.push(String::new());
        lines.push("Highlights:".to_string());
        lines.extend(event.features.iter().map(|feature| match &feature.description {
            Some(description) => format!(
                "  [{}] {}: {}",
                feature.icon.as_str(),
                feature.text,
                description
            ),
            None => format!("  [{}] {}", feature.icon.as_str(), feature.text),
        }));
    }

    if !event.gallery.is_empty() {
        lines.push(String::new());
        lines.push("Gallery:".to_string());
        lines.extend(event.gallery.iter().map(|url| format!("  {}", url)));
    }

    if let Some(slot) = &event.calendar {
        lines.push(String::new());
        lines.push(format!(
            "Add to calendar: {} {} → {} {} ({})",
            slot.start_date, slot.start_time, slot.end_date, slot.end_time, slot.time_zone
        ));
    }

    join_lines(lines)
}
