//! `wantage events`: the events page listing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use wantage_content::{ContentClient, normalize_events};
use wantage_core::{EventRecord, EventView, ImageUrlBuilder, split_featured};

use crate::cli::OutputFormat;
use crate::commands::{ellipsis, join_lines, print_json};
use crate::config::DisplaySettings;
use crate::error::ClientResult;

/// Listing filters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub upcoming_only: bool,
    pub limit: Option<usize>,
}

/// The first event featured, the rest after it.
#[derive(Debug, Serialize)]
pub struct EventListing {
    pub featured: Option<EventView>,
    pub events: Vec<EventView>,
}

pub async fn run(
    client: &ContentClient,
    display: &DisplaySettings,
    options: ListOptions,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> ClientResult<()> {
    let records = normalize_events(&client.all_events().await?);
    let listing = build_listing(&records, client.images(), options, now);
    debug!(
        total = records.len(),
        shown = listing.events.len() + usize::from(listing.featured.is_some()),
        "built event listing"
    );

    match output {
        OutputFormat::Json => print_json(&listing),
        OutputFormat::Text => {
            print!("{}", render(&listing, display));
            Ok(())
        }
    }
}

/// Filters, limits and converts records in query order.
pub fn build_listing(
    records: &[EventRecord],
    images: &ImageUrlBuilder,
    options: ListOptions,
    now: DateTime<Utc>,
) -> EventListing {
    let views: Vec<EventView> = records
        .iter()
        .filter(|record| !options.upcoming_only || record.is_upcoming_at(now))
        .take(options.limit.unwrap_or(usize::MAX))
        .map(|record| EventView::from_record(record, images, now))
        .collect();
    let (featured, events) = split_featured(views);
    EventListing { featured, events }
}

pub fn render(listing: &EventListing, display: &DisplaySettings) -> String {
    let Some(featured) = &listing.featured else {
        return format!("{}\n", display.no_events_text);
    };

    let mut lines = vec![
        format!("Featured: {}", featured.title),
        format!("  {}", featured.date_time),
        format!("  {}", featured.location),
    ];
    if !featured.description.is_empty() {
        lines.push(format!(
            "  {}",
            ellipsis(&featured.description, display.max_description_length)
        ));
    }
    lines.push(format!("  {}", featured.url));

    for event in &listing.events {
        lines.extend([
            String::new(),
            event.title.clone(),
            format!("  {} · {}", event.date, event.time),
            format!("  {}", event.location),
            format!("  {}", event.url),
        ]);
    }
    join_lines(lines)
}
