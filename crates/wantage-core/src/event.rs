//! Event types for community events.
//!
//! - [`EventRecord`]: an event as read from the content store, fields optional
//! - [`EventView`]: a fully populated, display-ready view of one event
//! - [`FeatureIcon`]: the closed set of icons a highlight can carry

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::body::{BlockView, BodyBlock, render_body};
use crate::format::{CalendarSlot, DisplayText, EventTimeFormatter};
use crate::image::{ImageRequest, ImageSource, ImageUrlBuilder, PLACEHOLDER_IMAGE};
use crate::time::{EventTimeInput, read_instant};

/// Location text shown when an event has none.
pub const LOCATION_PLACEHOLDER: &str = "To be announced";

/// Icon for an event highlight.
///
/// Authors type the icon name as free text; unknown names fall back to
/// [`FeatureIcon::Info`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    Music,
    Utensils,
    Users,
    CalendarDays,
    #[default]
    Info,
}

impl FeatureIcon {
    /// Maps an author-supplied icon name, ignoring case.
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::Info;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "music" => Self::Music,
            "utensils" => Self::Utensils,
            "users" => Self::Users,
            "calendardays" => Self::CalendarDays,
            _ => Self::Info,
        }
    }

    /// Returns the icon key used by templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Utensils => "utensils",
            Self::Users => "users",
            Self::CalendarDays => "calendar-days",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for FeatureIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A highlight attached to an event ("Live music", "Food stalls").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon_name: Option<String>,
    pub text: String,
    pub description: Option<String>,
}

impl Feature {
    pub fn new(icon_name: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            icon_name: icon_name.map(str::to_string),
            text: text.into(),
            description: None,
        }
    }
}

/// An event as stored in the content store.
///
/// Every field other than the id may be missing; [`EventView::from_record`]
/// fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Document id.
    pub id: String,
    /// URL slug.
    pub slug: Option<String>,
    /// Event title.
    pub title: String,
    /// Start, end and manual time text.
    pub time: EventTimeInput,
    pub location: Option<String>,
    /// Short description for cards.
    pub description: Option<String>,
    /// Rich-text description for the event page.
    pub long_description: Vec<BodyBlock>,
    pub image: Option<ImageSource>,
    pub gallery: Vec<ImageSource>,
    pub organizer: Option<String>,
    pub contact_email: Option<String>,
    pub features: Vec<Feature>,
}

impl EventRecord {
    /// Creates a record with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Builder method to set the time fields.
    pub fn with_time(mut self, time: EventTimeInput) -> Self {
        self.time = time;
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to append a long description block.
    pub fn with_long_description(mut self, block: BodyBlock) -> Self {
        self.long_description.push(block);
        self
    }

    /// Builder method to set the main image.
    pub fn with_image(mut self, image: ImageSource) -> Self {
        self.image = Some(image);
        self
    }

    /// Builder method to add a highlight.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Builder method to set the organiser.
    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = Some(organizer.into());
        self
    }

    /// Returns the site path of the event page.
    pub fn url(&self) -> String {
        match non_blank(self.slug.as_deref()) {
            Some(slug) => format!("/events/{}", slug),
            None => format!("/events/{}", self.id),
        }
    }

    /// Returns the parsed start instant, if there is a readable one.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        read_instant(self.time.start.as_deref()).ok().flatten()
    }

    /// Returns true if the event has not finished at `now`.
    ///
    /// Compares the end instant, or the start when there is no readable end.
    /// Events without a readable start are never upcoming.
    pub fn is_upcoming_at(&self, now: DateTime<Utc>) -> bool {
        let Some(start) = self.start_instant() else {
            return false;
        };
        let end = read_instant(self.time.end.as_deref())
            .ok()
            .flatten()
            .unwrap_or(start);
        end >= now
    }
}

/// Picks the upcoming event with the earliest start.
pub fn next_upcoming(records: &[EventRecord], now: DateTime<Utc>) -> Option<&EventRecord> {
    records
        .iter()
        .filter(|record| record.is_upcoming_at(now))
        .filter_map(|record| record.start_instant().map(|start| (start, record)))
        .min_by_key(|(start, _)| *start)
        .map(|(_, record)| record)
}

/// A highlight ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureView {
    pub icon: FeatureIcon,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Feature> for FeatureView {
    fn from(feature: &Feature) -> Self {
        Self {
            icon: FeatureIcon::from_name(feature.icon_name.as_deref()),
            text: feature.text.clone(),
            description: non_blank(feature.description.as_deref()).map(str::to_string),
        }
    }
}

/// A display-ready view of an event.
///
/// Every field is populated: missing data has already been replaced by a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    pub id: String,
    /// Site path of the event page.
    pub url: String,
    pub title: String,
    /// Card date, e.g. "5 July 2025".
    pub date: DisplayText,
    /// Detail page date, e.g. "Saturday, July 5th, 2025".
    pub long_date: DisplayText,
    /// Time range or manual text.
    pub time: DisplayText,
    /// Date joined with the time range.
    pub date_time: DisplayText,
    /// Raw start instant, for countdowns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub long_description: Vec<BlockView>,
    /// Card image.
    pub image_url: String,
    /// Event page hero image.
    pub hero_image_url: String,
    pub image_alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub features: Vec<FeatureView>,
    /// Gallery thumbnail URLs; broken images are skipped.
    pub gallery: Vec<String>,
    /// Add-to-calendar fields, when every field could be produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarSlot>,
    pub is_upcoming: bool,
}

impl EventView {
    /// Creates a view from a record at a specific point in time.
    pub fn from_record(record: &EventRecord, images: &ImageUrlBuilder, now: DateTime<Utc>) -> Self {
        let formatter = EventTimeFormatter::new();
        let start = record.time.start.as_deref();

        let gallery = record
            .gallery
            .iter()
            .filter_map(|image| match images.url(image, &ImageRequest::thumbnail()) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::debug!(%err, event = %record.id, "skipping gallery image");
                    None
                }
            })
            .collect();

        Self {
            id: record.id.clone(),
            url: record.url(),
            title: record.title.clone(),
            date: formatter.format_date(start),
            long_date: formatter.format_long_date(start),
            time: formatter.format_time_range(&record.time),
            date_time: formatter.format_full_date_time(&record.time),
            start: non_blank(start).map(str::to_string),
            location: non_blank(record.location.as_deref())
                .unwrap_or(LOCATION_PLACEHOLDER)
                .to_string(),
            description: non_blank(record.description.as_deref())
                .unwrap_or_default()
                .to_string(),
            long_description: render_body(&record.long_description, images),
            image_url: images.url_or(
                record.image.as_ref(),
                &ImageRequest::featured_card(),
                PLACEHOLDER_IMAGE,
            ),
            hero_image_url: images.url_or(
                record.image.as_ref(),
                &ImageRequest::hero(),
                PLACEHOLDER_IMAGE,
            ),
            image_alt: format!("Image for {}", record.title),
            organizer: non_blank(record.organizer.as_deref()).map(str::to_string),
            contact_email: non_blank(record.contact_email.as_deref()).map(str::to_string),
            features: record.features.iter().map(FeatureView::from).collect(),
            gallery,
            calendar: CalendarSlot::from_input(&record.title, &record.time),
            is_upcoming: record.is_upcoming_at(now),
        }
    }
}

/// Splits a list into the featured first event and the rest.
pub fn split_featured(mut views: Vec<EventView>) -> (Option<EventView>, Vec<EventView>) {
    if views.is_empty() {
        return (None, views);
    }
    let featured = views.remove(0);
    (Some(featured), views)
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new("proj", "production")
    }

    fn street_party() -> EventRecord {
        EventRecord::new("evt-1", "Annual street party")
            .with_slug("street-party-2025")
            .with_time(
                EventTimeInput::new("2025-07-05T11:00:00Z").with_end("2025-07-05T17:00:00Z"),
            )
            .with_location("Wantage Road, Reading")
            .with_description("Food, music and games.")
            .with_image(ImageSource::from_ref("image-abc-1600x900-jpg"))
    }

    mod feature_icon {
        use super::*;

        #[test]
        fn known_names_any_case() {
            assert_eq!(FeatureIcon::from_name(Some("Music")), FeatureIcon::Music);
            assert_eq!(FeatureIcon::from_name(Some("UTENSILS")), FeatureIcon::Utensils);
            assert_eq!(FeatureIcon::from_name(Some("users")), FeatureIcon::Users);
            assert_eq!(
                FeatureIcon::from_name(Some("CalendarDays")),
                FeatureIcon::CalendarDays
            );
        }

        #[test]
        fn unknown_names_fall_back_to_info() {
            assert_eq!(FeatureIcon::from_name(None), FeatureIcon::Info);
            assert_eq!(FeatureIcon::from_name(Some("")), FeatureIcon::Info);
            assert_eq!(FeatureIcon::from_name(Some("Rocket")), FeatureIcon::Info);
            assert_eq!(FeatureIcon::from_name(Some("calendar-days")), FeatureIcon::Info);
        }

        #[test]
        fn keys() {
            assert_eq!(FeatureIcon::CalendarDays.as_str(), "calendar-days");
            assert_eq!(FeatureIcon::Info.to_string(), "info");
        }
    }

    mod record {
        use super::*;

        #[test]
        fn url_prefers_slug() {
            assert_eq!(street_party().url(), "/events/street-party-2025");
            let no_slug = EventRecord::new("evt-9", "Quiz").with_slug("  ");
            assert_eq!(no_slug.url(), "/events/evt-9");
        }

        #[test]
        fn upcoming_uses_end_then_start() {
            let record = street_party();
            // After the start, before the end.
            assert!(record.is_upcoming_at(utc(2025, 7, 5, 15, 0, 0)));
            assert!(!record.is_upcoming_at(utc(2025, 7, 5, 18, 0, 0)));

            let no_end = EventRecord::new("e", "t")
                .with_time(EventTimeInput::new("2025-07-05T11:00:00Z"));
            assert!(no_end.is_upcoming_at(utc(2025, 7, 5, 11, 0, 0)));
            assert!(!no_end.is_upcoming_at(utc(2025, 7, 5, 11, 0, 1)));
        }

        #[test]
        fn unreadable_start_is_never_upcoming() {
            let record = EventRecord::new("e", "t")
                .with_time(EventTimeInput::new("soon").with_end("2099-01-01T00:00:00Z"));
            assert!(!record.is_upcoming_at(utc(2025, 1, 1, 0, 0, 0)));
            assert!(!EventRecord::new("e", "t").is_upcoming_at(utc(2025, 1, 1, 0, 0, 0)));
        }

        #[test]
        fn next_upcoming_picks_earliest_start() {
            let past = EventRecord::new("past", "Past")
                .with_time(EventTimeInput::new("2025-01-01T10:00:00Z"));
            let later = EventRecord::new("later", "Later")
                .with_time(EventTimeInput::new("2025-12-12T16:00:00Z"));
            let sooner = EventRecord::new("sooner", "Sooner")
                .with_time(EventTimeInput::new("2025-07-05T11:00:00Z"));
            let records = vec![past, later, sooner];

            let now = utc(2025, 6, 1, 0, 0, 0);
            assert_eq!(next_upcoming(&records, now).map(|r| r.id.as_str()), Some("sooner"));
            assert!(next_upcoming(&records, utc(2026, 1, 1, 0, 0, 0)).is_none());
        }
    }

    mod view {
        use super::*;

        #[test]
        fn populated_record() {
            let view = EventView::from_record(&street_party(), &images(), utc(2025, 6, 1, 0, 0, 0));
            assert_eq!(view.url, "/events/street-party-2025");
            assert_eq!(view.date, "5 July 2025");
            assert_eq!(view.long_date, "Saturday, July 5th, 2025");
            assert_eq!(view.time, "12:00 pm - 6:00 pm");
            assert_eq!(view.date_time, "5 July 2025, 12:00 pm - 6:00 pm");
            assert_eq!(view.location, "Wantage Road, Reading");
            assert_eq!(
                view.image_url,
                "https://cdn.sanity.io/images/proj/production/abc-1600x900.jpg?w=800&h=450&fit=crop"
            );
            assert_eq!(
                view.hero_image_url,
                "https://cdn.sanity.io/images/proj/production/abc-1600x900.jpg?w=1200&h=675"
            );
            assert_eq!(view.image_alt, "Image for Annual street party");
            assert!(view.is_upcoming);
            assert!(view.calendar.is_some());
        }

        #[test]
        fn empty_record_gets_placeholders() {
            let view = EventView::from_record(
                &EventRecord::new("evt-2", "Mystery"),
                &images(),
                utc(2025, 6, 1, 0, 0, 0),
            );
            assert_eq!(view.url, "/events/evt-2");
            assert_eq!(view.date, "Date TBD");
            assert_eq!(view.time, "Time TBD");
            assert_eq!(view.date_time, "Date TBD");
            assert_eq!(view.location, LOCATION_PLACEHOLDER);
            assert_eq!(view.description, "");
            assert_eq!(view.image_url, PLACEHOLDER_IMAGE);
            assert_eq!(view.hero_image_url, PLACEHOLDER_IMAGE);
            assert!(view.long_description.is_empty());
            assert!(view.start.is_none());
            assert!(view.calendar.is_none());
            assert!(!view.is_upcoming);
        }

        #[test]
        fn features_and_gallery() {
            let mut record = street_party()
                .with_feature(Feature::new(Some("music"), "Live bands"))
                .with_feature(Feature::new(None, "Bring a chair"));
            record.gallery = vec![
                ImageSource::from_url("https://cdn.example.org/one.jpg"),
                ImageSource::from_ref("not-an-image"),
            ];

            let view = EventView::from_record(&record, &images(), utc(2025, 6, 1, 0, 0, 0));
            assert_eq!(view.features.len(), 2);
            assert_eq!(view.features[0].icon, FeatureIcon::Music);
            assert_eq!(view.features[1].icon, FeatureIcon::Info);
            assert_eq!(view.gallery, vec!["https://cdn.example.org/one.jpg?w=400&h=400"]);
        }

        #[test]
        fn long_description_is_rendered() {
            let record = street_party()
                .with_long_description(BodyBlock::paragraph("Stalls open at noon."))
                .with_long_description(BodyBlock::Image {
                    image: ImageSource::from_ref("image-map-1000x800-png").with_alt("Road map"),
                });

            let view = EventView::from_record(&record, &images(), utc(2025, 6, 1, 0, 0, 0));
            assert_eq!(
                view.long_description,
                vec![
                    BlockView::Paragraph {
                        text: "Stalls open at noon.".into()
                    },
                    BlockView::Image {
                        url: "https://cdn.sanity.io/images/proj/production/map-1000x800.png?w=1200"
                            .into(),
                        alt: "Road map".into(),
                        caption: None,
                    },
                ]
            );
        }

        #[test]
        fn split_featured_first_wins() {
            let now = utc(2025, 6, 1, 0, 0, 0);
            let views: Vec<EventView> = ["a", "b", "c"]
                .iter()
                .map(|id| EventView::from_record(&EventRecord::new(*id, *id), &images(), now))
                .collect();

            let (featured, rest) = split_featured(views);
            assert_eq!(featured.map(|v| v.id), Some("a".to_string()));
            assert_eq!(rest.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(), ["b", "c"]);

            let (featured, rest) = split_featured(Vec::new());
            assert!(featured.is_none());
            assert!(rest.is_empty());
        }
    }
}
