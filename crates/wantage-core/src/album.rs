//! Photo album records and their gallery view.

use serde::{Deserialize, Serialize};

use crate::event::non_blank;
use crate::format::{DisplayText, EventTimeFormatter};
use crate::image::{ImageRequest, ImageSource, ImageUrlBuilder};

/// Most photos shown in an album preview.
pub const ALBUM_PREVIEW_LIMIT: usize = 5;

/// A photo album as stored in the content store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub id: String,
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// Album date (ISO-8601).
    pub album_date: Option<String>,
    pub images: Vec<ImageSource>,
}

impl AlbumRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn url(&self) -> String {
        match non_blank(self.slug.as_deref()) {
            Some(slug) => format!("/gallery/{}", slug),
            None => format!("/gallery/{}", self.id),
        }
    }
}

/// One photo in an album view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoView {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A display-ready album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumView {
    pub id: String,
    pub url: String,
    pub title: String,
    pub date: DisplayText,
    pub description: String,
    pub photo_count: usize,
    /// Up to [`ALBUM_PREVIEW_LIMIT`] preview photos.
    pub preview: Vec<PhotoView>,
    /// Photos not shown in the preview.
    pub remaining_count: usize,
}

impl AlbumView {
    /// Builds the view, or `None` for an album with no usable photos.
    pub fn from_record(record: &AlbumRecord, images: &ImageUrlBuilder) -> Option<Self> {
        let photos: Vec<PhotoView> = record
            .images
            .iter()
            .enumerate()
            .filter_map(|(index, image)| {
                let url = images.url(image, &ImageRequest::thumbnail()).ok()?;
                let alt = non_blank(image.alt.as_deref())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} - Photo {}", record.title, index + 1));
                Some(PhotoView {
                    url,
                    alt,
                    caption: non_blank(image.caption.as_deref()).map(str::to_string),
                })
            })
            .collect();

        if photos.is_empty() {
            tracing::debug!(album = %record.id, "album has no usable photos");
            return None;
        }

        let photo_count = photos.len();
        let preview: Vec<PhotoView> = photos.into_iter().take(ALBUM_PREVIEW_LIMIT).collect();

        Some(Self {
            id: record.id.clone(),
            url: record.url(),
            title: record.title.clone(),
            date: EventTimeFormatter::new().format_date(record.album_date.as_deref()),
            description: non_blank(record.description.as_deref())
                .unwrap_or_default()
                .to_string(),
            photo_count,
            remaining_count: photo_count - preview.len(),
            preview,
        })
    }
}
