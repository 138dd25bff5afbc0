//! Document shapes returned by the content store queries.
//!
//! Field names follow the store's camelCase. Every field is optional because
//! authors can publish incomplete documents; [`crate::normalize`] turns these
//! into the core record types.

use serde::Deserialize;
use serde_json::Value;

/// A slug, projected either as a plain string (`"slug": slug.current`) or as
/// the raw `{ "current": ... }` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SlugField {
    Plain(String),
    Object { current: Option<String> },
}

impl SlugField {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Plain(slug) => Some(slug),
            Self::Object { current } => current.as_deref(),
        }
    }
}

/// Asset pointer inside an image field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssetDocument {
    /// Asset reference, when the query did not dereference the asset.
    #[serde(rename = "_ref")]
    pub reference: Option<String>,
    /// Asset URL, when the query used `asset->{url}`.
    pub url: Option<String>,
}

/// An image field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageDocument {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub asset: Option<AssetDocument>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

/// A highlight on an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDocument {
    pub icon_name: Option<String>,
    #[serde(alias = "title")]
    pub text: Option<String>,
    pub description: Option<String>,
}

/// An event document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<SlugField>,
    pub event_date_time: Option<String>,
    pub event_end_date_time: Option<String>,
    pub time_display: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Rich-text description as block JSON.
    pub long_description: Option<Vec<Value>>,
    pub main_image: Option<ImageDocument>,
    pub gallery: Option<Vec<ImageDocument>>,
    pub features: Option<Vec<FeatureDocument>>,
    #[serde(alias = "organizer")]
    pub organizer_name: Option<String>,
    pub contact_email: Option<String>,
}

/// A blog post document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<SlugField>,
    pub main_image: Option<ImageDocument>,
    pub published_at: Option<String>,
    /// Rich-text body as block JSON.
    pub body: Option<Vec<Value>>,
    pub author: Option<AuthorDocument>,
    /// Dereferenced categories; a dangling reference comes back as `null`.
    pub categories: Option<Vec<Option<CategoryDocument>>>,
}

/// A post author, dereferenced from the post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthorDocument {
    pub name: Option<String>,
    pub title: Option<String>,
    pub image: Option<ImageDocument>,
    pub bio: Option<Vec<Value>>,
}

/// A blog category document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<SlugField>,
    pub description: Option<String>,
}

/// A photo album document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<SlugField>,
    pub description: Option<String>,
    pub album_date: Option<String>,
    pub images: Option<Vec<ImageDocument>>,
}
