//! Content store client.
//!
//! - [`ContentClient`] - runs queries against the content API
//! - [`queries`] - the query catalogue
//! - [`documents`] - document shapes as returned by the queries
//! - [`normalize`] - documents to core records
//! - [`ContentError`] - classified request errors
//!
//! ```text
//!   ContentClient ──fetch──▶ EventDocument ──normalize_event──▶ EventRecord
//!                                                                  │
//!                                                   EventView::from_record
//! ```
//!
//! # Example
//!
//! ```ignore
//! use wantage_content::{ContentClient, ContentConfig, normalize_events};
//!
//! let client = ContentClient::new(ContentConfig::new("abc123", "production"))?;
//! let records = normalize_events(&client.all_events().await?);
//! ```

pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod normalize;
pub mod queries;

pub use client::{ContentClient, decode_response};
pub use config::ContentConfig;
pub use documents::{
    AlbumDocument, AssetDocument, AuthorDocument, CategoryDocument, EventDocument,
    FeatureDocument, ImageDocument, PostDocument, SlugField,
};
pub use error::{ContentError, ContentErrorCode, ContentResult};
pub use normalize::{
    body_blocks, normalize_album, normalize_albums, normalize_category, normalize_event,
    normalize_events, normalize_post, normalize_posts,
};
pub use queries::QueryName;
