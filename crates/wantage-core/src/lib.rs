//! Core types: instants, event time formatting, view-models, image URLs

pub mod album;
pub mod body;
pub mod countdown;
pub mod error;
pub mod event;
pub mod format;
pub mod image;
pub mod post;
pub mod time;
pub mod tracing;

pub use album::{AlbumRecord, AlbumView, PhotoView};
pub use body::{BODY_IMAGE_ALT, BlockView, BodyBlock, body_lines, first_paragraph, render_body};
pub use countdown::CountdownState;
pub use error::{ImageRefError, InstantError};
pub use event::{
    EventRecord, EventView, Feature, FeatureIcon, FeatureView, next_upcoming, split_featured,
};
pub use format::{CalendarSlot, DisplayText, EventTimeFormatter, Placeholder, distance_in_words};
pub use image::{ImageAssetRef, ImageFit, ImageRequest, ImageSource, ImageUrlBuilder};
pub use post::{
    Author, AuthorView, CardVariant, Category, CategoryView, PostDetailView, PostRecord, PostView,
};
pub use time::{DISPLAY_TIME_ZONE, EventTimeInput, parse_instant, read_instant};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
