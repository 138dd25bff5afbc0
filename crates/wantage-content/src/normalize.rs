//! Document to record conversion.
//!
//! Turns the store's document shapes into the core record types. Blank strings
//! become `None` here so the view layer only has one notion of "missing".

use serde_json::Value;
use wantage_core::{
    AlbumRecord, Author, BodyBlock, Category, EventRecord, EventTimeInput, Feature, ImageSource,
    PostRecord, first_paragraph,
};

use crate::documents::{
    AlbumDocument, AuthorDocument, CategoryDocument, EventDocument, FeatureDocument,
    ImageDocument, PostDocument, SlugField,
};

/// Title used when a document has none.
pub const UNTITLED: &str = "Untitled";

/// Converts an [`EventDocument`] to an [`EventRecord`].
pub fn normalize_event(doc: &EventDocument) -> EventRecord {
    EventRecord {
        id: doc.id.clone(),
        slug: slug(doc.slug.as_ref()),
        title: title(doc.title.as_deref()),
        time: EventTimeInput::from_fields(
            text(doc.event_date_time.as_deref()).as_deref(),
            text(doc.event_end_date_time.as_deref()).as_deref(),
            text(doc.time_display.as_deref()).as_deref(),
        ),
        location: text(doc.location.as_deref()),
        description: text(doc.description.as_deref()),
        long_description: body_blocks(doc.long_description.as_deref().unwrap_or_default()),
        image: doc.main_image.as_ref().and_then(convert_image),
        gallery: doc
            .gallery
            .iter()
            .flatten()
            .filter_map(convert_image)
            .collect(),
        organizer: text(doc.organizer_name.as_deref()),
        contact_email: text(doc.contact_email.as_deref()),
        features: doc
            .features
            .iter()
            .flatten()
            .filter_map(convert_feature)
            .collect(),
    }
}

/// Converts a batch of event documents.
pub fn normalize_events(docs: &[EventDocument]) -> Vec<EventRecord> {
    docs.iter().map(normalize_event).collect()
}

/// Converts a [`PostDocument`] to a [`PostRecord`].
///
/// Categories whose reference no longer resolves are dropped, as is an
/// author with no name.
pub fn normalize_post(doc: &PostDocument) -> PostRecord {
    let body = body_blocks(doc.body.as_deref().unwrap_or_default());
    PostRecord {
        id: doc.id.clone(),
        slug: slug(doc.slug.as_ref()),
        title: title(doc.title.as_deref()),
        published_at: text(doc.published_at.as_deref()),
        image: doc.main_image.as_ref().and_then(convert_image),
        excerpt: first_paragraph(&body).map(str::to_string),
        body,
        author: doc.author.as_ref().and_then(convert_author),
        categories: doc
            .categories
            .iter()
            .flatten()
            .flatten()
            .map(normalize_category)
            .collect(),
    }
}

pub fn normalize_posts(docs: &[PostDocument]) -> Vec<PostRecord> {
    docs.iter().map(normalize_post).collect()
}

/// Converts a [`CategoryDocument`] to a [`Category`].
pub fn normalize_category(doc: &CategoryDocument) -> Category {
    Category {
        id: doc.id.clone(),
        title: title(doc.title.as_deref()),
        slug: slug(doc.slug.as_ref()),
        description: text(doc.description.as_deref()),
    }
}

/// Converts an [`AlbumDocument`] to an [`AlbumRecord`].
pub fn normalize_album(doc: &AlbumDocument) -> AlbumRecord {
    AlbumRecord {
        id: doc.id.clone(),
        slug: slug(doc.slug.as_ref()),
        title: title(doc.title.as_deref()),
        description: text(doc.description.as_deref()),
        album_date: text(doc.album_date.as_deref()),
        images: doc
            .images
            .iter()
            .flatten()
            .filter_map(convert_image)
            .collect(),
    }
}

pub fn normalize_albums(docs: &[AlbumDocument]) -> Vec<AlbumRecord> {
    docs.iter().map(normalize_album).collect()
}

/// Returns the plain text of the first paragraph block in a rich-text body.
pub fn body_excerpt(blocks: &[Value]) -> Option<String> {
    first_paragraph(&body_blocks(blocks)).map(str::to_string)
}

/// Converts rich-text block JSON to [`BodyBlock`]s.
///
/// Text blocks with no visible text, images without an asset and block types
/// the toolkit cannot show are skipped.
pub fn body_blocks(blocks: &[Value]) -> Vec<BodyBlock> {
    blocks.iter().filter_map(convert_block).collect()
}

fn convert_block(block: &Value) -> Option<BodyBlock> {
    match block.get("_type").and_then(Value::as_str)? {
        "block" => {
            let spans = block.get("children")?.as_array()?;
            let joined: String = spans
                .iter()
                .filter_map(|span| span.get("text").and_then(Value::as_str))
                .collect();
            let content = text(Some(joined.as_str()))?;

            if let Some(list) = block.get("listItem").and_then(Value::as_str) {
                return Some(BodyBlock::ListItem {
                    text: content,
                    ordered: list == "number",
                });
            }
            let style = block.get("style").and_then(Value::as_str).unwrap_or("normal");
            Some(match style {
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => BodyBlock::Heading {
                    level: style[1..].parse().unwrap_or(2),
                    text: content,
                },
                "blockquote" => BodyBlock::Quote { text: content },
                _ => BodyBlock::Paragraph { text: content },
            })
        }
        "image" => {
            let doc: ImageDocument = match serde_json::from_value(block.clone()) {
                Ok(doc) => doc,
                Err(err) => {
                    tracing::debug!(%err, "unreadable image block");
                    return None;
                }
            };
            convert_image(&doc).map(|image| BodyBlock::Image { image })
        }
        other => {
            tracing::trace!(block_type = other, "skipping body block");
            None
        }
    }
}

fn convert_author(doc: &AuthorDocument) -> Option<Author> {
    Some(Author {
        name: text(doc.name.as_deref())?,
        title: text(doc.title.as_deref()),
        image: doc.image.as_ref().and_then(convert_image),
        bio: body_blocks(doc.bio.as_deref().unwrap_or_default()),
    })
}

fn convert_image(doc: &ImageDocument) -> Option<ImageSource> {
    let asset = doc.asset.as_ref()?;
    let source = ImageSource {
        asset_ref: text(asset.reference.as_deref()),
        url: text(asset.url.as_deref()),
        alt: text(doc.alt.as_deref()),
        caption: text(doc.caption.as_deref()),
    };
    source.has_asset().then_some(source)
}

fn convert_feature(doc: &FeatureDocument) -> Option<Feature> {
    let label = text(doc.text.as_deref())?;
    Some(Feature {
        icon_name: text(doc.icon_name.as_deref()),
        text: label,
        description: text(doc.description.as_deref()),
    })
}

fn slug(field: Option<&SlugField>) -> Option<String> {
    text(field.and_then(SlugField::as_str))
}

fn title(value: Option<&str>) -> String {
    text(value).unwrap_or_else(|| UNTITLED.to_string())
}

fn text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
