//! Blog posts: records, cards, the full post page and category listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::body::{BlockView, BodyBlock, render_body};
use crate::event::non_blank;
use crate::format::{DisplayText, EventTimeFormatter};
use crate::image::{ImageRequest, ImageSource, ImageUrlBuilder, PLACEHOLDER_IMAGE};

/// Shown on a post page when the body is empty.
pub const EMPTY_POST_BODY: &str = "This post has no content.";

/// Shown in the author box when the author has no bio.
pub const MISSING_AUTHOR_BIO: &str = "Author bio not available.";

/// Portrait shown when the author has no image.
pub const AUTHOR_IMAGE_PLACEHOLDER: &str = "/placeholder.svg?height=64&width=64";

/// Card layout; featured cards get a larger image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    #[default]
    Default,
    Featured,
}

impl CardVariant {
    pub fn image_request(&self) -> ImageRequest {
        match self {
            Self::Default => ImageRequest::card(),
            Self::Featured => ImageRequest::featured_card(),
        }
    }
}

/// A blog post as stored in the content store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub slug: Option<String>,
    pub title: String,
    /// Publish instant (ISO-8601).
    pub published_at: Option<String>,
    pub image: Option<ImageSource>,
    /// Plain text of the opening paragraph.
    pub excerpt: Option<String>,
    pub body: Vec<BodyBlock>,
    pub author: Option<Author>,
    pub categories: Vec<Category>,
}

impl PostRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    pub fn with_body(mut self, block: BodyBlock) -> Self {
        self.body.push(block);
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Site path of the post, or `#` when it has no slug.
    pub fn url(&self) -> String {
        match non_blank(self.slug.as_deref()) {
            Some(slug) => format!("/blog/{}", slug),
            None => "#".to_string(),
        }
    }
}

/// The person credited on a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Role, e.g. "Chair, residents' association".
    pub title: Option<String>,
    pub image: Option<ImageSource>,
    pub bio: Vec<BodyBlock>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A blog category (tag).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Site path of the category listing, or `#` when it has no slug.
    pub fn url(&self) -> String {
        match non_blank(self.slug.as_deref()) {
            Some(slug) => format!("/blog/tag/{}", slug),
            None => "#".to_string(),
        }
    }
}

/// A display-ready blog card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Relative publish date, e.g. "3 days ago".
    pub published: DisplayText,
    pub image_url: String,
    pub image_alt: String,
    pub excerpt: String,
}

impl PostView {
    pub fn from_record(
        record: &PostRecord,
        images: &ImageUrlBuilder,
        variant: CardVariant,
        now: DateTime<Utc>,
    ) -> Self {
        let formatter = EventTimeFormatter::new();
        Self {
            id: record.id.clone(),
            url: record.url(),
            title: record.title.clone(),
            published: formatter.format_published(record.published_at.as_deref(), now),
            image_url: images.url_or(
                record.image.as_ref(),
                &variant.image_request(),
                PLACEHOLDER_IMAGE,
            ),
            image_alt: format!("Image for {}", record.title),
            excerpt: non_blank(record.excerpt.as_deref())
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// A category ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            title: category.title.clone(),
            url: category.url(),
            description: non_blank(category.description.as_deref()).map(str::to_string),
        }
    }
}

/// The author box on a post page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub image_url: String,
    /// Bio blocks; empty when the author has none.
    pub bio: Vec<BlockView>,
}

impl AuthorView {
    fn from_author(author: &Author, images: &ImageUrlBuilder) -> Self {
        Self {
            name: author.name.clone(),
            title: non_blank(author.title.as_deref()).map(str::to_string),
            image_url: images.url_or(
                author.image.as_ref(),
                &ImageRequest::avatar(64),
                AUTHOR_IMAGE_PLACEHOLDER,
            ),
            bio: render_body(&author.bio, images),
        }
    }
}

/// The full post page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetailView {
    pub id: String,
    pub url: String,
    pub title: String,
    pub published: DisplayText,
    /// Hero image, only when the post has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub image_alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorView>,
    pub categories: Vec<CategoryView>,
    /// Body blocks; empty when the post has no content.
    pub body: Vec<BlockView>,
}

impl PostDetailView {
    pub fn from_record(record: &PostRecord, images: &ImageUrlBuilder, now: DateTime<Utc>) -> Self {
        let image_url = record
            .image
            .as_ref()
            .and_then(|image| match images.url(image, &ImageRequest::featured_card()) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::debug!(%err, post = %record.id, "post image unavailable");
                    None
                }
            });

        Self {
            id: record.id.clone(),
            url: record.url(),
            title: record.title.clone(),
            published: EventTimeFormatter::new()
                .format_published(record.published_at.as_deref(), now),
            image_url,
            image_alt: record.title.clone(),
            author: record
                .author
                .as_ref()
                .filter(|author| non_blank(Some(author.name.as_str())).is_some())
                .map(|author| AuthorView::from_author(author, images)),
            categories: record.categories.iter().map(CategoryView::from).collect(),
            body: render_body(&record.body, images),
        }
    }
}
