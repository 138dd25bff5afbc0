//! Query catalogue.
//!
//! Every query the site runs against the content store. Field projections
//! match the document types in [`crate::documents`].

/// All events with a slug, oldest first.
pub const ALL_EVENTS_QUERY: &str = r#"*[_type == "event" && defined(slug.current)] | order(eventDateTime asc){
  _id,
  title,
  "slug": slug.current,
  eventDateTime,
  eventEndDateTime,
  location,
  description,
  mainImage,
  "organizerName": organizer,
  "timeDisplay": timeDisplay
}"#;

/// The next event that has not finished yet.
pub const LATEST_EVENT_QUERY: &str = r#"*[
  _type == "event" &&
  defined(slug.current) &&
  defined(eventDateTime) &&
  coalesce(eventEndDateTime, eventDateTime) >= now()
] | order(eventDateTime asc)[0]{
  _id,
  title,
  "slug": slug.current,
  eventDateTime,
  eventEndDateTime,
  location,
  description,
  mainImage,
  "organizerName": organizer,
  "timeDisplay": timeDisplay
}"#;

/// One event with its detail-page fields. Takes `$slug`.
pub const EVENT_BY_SLUG_QUERY: &str = r#"*[_type == "event" && slug.current == $slug][0]{
  _id,
  title,
  "slug": slug.current,
  eventDateTime,
  eventEndDateTime,
  timeDisplay,
  location,
  description,
  longDescription,
  mainImage,
  gallery,
  features,
  "organizerName": organizer,
  contactEmail
}"#;

/// The three most recent blog posts.
pub const POSTS_QUERY: &str = r#"*[_type == "post" && defined(slug.current)] | order(publishedAt desc)[0...3]{
  _id,
  title,
  slug,
  mainImage,
  publishedAt,
  body
}"#;

/// One post with its author and categories. Takes `$slug`.
pub const POST_BY_SLUG_QUERY: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  _id,
  title,
  slug,
  publishedAt,
  mainImage,
  body,
  "author": author->{name, title, image, bio},
  "categories": categories[]->{_id, title, slug, description}
}"#;

/// One blog category. Takes `$slug`.
pub const CATEGORY_BY_SLUG_QUERY: &str = r#"*[_type == "category" && slug.current == $slug][0]{
  _id,
  title,
  slug,
  description
}"#;

/// Every post filed under a category, newest first. Takes `$categoryId`.
pub const CATEGORY_POSTS_QUERY: &str = r#"*[_type == "post" && defined(slug.current) && references($categoryId)] | order(publishedAt desc){
  _id,
  title,
  slug,
  publishedAt,
  mainImage,
  body
}"#;

/// All photo albums, with asset URLs dereferenced.
pub const ALBUMS_QUERY: &str = r#"*[_type == "album"] | order(albumDate desc){
  _id,
  title,
  "slug": slug.current,
  description,
  albumDate,
  images[]{
    _key,
    asset->{url},
    caption,
    alt
  }
}"#;

/// One album. Takes `$slug`.
pub const ALBUM_BY_SLUG_QUERY: &str = r#"*[_type == "album" && slug.current == $slug][0]{
  _id,
  title,
  "slug": slug.current,
  description,
  albumDate,
  images[]{
    _key,
    asset->{url},
    caption,
    alt
  }
}"#;

/// Names a query for logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryName {
    AllEvents,
    LatestEvent,
    EventBySlug,
    Posts,
    PostBySlug,
    CategoryBySlug,
    CategoryPosts,
    Albums,
    AlbumBySlug,
}

impl QueryName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllEvents => "all_events",
            Self::LatestEvent => "latest_event",
            Self::EventBySlug => "event_by_slug",
            Self::Posts => "posts",
            Self::PostBySlug => "post_by_slug",
            Self::CategoryBySlug => "category_by_slug",
            Self::CategoryPosts => "category_posts",
            Self::Albums => "albums",
            Self::AlbumBySlug => "album_by_slug",
        }
    }

    /// Returns the query text.
    pub fn query(&self) -> &'static str {
        match self {
            Self::AllEvents => ALL_EVENTS_QUERY,
            Self::LatestEvent => LATEST_EVENT_QUERY,
            Self::EventBySlug => EVENT_BY_SLUG_QUERY,
            Self::Posts => POSTS_QUERY,
            Self::PostBySlug => POST_BY_SLUG_QUERY,
            Self::CategoryBySlug => CATEGORY_BY_SLUG_QUERY,
            Self::CategoryPosts => CATEGORY_POSTS_QUERY,
            Self::Albums => ALBUMS_QUERY,
            Self::AlbumBySlug => ALBUM_BY_SLUG_QUERY,
        }
    }
}
