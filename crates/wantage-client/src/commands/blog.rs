//! `wantage blog [slug] [--tag <category>]`: post cards, one post, or a category.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wantage_content::{ContentClient, normalize_category, normalize_post, normalize_posts};
use wantage_core::post::{EMPTY_POST_BODY, MISSING_AUTHOR_BIO};
use wantage_core::{
    CardVariant, CategoryView, ImageUrlBuilder, PostDetailView, PostRecord, PostView, body_lines,
};

use crate::cli::OutputFormat;
use crate::commands::{ellipsis, join_lines, print_json};
use crate::config::DisplaySettings;
use crate::error::{ClientError, ClientResult};

/// The most recent posts.
pub async fn list(
    client: &ContentClient,
    display: &DisplaySettings,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> ClientResult<()> {
    let records = normalize_posts(&client.posts().await?);
    let views = build_cards(&records, client.images(), now);

    match output {
        OutputFormat::Json => print_json(&views),
        OutputFormat::Text => {
            print!("{}", render(&views, display));
            Ok(())
        }
    }
}

/// One post in full.
pub async fn show(
    client: &ContentClient,
    slug: &str,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> ClientResult<()> {
    let document = client
        .post_by_slug(slug)
        .await?
        .ok_or_else(|| ClientError::NotFound(format!("post \"{}\"", slug)))?;
    let view = PostDetailView::from_record(&normalize_post(&document), client.images(), now);

    match output {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Text => {
            print!("{}", render_post(&view));
            Ok(())
        }
    }
}

/// A category and every post filed under it.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub category: CategoryView,
    pub posts: Vec<PostView>,
}

pub async fn category(
    client: &ContentClient,
    slug: &str,
    display: &DisplaySettings,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> ClientResult<()> {
    let document = client
        .category_by_slug(slug)
        .await?
        .ok_or_else(|| ClientError::NotFound(format!("category \"{}\"", slug)))?;
    let records = normalize_posts(&client.posts_in_category(&document.id).await?);
    let listing = CategoryListing {
        category: CategoryView::from(&normalize_category(&document)),
        posts: records
            .iter()
            .map(|record| PostView::from_record(record, client.images(), CardVariant::Default, now))
            .collect(),
    };

    match output {
        OutputFormat::Json => print_json(&listing),
        OutputFormat::Text => {
            print!("{}", render_category(&listing, display));
            Ok(())
        }
    }
}

/// The newest post gets the featured card, the others the regular one.
pub fn build_cards(
    records: &[PostRecord],
    images: &ImageUrlBuilder,
    now: DateTime<Utc>,
) -> Vec<PostView> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let variant = if index == 0 {
                CardVariant::Featured
            } else {
                CardVariant::Default
            };
            PostView::from_record(record, images, variant, now)
        })
        .collect()
}

pub fn render(posts: &[PostView], display: &DisplaySettings) -> String {
    if posts.is_empty() {
        return "No posts yet\n".to_string();
    }
    join_lines(card_lines(posts, display))
}

fn card_lines(posts: &[PostView], display: &DisplaySettings) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, post) in posts.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", post.title, post.published));
        if !post.excerpt.is_empty() {
            lines.push(format!(
                "  {}",
                ellipsis(&post.excerpt, display.max_description_length)
            ));
        }
        lines.push(format!("  {}", post.url));
    }
    lines
}

pub fn render_post(post: &PostDetailView) -> String {
    let mut lines = vec![post.title.clone()];
    match &post.author {
        Some(author) => lines.push(format!("{} | {}", post.published, author.name)),
        None => lines.push(post.published.to_string()),
    }
    if !post.categories.is_empty() {
        let tags: Vec<String> = post
            .categories
            .iter()
            .map(|category| format!("{} ({})", category.title, category.url))
            .collect();
        lines.push(format!("Tags: {}", tags.join(", ")));
    }
    if let Some(url) = &post.image_url {
        lines.push(format!("Image: {}", url));
    }

    lines.push(String::new());
    if post.body.is_empty() {
        lines.push(EMPTY_POST_BODY.to_string());
    } else {
        lines.extend(body_lines(&post.body));
    }

    if let Some(author) = &post.author {
        lines.push(String::new());
        match &author.title {
            Some(title) => lines.push(format!("About the author: {}, {}", author.name, title)),
            None => lines.push(format!("About the author: {}", author.name)),
        }
        if author.bio.is_empty() {
            lines.push(MISSING_AUTHOR_BIO.to_string());
        } else {
            lines.extend(body_lines(&author.bio));
        }
    }

    join_lines(lines)
}

pub fn render_category(listing: &CategoryListing, display: &DisplaySettings) -> String {
    let category = &listing.category;
    let mut lines = vec![category.title.clone()];
    if let Some(description) = &category.description {
        lines.push(description.clone());
    }
    lines.push(String::new());
    if listing.posts.is_empty() {
        lines.push(format!(
            "There are no posts in the \"{}\" category yet.",
            category.title
        ));
    } else {
        lines.extend(card_lines(&listing.posts, display));
    }
    join_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wantage_core::{Author, BodyBlock, Category, ImageSource};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 5, 12, 0, 0).unwrap()
    }

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new("proj", "production")
    }

    fn records() -> Vec<PostRecord> {
        let mut first = PostRecord::new("p1", "Bloom results")
            .with_slug("bloom-results")
            .with_published_at("2025-07-02T12:00:00Z");
        first.image = Some(ImageSource::from_ref("image-abc-1600x900-jpg"));
        first.excerpt = Some("Congratulations to every garden on the road.".into());

        let mut second = PostRecord::new("p2", "Road closure notice");
        second.image = Some(ImageSource::from_ref("image-def-1600x900-jpg"));
        vec![first, second]
    }

    #[test]
    fn first_card_is_featured() {
        let cards = build_cards(&records(), &images(), now());
        assert!(cards[0].image_url.ends_with("?w=800&h=450&fit=crop"));
        assert!(cards[1].image_url.ends_with("?w=400&h=300&fit=crop"));
    }

    #[test]
    fn render_cards() {
        let cards = build_cards(&records(), &images(), now());
        let display = DisplaySettings {
            max_description_length: Some(24),
            ..Default::default()
        };
        insta::assert_snapshot!(render(&cards, &display), @r"
        Bloom results (3 days ago)
          Congratulations to ever…
          /blog/bloom-results

        Road closure notice (Date unavailable)
          #
        ");
    }

    #[test]
    fn no_posts() {
        assert_eq!(render(&[], &DisplaySettings::default()), "No posts yet\n");
    }

    mod post {
        use super::*;

        #[test]
        fn full_post() {
            let mut author = Author::new("Sam Patel");
            author.title = Some("Newsletter editor".into());
            let mut record = PostRecord::new("p1", "Bloom results")
                .with_slug("bloom-results")
                .with_published_at("2025-07-02T12:00:00Z")
                .with_body(BodyBlock::paragraph("The results are in!"))
                .with_body(BodyBlock::ListItem {
                    text: "Gold: number 12".into(),
                    ordered: false,
                })
                .with_author(author)
                .with_category(Category::new("c1", "Gardening").with_slug("gardening"))
                .with_category(Category::new("c2", "Events").with_slug("events"));
            record.image = Some(ImageSource::from_ref("image-abc-1600x900-jpg"));

            let view = PostDetailView::from_record(&record, &images(), now());
            insta::assert_snapshot!(render_post(&view), @r"
            Bloom results
            3 days ago | Sam Patel
            Tags: Gardening (/blog/tag/gardening), Events (/blog/tag/events)
            Image: https://cdn.sanity.io/images/proj/production/abc-1600x900.jpg?w=800&h=450&fit=crop

            The results are in!

              - Gold: number 12

            About the author: Sam Patel, Newsletter editor
            Author bio not available.
            ");
        }

        #[test]
        fn empty_post() {
            let view = PostDetailView::from_record(&PostRecord::new("p2", "Draft"), &images(), now());
            assert_eq!(
                render_post(&view),
                "Draft\nDate unavailable\n\nThis post has no content.\n"
            );
        }
    }

    mod category {
        use super::*;

        fn listing(posts: Vec<PostView>) -> CategoryListing {
            let mut category = Category::new("c1", "Gardening").with_slug("gardening");
            category.description = Some("Front gardens and the bloom competition.".into());
            CategoryListing {
                category: CategoryView::from(&category),
                posts,
            }
        }

        #[test]
        fn posts_in_category() {
            let posts = records()
                .iter()
                .map(|r| PostView::from_record(r, &images(), CardVariant::Default, now()))
                .collect();
            insta::assert_snapshot!(render_category(&listing(posts), &DisplaySettings::default()), @r"
            Gardening
            Front gardens and the bloom competition.

            Bloom results (3 days ago)
              Congratulations to every garden on the road.
              /blog/bloom-results

            Road closure notice (Date unavailable)
              #
            ");
        }

        #[test]
        fn empty_category() {
            let text = render_category(&listing(Vec::new()), &DisplaySettings::default());
            assert!(text.ends_with("There are no posts in the \"Gardening\" category yet.\n"));
        }

        #[test]
        fn json_shape() {
            let json = serde_json::to_value(listing(Vec::new())).unwrap();
            assert_eq!(json["category"]["url"], "/blog/tag/gardening");
            assert_eq!(json["posts"], serde_json::json!([]));
        }
    }
}
