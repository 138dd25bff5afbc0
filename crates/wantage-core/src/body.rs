//! Rich-text bodies: post bodies, event long descriptions and author bios.
//!
//! The content store keeps these as typed blocks. [`BodyBlock`] is the subset
//! the toolkit can show; [`render_body`] resolves image blocks to CDN URLs.

use serde::{Deserialize, Serialize};

use crate::event::non_blank;
use crate::image::{ImageRequest, ImageSource, ImageUrlBuilder};

/// Alt text for body images that have none.
pub const BODY_IMAGE_ALT: &str = "Blog image";

/// One block of rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Quote { text: String },
    ListItem { text: String, ordered: bool },
    Image { image: ImageSource },
}

impl BodyBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }
}

/// Returns the text of the first plain paragraph.
pub fn first_paragraph(blocks: &[BodyBlock]) -> Option<&str> {
    blocks.iter().find_map(|block| match block {
        BodyBlock::Paragraph { text } => non_blank(Some(text.as_str())),
        _ => None,
    })
}

/// A body block ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockView {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Quote {
        text: String,
    },
    ListItem {
        text: String,
        ordered: bool,
    },
    Image {
        url: String,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

/// Resolves a body for display. Images without a usable asset are dropped.
pub fn render_body(blocks: &[BodyBlock], images: &ImageUrlBuilder) -> Vec<BlockView> {
    blocks
        .iter()
        .filter_map(|block| match block {
            BodyBlock::Heading { level, text } => Some(BlockView::Heading {
                level: *level,
                text: text.clone(),
            }),
            BodyBlock::Paragraph { text } => Some(BlockView::Paragraph { text: text.clone() }),
            BodyBlock::Quote { text } => Some(BlockView::Quote { text: text.clone() }),
            BodyBlock::ListItem { text, ordered } => Some(BlockView::ListItem {
                text: text.clone(),
                ordered: *ordered,
            }),
            BodyBlock::Image { image } => match images.url(image, &ImageRequest::inline()) {
                Ok(url) => Some(BlockView::Image {
                    url,
                    alt: non_blank(image.alt.as_deref())
                        .unwrap_or(BODY_IMAGE_ALT)
                        .to_string(),
                    caption: non_blank(image.caption.as_deref()).map(str::to_string),
                }),
                Err(err) => {
                    tracing::debug!(%err, "skipping body image");
                    None
                }
            },
        })
        .collect()
}

/// Lays a body out as terminal lines.
///
/// Blocks are separated by a blank line; consecutive list items are not.
/// Ordered items are numbered from 1 within each run.
pub fn body_lines(blocks: &[BlockView]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut number = 0;
    let mut previous_was_item = false;

    for block in blocks {
        let is_item = matches!(block, BlockView::ListItem { .. });
        if !lines.is_empty() && !(is_item && previous_was_item) {
            lines.push(String::new());
        }
        if !is_item {
            number = 0;
        }
        match block {
            BlockView::Heading { text, .. } => {
                lines.push(text.clone());
                lines.push("-".repeat(text.chars().count()));
            }
            BlockView::Paragraph { text } => lines.push(text.clone()),
            BlockView::Quote { text } => lines.push(format!("> {}", text)),
            BlockView::ListItem { text, ordered: true } => {
                number += 1;
                lines.push(format!("  {}. {}", number, text));
            }
            BlockView::ListItem { text, ordered: false } => lines.push(format!("  - {}", text)),
            BlockView::Image { url, alt, caption } => {
                lines.push(format!("[{}] {}", alt, url));
                if let Some(caption) = caption {
                    lines.push(format!("  {}", caption));
                }
            }
        }
        previous_was_item = is_item;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new("proj", "production")
    }

    #[test]
    fn first_paragraph_skips_headings_and_blanks() {
        let blocks = vec![
            BodyBlock::Heading {
                level: 2,
                text: "Results".into(),
            },
            BodyBlock::paragraph("   "),
            BodyBlock::paragraph("The judges have spoken."),
        ];
        assert_eq!(first_paragraph(&blocks), Some("The judges have spoken."));
        assert_eq!(first_paragraph(&[]), None);
    }

    #[test]
    fn images_use_inline_size() {
        let blocks = vec![
            BodyBlock::Image {
                image: ImageSource::from_ref("image-abc-2000x1500-jpg").with_caption("Front gardens"),
            },
            BodyBlock::Image {
                image: ImageSource::from_ref("not-an-asset"),
            },
        ];
        let views = render_body(&blocks, &images());
        assert_eq!(
            views,
            vec![BlockView::Image {
                url: "https://cdn.sanity.io/images/proj/production/abc-2000x1500.jpg?w=1200".into(),
                alt: BODY_IMAGE_ALT.into(),
                caption: Some("Front gardens".into()),
            }]
        );
    }

    #[test]
    fn lines_for_mixed_body() {
        let blocks = vec![
            BodyBlock::Heading {
                level: 2,
                text: "Winners".into(),
            },
            BodyBlock::paragraph("Three gardens stood out."),
            BodyBlock::ListItem {
                text: "Number 12".into(),
                ordered: true,
            },
            BodyBlock::ListItem {
                text: "Number 40".into(),
                ordered: true,
            },
            BodyBlock::Quote {
                text: "Best year yet".into(),
            },
            BodyBlock::Image {
                image: ImageSource::from_url("https://example.org/a.jpg").with_alt("Roses"),
            },
        ];
        let text = body_lines(&render_body(&blocks, &images())).join("\n");
        insta::assert_snapshot!(text, @r"
        Winners
        -------

        Three gardens stood out.

          1. Number 12
          2. Number 40

        > Best year yet

        [Roses] https://example.org/a.jpg?w=1200
        ");
    }

    #[test]
    fn json_is_tagged() {
        let json = serde_json::to_value(BlockView::Paragraph { text: "Hi".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "paragraph", "text": "Hi"}));
    }
}
