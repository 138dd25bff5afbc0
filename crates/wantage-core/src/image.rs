//! Image CDN URLs for content-store assets.
//!
//! Images come off documents in one of two shapes: an asset reference
//! (`image-<id>-<width>x<height>-<format>`) or, when the query dereferences the
//! asset, an absolute URL. [`ImageUrlBuilder`] turns either into a sized CDN URL.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ImageRefError;

/// Base URL of the image CDN.
pub const IMAGE_CDN_BASE: &str = "https://cdn.sanity.io/images";

/// Image shown when an event or post has none.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

static ASSET_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^image-([A-Za-z0-9]+)-(\d+)x(\d+)-([A-Za-z0-9]+)$")
        .expect("Invalid asset reference regex")
});

/// A decoded image asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAssetRef {
    /// Content hash identifying the asset.
    pub id: String,
    /// Original width in pixels.
    pub width: u32,
    /// Original height in pixels.
    pub height: u32,
    /// File extension, e.g. `jpg`.
    pub format: String,
}

impl ImageAssetRef {
    /// Decodes an `image-<id>-<width>x<height>-<format>` reference.
    ///
    /// # Errors
    ///
    /// Returns [`ImageRefError::Unrecognised`] if the reference does not have
    /// that shape.
    pub fn parse(reference: &str) -> Result<Self, ImageRefError> {
        let caps = ASSET_REF_REGEX
            .captures(reference.trim())
            .ok_or_else(|| ImageRefError::unrecognised(reference))?;

        let width = caps[2]
            .parse()
            .map_err(|_| ImageRefError::unrecognised(reference))?;
        let height = caps[3]
            .parse()
            .map_err(|_| ImageRefError::unrecognised(reference))?;

        Ok(Self {
            id: caps[1].to_string(),
            width,
            height,
            format: caps[4].to_string(),
        })
    }

    /// Returns the CDN file name, e.g. `abc123-1200x800.jpg`.
    pub fn file_name(&self) -> String {
        format!("{}-{}x{}.{}", self.id, self.width, self.height, self.format)
    }
}

/// An image attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Asset reference, when the asset was not dereferenced.
    pub asset_ref: Option<String>,
    /// Absolute asset URL, when the query dereferenced it.
    pub url: Option<String>,
    /// Alternative text.
    pub alt: Option<String>,
    /// Caption shown under the image.
    pub caption: Option<String>,
}

impl ImageSource {
    /// Creates a source from an asset reference.
    pub fn from_ref(reference: impl Into<String>) -> Self {
        Self {
            asset_ref: Some(reference.into()),
            ..Default::default()
        }
    }

    /// Creates a source from an absolute URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Builder method to set the alternative text.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Builder method to set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Returns true if the source points at an asset.
    pub fn has_asset(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.asset_ref) || present(&self.url)
    }
}

/// How the CDN fits an image into the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Clip,
    Crop,
    Fill,
    FillMax,
    Max,
    Scale,
    Min,
}

impl ImageFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Crop => "crop",
            Self::Fill => "fill",
            Self::FillMax => "fillmax",
            Self::Max => "max",
            Self::Scale => "scale",
            Self::Min => "min",
        }
    }
}

impl fmt::Display for ImageFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size options for an image URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageRequest {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: Option<ImageFit>,
}

impl ImageRequest {
    /// Original size, no transformation.
    pub fn original() -> Self {
        Self::default()
    }

    /// Featured card image, 800×450 cropped.
    pub fn featured_card() -> Self {
        Self::sized(800, 450).with_fit(ImageFit::Crop)
    }

    /// Event page hero image, 1200×675.
    pub fn hero() -> Self {
        Self::sized(1200, 675)
    }

    /// Square author portrait.
    pub fn avatar(size: u32) -> Self {
        Self::sized(size, size)
    }

    /// Regular card image, 400×300 cropped.
    pub fn card() -> Self {
        Self::sized(400, 300).with_fit(ImageFit::Crop)
    }

    /// Square gallery thumbnail.
    pub fn thumbnail() -> Self {
        Self::sized(400, 400)
    }

    /// Inline body image, 1200 wide.
    pub fn inline() -> Self {
        Self {
            width: Some(1200),
            ..Default::default()
        }
    }

    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            fit: None,
        }
    }

    #[must_use]
    pub fn with_fit(mut self, fit: ImageFit) -> Self {
        self.fit = Some(fit);
        self
    }

    fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(width) = self.width {
            params.push(format!("w={}", width));
        }
        if let Some(height) = self.height {
            params.push(format!("h={}", height));
        }
        if let Some(fit) = self.fit {
            params.push(format!("fit={}", fit));
        }
        params.join("&")
    }
}

/// Builds CDN URLs for one project and dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Builds the URL for an image at the requested size.
    ///
    /// A dereferenced absolute URL wins over an asset reference.
    ///
    /// # Errors
    ///
    /// Returns [`ImageRefError::MissingAsset`] when the source has neither
    /// and [`ImageRefError::Unrecognised`] when the reference cannot be decoded.
    pub fn url(&self, source: &ImageSource, request: &ImageRequest) -> Result<String, ImageRefError> {
        let base = match (source.url.as_deref(), source.asset_ref.as_deref()) {
            (Some(url), _) if !url.trim().is_empty() => url.trim().to_string(),
            (_, Some(reference)) if !reference.trim().is_empty() => {
                let asset = ImageAssetRef::parse(reference)?;
                format!(
                    "{}/{}/{}/{}",
                    IMAGE_CDN_BASE,
                    urlencoding::encode(&self.project_id),
                    urlencoding::encode(&self.dataset),
                    asset.file_name()
                )
            }
            _ => return Err(ImageRefError::MissingAsset),
        };

        let query = request.query_string();
        if query.is_empty() {
            Ok(base)
        } else if base.contains('?') {
            Ok(format!("{}&{}", base, query))
        } else {
            Ok(format!("{}?{}", base, query))
        }
    }

    /// Builds the URL, or returns `fallback` when the image is missing or broken.
    pub fn url_or(&self, source: Option<&ImageSource>, request: &ImageRequest, fallback: &str) -> String {
        let Some(source) = source else {
            return fallback.to_string();
        };
        match self.url(source, request) {
            Ok(url) => url,
            Err(err) => {
                tracing::debug!(%err, "using fallback image");
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("abc123", "production")
    }

    mod asset_ref {
        use super::*;

        #[test]
        fn parses_reference() {
            let asset = ImageAssetRef::parse("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg").unwrap();
            assert_eq!(asset.id, "Tb9Ew8CXIwaY6R1kjMvI0uRR");
            assert_eq!(asset.width, 2000);
            assert_eq!(asset.height, 3000);
            assert_eq!(asset.format, "jpg");
            assert_eq!(asset.file_name(), "Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg");
        }

        #[test]
        fn rejects_other_shapes() {
            for bad in ["", "file-abc-pdf", "image-abc-2000-jpg", "image-abc-axb-png", "image--10x10-png"] {
                assert_eq!(
                    ImageAssetRef::parse(bad),
                    Err(ImageRefError::unrecognised(bad)),
                    "{bad}"
                );
            }
        }
    }

    mod urls {
        use super::*;

        #[test]
        fn reference_to_cdn_url() {
            let source = ImageSource::from_ref("image-deadbeef-1200x800-png");
            let url = builder().url(&source, &ImageRequest::featured_card()).unwrap();
            assert_eq!(
                url,
                "https://cdn.sanity.io/images/abc123/production/deadbeef-1200x800.png?w=800&h=450&fit=crop"
            );
        }

        #[test]
        fn hero_and_avatar_sizes() {
            let source = ImageSource::from_ref("image-deadbeef-4000x2250-jpg");
            let hero = builder().url(&source, &ImageRequest::hero()).unwrap();
            assert_eq!(
                hero,
                "https://cdn.sanity.io/images/abc123/production/deadbeef-4000x2250.jpg?w=1200&h=675"
            );
            let avatar = builder().url(&source, &ImageRequest::avatar(64)).unwrap();
            assert!(avatar.ends_with("?w=64&h=64"));
        }

        #[test]
        fn original_has_no_query() {
            let source = ImageSource::from_ref("image-deadbeef-1200x800-png");
            let url = builder().url(&source, &ImageRequest::original()).unwrap();
            assert_eq!(url, "https://cdn.sanity.io/images/abc123/production/deadbeef-1200x800.png");
        }

        #[test]
        fn absolute_url_passes_through() {
            let source = ImageSource::from_url("https://cdn.sanity.io/images/p/d/x-10x10.jpg");
            let url = builder().url(&source, &ImageRequest::thumbnail()).unwrap();
            assert_eq!(url, "https://cdn.sanity.io/images/p/d/x-10x10.jpg?w=400&h=400");

            let source = ImageSource::from_url("https://example.org/a.jpg?v=2");
            let url = builder().url(&source, &ImageRequest::inline()).unwrap();
            assert_eq!(url, "https://example.org/a.jpg?v=2&w=1200");
        }

        #[test]
        fn missing_asset() {
            assert_eq!(
                builder().url(&ImageSource::default(), &ImageRequest::card()),
                Err(ImageRefError::MissingAsset)
            );
            assert!(!ImageSource::from_url("  ").has_asset());
        }

        #[test]
        fn fallback_on_missing_or_broken() {
            let b = builder();
            assert_eq!(b.url_or(None, &ImageRequest::card(), PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
            let broken = ImageSource::from_ref("file-abc-pdf");
            assert_eq!(
                b.url_or(Some(&broken), &ImageRequest::card(), PLACEHOLDER_IMAGE),
                PLACEHOLDER_IMAGE
            );
        }
    }
}
