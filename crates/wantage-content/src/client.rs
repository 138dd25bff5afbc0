//! HTTP client for the content query API.
//!
//! Queries go out as `GET {base}/v{version}/data/query/{dataset}?query=...`
//! with parameters JSON-encoded as `$name=...`. Responses wrap the data in a
//! `{"result": ...}` envelope.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;
use wantage_core::ImageUrlBuilder;

use crate::config::ContentConfig;
use crate::documents::{AlbumDocument, CategoryDocument, EventDocument, PostDocument};
use crate::error::{ContentError, ContentResult};
use crate::queries::QueryName;

/// Successful response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: Option<T>,
    /// Server-side query time in milliseconds.
    ms: Option<u64>,
}

/// Error response body.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    description: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl ErrorResponse {
    fn describe(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => {
                let detail = parsed.error.as_ref();
                let description = detail
                    .and_then(|d| d.description.clone())
                    .or(parsed.message)
                    .unwrap_or_else(|| body.trim().to_string());
                match detail.and_then(|d| d.kind.as_deref()) {
                    Some(kind) => format!("{} ({})", description, kind),
                    None => description,
                }
            }
            Err(_) => body.trim().to_string(),
        }
    }
}

/// Content store client.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http_client: reqwest::Client,
    config: ContentConfig,
    images: ImageUrlBuilder,
}

impl ContentClient {
    /// Creates a client after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: ContentConfig) -> ContentResult<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ContentError::configuration("failed to create HTTP client").with_source(e))?;

        let images = ImageUrlBuilder::new(&config.project_id, &config.dataset);

        Ok(Self {
            http_client,
            config,
            images,
        })
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Returns the image URL builder for this project and dataset.
    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    /// Builds the request URL for a query and its parameters.
    ///
    /// Parameter values are JSON-encoded strings.
    pub fn query_url(&self, query: &str, params: &[(&str, &str)]) -> ContentResult<Url> {
        let mut url = self.config.api_base()?;
        url.path_segments_mut()
            .map_err(|_| ContentError::configuration("API base URL cannot have a path"))?
            .pop_if_empty()
            .push(&format!("v{}", self.config.api_version))
            .push("data")
            .push("query")
            .push(&self.config.dataset);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                let encoded = serde_json::Value::String((*value).to_string()).to_string();
                pairs.append_pair(&format!("${}", name), &encoded);
            }
        }

        Ok(url)
    }

    /// Runs a query and decodes its result.
    ///
    /// A `null` result (no matching document) decodes as `None`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        name: QueryName,
        params: &[(&str, &str)],
    ) -> ContentResult<Option<T>> {
        let url = self
            .query_url(name.query(), params)
            .map_err(|e| e.with_query(name.as_str()))?;

        let mut request = self.http_client.get(url);
        if let Some(ref token) = self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            let err = if e.is_timeout() {
                ContentError::network("request timeout")
            } else if e.is_connect() {
                ContentError::network(format!("connection failed: {}", e))
            } else {
                ContentError::network(format!("request failed: {}", e))
            };
            err.with_query(name.as_str())
        })?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let body = response.text().await.map_err(|e| {
            ContentError::network(format!("failed to read response: {}", e)).with_query(name.as_str())
        })?;

        decode_response(status, &body, retry_after).map_err(|e| {
            warn!(query = name.as_str(), %status, error = %e, "content query failed");
            e.with_query(name.as_str())
        })
    }

    async fn fetch_list<T: DeserializeOwned>(&self, name: QueryName) -> ContentResult<Vec<T>> {
        let items: Vec<T> = self.fetch(name, &[]).await?.unwrap_or_default();
        debug!(query = name.as_str(), count = items.len(), "fetched documents");
        Ok(items)
    }

    /// All events with a slug, oldest first.
    pub async fn all_events(&self) -> ContentResult<Vec<EventDocument>> {
        self.fetch_list(QueryName::AllEvents).await
    }

    /// The next event that has not finished.
    pub async fn latest_event(&self) -> ContentResult<Option<EventDocument>> {
        self.fetch(QueryName::LatestEvent, &[]).await
    }

    /// One event by slug, or `None` if there is no such event.
    pub async fn event_by_slug(&self, slug: &str) -> ContentResult<Option<EventDocument>> {
        self.fetch(QueryName::EventBySlug, &[("slug", slug)]).await
    }

    /// The most recent blog posts.
    pub async fn posts(&self) -> ContentResult<Vec<PostDocument>> {
        self.fetch_list(QueryName::Posts).await
    }

    /// One post with its author and categories.
    pub async fn post_by_slug(&self, slug: &str) -> ContentResult<Option<PostDocument>> {
        self.fetch(QueryName::PostBySlug, &[("slug", slug)]).await
    }

    /// One blog category by slug.
    pub async fn category_by_slug(&self, slug: &str) -> ContentResult<Option<CategoryDocument>> {
        self.fetch(QueryName::CategoryBySlug, &[("slug", slug)]).await
    }

    /// Every post filed under the category with this document id.
    pub async fn posts_in_category(&self, category_id: &str) -> ContentResult<Vec<PostDocument>> {
        let posts: Vec<PostDocument> = self
            .fetch(QueryName::CategoryPosts, &[("categoryId", category_id)])
            .await?
            .unwrap_or_default();
        debug!(category = category_id, count = posts.len(), "fetched category posts");
        Ok(posts)
    }

    /// All photo albums.
    pub async fn albums(&self) -> ContentResult<Vec<AlbumDocument>> {
        self.fetch_list(QueryName::Albums).await
    }

    /// One album by slug.
    pub async fn album_by_slug(&self, slug: &str) -> ContentResult<Option<AlbumDocument>> {
        self.fetch(QueryName::AlbumBySlug, &[("slug", slug)]).await
    }
}

/// Maps a response status and body to a decoded result or a classified error.
pub fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    retry_after: Option<Duration>,
) -> ContentResult<Option<T>> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        let mut err = ContentError::rate_limited(format!(
            "rate limit exceeded{}",
            retry_after
                .map(|d| format!(", retry after {} seconds", d.as_secs()))
                .unwrap_or_default()
        ));
        if let Some(delay) = retry_after {
            err = err.with_retry_after(delay);
        }
        return Err(err);
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(ContentError::authentication(format!(
            "token rejected: {}",
            ErrorResponse::describe(body)
        )));
    }

    if status == StatusCode::FORBIDDEN {
        return Err(ContentError::authorization(format!(
            "access denied to dataset: {}",
            ErrorResponse::describe(body)
        )));
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ContentError::not_found(ErrorResponse::describe(body)));
    }

    if status == StatusCode::BAD_REQUEST {
        return Err(ContentError::query(ErrorResponse::describe(body)));
    }

    if !status.is_success() {
        return Err(ContentError::server(format!(
            "API error ({}): {}",
            status,
            ErrorResponse::describe(body)
        )));
    }

    let parsed: QueryResponse<T> = serde_json::from_str(body).map_err(|e| {
        ContentError::invalid_response(format!("failed to parse response: {}", e)).with_source(e)
    })?;

    if let Some(ms) = parsed.ms {
        debug!(ms, "query time");
    }

    Ok(parsed.result)
}
