//! Content store client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{ContentError, ContentResult};

/// Configuration for [`ContentClient`](crate::ContentClient).
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Project identifier, the first label of the API host.
    pub project_id: String,

    /// Dataset name, e.g. `production`.
    pub dataset: String,

    /// Dated API version, `YYYY-MM-DD`.
    pub api_version: String,

    /// Read token for private datasets or drafts.
    pub token: Option<String>,

    /// Query the edge cache (`apicdn`) instead of the live API.
    ///
    /// Ignored when a token is set: authenticated requests always go to the
    /// live API.
    pub use_cdn: bool,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string for API requests.
    pub user_agent: String,

    /// Overrides the API base URL. Used by tests and proxies.
    pub base_url: Option<Url>,
}

impl ContentConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default API version.
    pub const DEFAULT_API_VERSION: &'static str = "2025-01-01";

    /// Creates a configuration for a project and dataset.
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: true,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("wantage/{}", env!("CARGO_PKG_VERSION")),
            base_url: None,
        }
    }

    /// Sets the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the read token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets whether to use the edge cache.
    pub fn with_cdn(mut self, use_cdn: bool) -> Self {
        self.use_cdn = use_cdn;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets an explicit API base URL.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Returns true if requests go to the edge cache.
    pub fn uses_cdn(&self) -> bool {
        self.use_cdn && self.token.is_none()
    }

    /// Returns the API base URL, e.g. `https://abc123.apicdn.sanity.io`.
    pub fn api_base(&self) -> ContentResult<Url> {
        if let Some(ref base) = self.base_url {
            return Ok(base.clone());
        }
        let host = if self.uses_cdn() { "apicdn" } else { "api" };
        let raw = format!("https://{}.{}.sanity.io", self.project_id, host);
        Url::parse(&raw).map_err(|e| {
            ContentError::configuration(format!("invalid API host {}", raw)).with_source(e)
        })
    }

    /// Checks that the configuration can produce valid requests.
    pub fn validate(&self) -> ContentResult<()> {
        if self.project_id.is_empty() {
            return Err(ContentError::configuration("project_id is required"));
        }
        if !is_identifier(&self.project_id) {
            return Err(ContentError::configuration(
                "project_id may only contain lowercase letters, digits and dashes",
            ));
        }
        if self.dataset.is_empty() {
            return Err(ContentError::configuration("dataset is required"));
        }
        if !is_identifier(&self.dataset.replace('_', "-")) {
            return Err(ContentError::configuration(
                "dataset may only contain lowercase letters, digits, dashes and underscores",
            ));
        }
        if !is_api_version(&self.api_version) {
            return Err(ContentError::configuration(format!(
                "api_version must be a date like 2025-01-01 or \"1\", got {:?}",
                self.api_version
            )));
        }
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ContentError::configuration("token is set but empty"));
        }
        if self.timeout.is_zero() {
            return Err(ContentError::configuration("timeout must be greater than zero"));
        }
        Ok(())
    }
}

fn is_identifier(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn is_api_version(value: &str) -> bool {
    value == "1" || chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentErrorCode;

    #[test]
    fn defaults() {
        let config = ContentConfig::new("abc123", "production");
        assert_eq!(config.api_version, ContentConfig::DEFAULT_API_VERSION);
        assert!(config.use_cdn);
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("wantage/"));
    }

    #[test]
    fn builder_methods() {
        let config = ContentConfig::new("abc123", "staging")
            .with_api_version("2024-06-01")
            .with_cdn(false)
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");
        assert_eq!(config.api_version, "2024-06-01");
        assert!(!config.use_cdn);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn api_base_host() {
        let cdn = ContentConfig::new("abc123", "production");
        assert_eq!(cdn.api_base().unwrap().as_str(), "https://abc123.apicdn.sanity.io/");

        let live = cdn.clone().with_cdn(false);
        assert_eq!(live.api_base().unwrap().as_str(), "https://abc123.api.sanity.io/");

        // A token forces the live API.
        let authed = ContentConfig::new("abc123", "production").with_token("sk-secret");
        assert!(!authed.uses_cdn());
        assert_eq!(authed.api_base().unwrap().host_str(), Some("abc123.api.sanity.io"));
    }

    #[test]
    fn base_url_override() {
        let base = Url::parse("http://127.0.0.1:9999").unwrap();
        let config = ContentConfig::new("abc123", "production").with_base_url(base.clone());
        assert_eq!(config.api_base().unwrap(), base);
    }

    mod validate {
        use super::*;

        fn code(config: &ContentConfig) -> Option<ContentErrorCode> {
            config.validate().err().map(|e| e.code())
        }

        #[test]
        fn valid() {
            assert!(ContentConfig::new("abc123", "production").validate().is_ok());
            assert!(ContentConfig::new("abc123", "my_dataset").validate().is_ok());
            assert!(
                ContentConfig::new("abc123", "production")
                    .with_api_version("1")
                    .validate()
                    .is_ok()
            );
        }

        #[test]
        fn invalid() {
            let bad = [
                ContentConfig::new("", "production"),
                ContentConfig::new("ABC", "production"),
                ContentConfig::new("abc", ""),
                ContentConfig::new("abc", "prod.uction"),
                ContentConfig::new("abc", "production").with_api_version("v2021"),
                ContentConfig::new("abc", "production").with_token("  "),
                ContentConfig::new("abc", "production").with_timeout(Duration::ZERO),
            ];
            for config in &bad {
                assert_eq!(code(config), Some(ContentErrorCode::ConfigurationError), "{config:?}");
            }
        }
    }
}
