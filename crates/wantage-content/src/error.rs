//! Error types for content store requests.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// The category of a content error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentErrorCode {
    /// The API token was rejected (401).
    AuthenticationFailed,
    /// The token lacks access to the dataset (403).
    AuthorizationFailed,
    /// Connection failed, timed out, DNS resolution, etc.
    NetworkError,
    /// Too many requests (429).
    RateLimited,
    /// The content API returned a 5xx status.
    ServerError,
    /// The response body could not be decoded.
    InvalidResponse,
    /// The requested document does not exist.
    NotFound,
    /// The query was rejected (400), usually a query syntax error.
    QueryError,
    /// Missing or invalid client configuration.
    ConfigurationError,
}

impl ContentErrorCode {
    /// Returns true if this error is transient and the request may be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError | Self::RateLimited | Self::ServerError
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "authentication_failed",
            Self::AuthorizationFailed => "authorization_failed",
            Self::NetworkError => "network_error",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::InvalidResponse => "invalid_response",
            Self::NotFound => "not_found",
            Self::QueryError => "query_error",
            Self::ConfigurationError => "configuration_error",
        }
    }
}

impl fmt::Display for ContentErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error from the content store client.
#[derive(Debug, Error)]
pub struct ContentError {
    code: ContentErrorCode,
    message: String,
    /// Name of the query that failed, e.g. "all_events".
    query: Option<String>,
    /// Server-suggested wait before retrying.
    retry_after: Option<Duration>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContentError {
    pub fn new(code: ContentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            query: None,
            retry_after: None,
            source: None,
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::AuthenticationFailed, message)
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::AuthorizationFailed, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::NetworkError, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::RateLimited, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::ServerError, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::InvalidResponse, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::NotFound, message)
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::QueryError, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ContentErrorCode::ConfigurationError, message)
    }

    /// Sets the name of the query that failed.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the server-suggested retry delay.
    pub fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn code(&self) -> ContentErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn query_name(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }

    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref query) = self.query {
            write!(f, "[{}] ", query)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
