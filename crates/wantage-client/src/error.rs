//! Client error types.

use std::fmt;

use wantage_content::ContentError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Content store request failed.
    Content(ContentError),
    /// IO error.
    Io(std::io::Error),
    /// Preference file could not be read or written.
    Preferences(String),
    /// A requested document does not exist.
    NotFound(String),
    /// Output could not be rendered.
    Output(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Content(err) => write!(f, "content error: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Preferences(msg) => write!(f, "preferences error: {}", msg),
            Self::NotFound(msg) => write!(f, "not found: {}", msg),
            Self::Output(msg) => write!(f, "output error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Content(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ContentError> for ClientError {
    fn from(err: ContentError) -> Self {
        Self::Content(err)
    }
}
