//! Client configuration.
//!
//! Settings live in `~/.config/wantage/config.toml` by default:
//!
//! ```toml
//! debug = false
//!
//! [content]
//! project_id = "abc123"
//! dataset = "production"
//! token = "env::SANITY_TOKEN"
//!
//! [display]
//! max_description_length = 160
//! ```
//!
//! The `token` value accepts secret references, see [`crate::secret`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wantage_content::ContentConfig;

/// Environment variable that overrides `content.project_id`.
pub const PROJECT_ID_ENV: &str = "WANTAGE_PROJECT_ID";

/// Configuration for the wantage client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Content store settings.
    pub content: ContentSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

/// Content store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Project identifier.
    pub project_id: Option<String>,

    /// Dataset name.
    pub dataset: String,

    /// Dated API version.
    pub api_version: String,

    /// Read token (supports `pass::` and `env::` prefixes).
    pub token: Option<String>,

    /// Read through the CDN. Ignored when a token is set.
    pub use_cdn: bool,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: "production".to_string(),
            api_version: ContentConfig::DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: true,
            timeout: ContentConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ContentSettings {
    /// Builds the content client configuration.
    ///
    /// The project id comes from `WANTAGE_PROJECT_ID` when set, otherwise from
    /// the file. The token is resolved through [`crate::secret::resolve`].
    pub fn to_content_config(&self) -> Result<ContentConfig, String> {
        let project_id = self
            .project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                format!(
                    "no content project configured. Add to {}:\n  \
                     [content]\n  \
                     project_id = \"your-project-id\"\n\n  \
                     Or set {}",
                    ClientConfig::default_path().display(),
                    PROJECT_ID_ENV
                )
            })?;

        let mut config = ContentConfig::new(project_id, self.dataset.trim())
            .with_api_version(self.api_version.trim())
            .with_cdn(self.use_cdn)
            .with_timeout(Duration::from_secs(self.timeout));

        if let Some(token) = self.resolve_token()? {
            config = config.with_token(token);
        }

        Ok(config)
    }

    /// Resolves the token reference, if any.
    pub(crate) fn resolve_token(&self) -> Result<Option<String>, String> {
        match self.token.as_deref() {
            None => Ok(None),
            Some(raw) => crate::secret::resolve(raw)
                .map(Some)
                .map_err(|e| format!("failed to resolve content token: {}", e)),
        }
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum description length (truncated with ellipsis).
    pub max_description_length: Option<usize>,

    /// Text to show when there are no upcoming events.
    pub no_events_text: String,

    /// Where the theme preference is stored.
    pub preferences_path: Option<PathBuf>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_description_length: None,
            no_events_text: "No upcoming events".to_string(),
            preferences_path: None,
        }
    }
}

impl DisplaySettings {
    /// Returns the preference file path, falling back to the data directory.
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(|| ClientConfig::default_data_dir().join("preferences.toml"))
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Applies environment overrides on top of the file settings.
    pub fn apply_env_overrides(&mut self) {
        self.override_project_id(std::env::var(PROJECT_ID_ENV).ok());
    }

    /// Replaces the project id when `value` is non-blank.
    pub fn override_project_id(&mut self, value: Option<String>) {
        if let Some(project) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!(%project, "project id overridden from environment");
            self.content.project_id = Some(project);
        }
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wantage")
    }

    /// Returns the default data directory path.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wantage")
    }
}
