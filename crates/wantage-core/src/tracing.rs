//! Logging setup shared by the wantage crates.
//!
//! Logs go to stderr so that stdout only carries command output, which keeps
//! `--json` output parseable even with `--debug`.
//!
//! ```ignore
//! use wantage_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::for_cli(debug, json))?;
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to set global subscriber
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// Failed to parse env filter directive
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// One human-readable line per event.
    #[default]
    Compact,
    /// One JSON object per event, for `--json` runs.
    Json,
}

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for our crates when `RUST_LOG` is not set
    pub default_level: Level,
    pub output_format: TracingOutputFormat,
    /// Include file, line and module path
    pub include_location: bool,
    pub include_timestamp: bool,
    /// Custom env filter directive, used instead of `RUST_LOG` and the default level
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::cli_quiet()
    }
}

impl TracingConfig {
    /// Debug level with source locations, for `--debug`.
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            output_format: TracingOutputFormat::Compact,
            include_location: true,
            include_timestamp: false,
            env_filter: None,
        }
    }

    /// Only warnings, without timestamps.
    #[must_use]
    pub fn cli_quiet() -> Self {
        Self {
            default_level: Level::WARN,
            output_format: TracingOutputFormat::Compact,
            include_location: false,
            include_timestamp: false,
            env_filter: None,
        }
    }

    /// Warnings as JSON lines with timestamps.
    #[must_use]
    pub fn json() -> Self {
        Self {
            default_level: Level::WARN,
            output_format: TracingOutputFormat::Json,
            include_location: false,
            include_timestamp: true,
            env_filter: None,
        }
    }

    /// Picks the preset for the CLI's `--debug` and `--json` flags.
    #[must_use]
    pub fn for_cli(debug: bool, json: bool) -> Self {
        match (debug, json) {
            (false, false) => Self::cli_quiet(),
            (true, false) => Self::cli_debug(),
            (false, true) => Self::json(),
            (true, true) => Self {
                default_level: Level::DEBUG,
                include_location: true,
                ..Self::json()
            },
        }
    }

    /// Set the default log level
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Set a custom env filter directive
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter(&self) -> Result<EnvFilter, TracingError> {
        match self.env_filter {
            Some(ref directive) => Ok(EnvFilter::try_new(directive)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(self.default_level)))),
        }
    }
}

/// Directive used when `RUST_LOG` is unset: our crates at `level`, everything else at warn.
fn default_directive(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    format!("warn,wantage_core={level},wantage_content={level},wantage_client={level}")
}

/// Initialize tracing with the given configuration.
///
/// Call once at startup. `RUST_LOG` overrides the default level.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set or if
/// the env filter directive is invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.filter()?;
    let location = config.include_location;

    let layer = match config.output_format {
        TracingOutputFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_file(location)
                .with_line_number(location)
                .with_target(location);
            if config.include_timestamp {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        TracingOutputFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_file(location)
            .with_line_number(location)
            .with_target(true)
            .boxed(),
    };

    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(filter).with(layer))?;
    Ok(())
}
