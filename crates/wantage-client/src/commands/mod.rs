//! Subcommand implementations.
//!
//! Content commands split into a fetch step and a pure `render` step so the
//! text output can be tested without a content store.

pub mod blog;
pub mod config;
pub mod event;
pub mod events;
pub mod format;
pub mod gallery;
pub mod next;
pub mod theme;

use std::borrow::Cow;

use serde::Serialize;
use wantage_content::ContentClient;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Builds a content client from the configuration.
pub fn connect(config: &ClientConfig) -> ClientResult<ContentClient> {
    let content_config = config
        .content
        .to_content_config()
        .map_err(ClientError::Config)?;
    Ok(ContentClient::new(content_config)?)
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ClientResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ClientError::Output(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Joins rendered lines, ending with a newline.
pub(crate) fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Truncates `text` to at most `max` characters, ending with an ellipsis.
pub(crate) fn ellipsis(text: &str, max: Option<usize>) -> Cow<'_, str> {
    match max {
        Some(max) if text.chars().count() > max => {
            let kept: String = text.chars().take(max.saturating_sub(1)).collect();
            Cow::Owned(format!("{}…", kept.trim_end()))
        }
        _ => Cow::Borrowed(text),
    }
}
