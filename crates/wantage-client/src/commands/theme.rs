//! `wantage theme [light|dark|system]`.

use std::path::Path;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::print_json;
use crate::error::ClientResult;
use crate::preferences::{PreferenceStore, ThemePreference};

#[derive(Debug, Serialize)]
struct ThemeStatus {
    theme: ThemePreference,
    changed: bool,
}

/// Shows the stored theme, or stores a new one.
pub fn run(
    path: &Path,
    value: Option<ThemePreference>,
    output: OutputFormat,
) -> ClientResult<()> {
    let mut store = PreferenceStore::open(path)?;
    let changed = match value {
        Some(theme) => store.set_theme(theme)?,
        None => false,
    };
    let status = ThemeStatus {
        theme: store.theme(),
        changed,
    };

    match output {
        OutputFormat::Json => print_json(&status),
        OutputFormat::Text => {
            match (value, changed) {
                (Some(theme), true) => println!("Theme set to {}.", theme),
                (Some(theme), false) => println!("Theme is already {}.", theme),
                (None, _) => println!("{}", status.theme),
            }
            Ok(())
        }
    }
}
