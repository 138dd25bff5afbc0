//! Persisted user preferences.
//!
//! A small TOML file in the data directory. Opening a store whose file does not
//! exist yet writes the defaults, so later reads always find a file.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Colour theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system setting.
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored preference values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: ThemePreference,
}

/// File-backed preference store.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    preferences: Preferences,
}

impl PreferenceStore {
    /// Opens the store at `path`, writing defaults if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> ClientResult<Self> {
        let path = path.into();
        if !path.exists() {
            let store = Self {
                path,
                preferences: Preferences::default(),
            };
            store.save()?;
            return Ok(store);
        }

        let content = std::fs::read_to_string(&path)?;
        let preferences = toml::from_str(&content).map_err(|e| {
            ClientError::Preferences(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Self { path, preferences })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn theme(&self) -> ThemePreference {
        self.preferences.theme
    }

    /// Sets the theme. Writes only when the value changes; returns whether it did.
    pub fn set_theme(&mut self, theme: ThemePreference) -> ClientResult<bool> {
        if self.preferences.theme == theme {
            return Ok(false);
        }
        self.preferences.theme = theme;
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.preferences)
            .map_err(|e| ClientError::Preferences(format!("failed to serialize: {}", e)))?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), theme = %self.preferences.theme, "saved preferences");
        Ok(())
    }
}
