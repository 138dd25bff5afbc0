//! Command-line front end for the Wantage Road community site content
//!
//! This crate provides the `wantage` command-line interface: it loads the
//! configuration, queries the content store and prints the same view-models
//! the site renders, as text or JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod preferences;
pub mod secret;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
pub use preferences::{PreferenceStore, ThemePreference};
