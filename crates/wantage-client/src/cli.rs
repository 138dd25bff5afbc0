//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::preferences::ThemePreference;

/// wantage - Wantage Road community events, blog and gallery
#[derive(Debug, Parser)]
#[command(name = "wantage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "WANTAGE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON of the view-models.
    Json,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List events: the first is featured, the rest follow
    Events {
        /// Only events that have not finished yet
        #[arg(long)]
        upcoming: bool,

        /// Maximum number of events to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one event in detail
    Event {
        /// Event slug, as in /events/<slug>
        slug: String,
    },

    /// Show the next upcoming event with a countdown (default)
    Next,

    /// List recent blog posts, show one post, or list a category
    Blog {
        /// Post slug, as in /blog/<slug>
        slug: Option<String>,

        /// Category slug, as in /blog/tag/<slug>
        #[arg(long, conflicts_with = "slug")]
        tag: Option<String>,
    },

    /// List photo albums, or show one album
    Gallery {
        /// Album slug
        slug: Option<String>,
    },

    /// Format event times offline, without contacting the content store
    Format {
        /// Start instant (ISO-8601)
        #[arg(long)]
        start: Option<String>,

        /// End instant (ISO-8601)
        #[arg(long)]
        end: Option<String>,

        /// Manual time text that replaces the computed range
        #[arg(long)]
        display: Option<String>,

        /// Event name, used for the calendar export fields
        #[arg(long, default_value = "Event")]
        name: String,
    },

    /// Show or set the colour theme preference
    Theme {
        /// New value; omit to show the current one
        #[arg(value_enum)]
        value: Option<ThemePreference>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
