//! wantage CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use wantage_core::{EventTimeInput, TracingConfig, init_tracing};

use wantage_client::cli::{Cli, Command, ConfigAction};
use wantage_client::commands::{self, events::ListOptions};
use wantage_client::config::ClientConfig;
use wantage_client::error::{ClientError, ClientResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_path) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let tracing_config = TracingConfig::for_cli(cli.debug || config.debug, cli.json);
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match run(cli, config, config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> ClientResult<(ClientConfig, PathBuf)> {
    let (mut config, path) = match cli.config {
        Some(ref path) => (
            ClientConfig::load_from(path).map_err(ClientError::Config)?,
            path.clone(),
        ),
        None => (
            ClientConfig::load().map_err(ClientError::Config)?,
            ClientConfig::default_path(),
        ),
    };
    config.apply_env_overrides();
    Ok((config, path))
}

async fn run(cli: Cli, config: ClientConfig, config_path: PathBuf) -> ClientResult<()> {
    let output = cli.output_format();
    let now = Utc::now();

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(&config_path),
        },
        Some(Command::Format {
            start,
            end,
            display,
            name,
        }) => {
            let input =
                EventTimeInput::from_fields(start.as_deref(), end.as_deref(), display.as_deref());
            commands::format::run(&name, &input, output)
        }
        Some(Command::Theme { value }) => {
            commands::theme::run(&config.display.preferences_path(), value, output)
        }
        Some(Command::Events { upcoming, limit }) => {
            let client = commands::connect(&config)?;
            let options = ListOptions {
                upcoming_only: upcoming,
                limit,
            };
            commands::events::run(&client, &config.display, options, output, now).await
        }
        Some(Command::Event { slug }) => {
            let client = commands::connect(&config)?;
            commands::event::run(&client, &slug, output, now).await
        }
        Some(Command::Blog { slug, tag }) => {
            let client = commands::connect(&config)?;
            match (slug, tag) {
                (Some(slug), _) => commands::blog::show(&client, &slug, output, now).await,
                (None, Some(tag)) => {
                    commands::blog::category(&client, &tag, &config.display, output, now).await
                }
                (None, None) => commands::blog::list(&client, &config.display, output, now).await,
            }
        }
        Some(Command::Gallery { slug }) => {
            let client = commands::connect(&config)?;
            match slug {
                Some(slug) => commands::gallery::show(&client, &slug, output).await,
                None => commands::gallery::list(&client, &config.display, output).await,
            }
        }
        Some(Command::Next) | None => {
            let client = commands::connect(&config)?;
            commands::next::run(&client, &config.display, output, now).await
        }
    }
}
