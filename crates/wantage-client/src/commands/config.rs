//! Configuration commands.

use std::path::Path;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &ClientConfig, path: &Path) -> ClientResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", path.display());
    println!("{}", toml_str);
    Ok(())
}

/// Validate the configuration.
///
/// Resolves the token reference and checks the content settings the same way
/// the content client does before its first request.
pub fn validate(config: &ClientConfig) -> ClientResult<()> {
    let content = config
        .content
        .to_content_config()
        .map_err(ClientError::Config)?;
    content
        .validate()
        .map_err(|e| ClientError::Config(format!("invalid content settings: {}", e.message())))?;

    if content.token.is_some() {
        println!("Content token resolved.");
    }
    println!(
        "Content: project {} / dataset {} (api v{}, {})",
        content.project_id,
        content.dataset,
        content.api_version,
        if content.uses_cdn() { "cdn" } else { "live" }
    );
    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path(path: &Path) -> ClientResult<()> {
    println!("config: {}", path.display());
    println!("data:   {}", ClientConfig::default_data_dir().display());
    Ok(())
}
