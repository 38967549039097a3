//! Command implementations for the freelance CLI

pub mod migrate;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use freelance_server::AppConfig;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Load layered config, then apply a `--database-url` override.
fn load_config(path: Option<&Path>, database_url: Option<String>) -> Result<AppConfig> {
    let mut config = AppConfig::load(path).context("Failed to load configuration")?;
    if let Some(url) = database_url {
        config.database.url = url;
    }
    Ok(config)
}
