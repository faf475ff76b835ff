pub mod config;
pub mod query;
pub mod stats;

use std::path::PathBuf;

use catalog_config::{Config, PathManager};
use catalog_core::{CatalogSource, JsonFileSource};
use catalog_models::ContentItem;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::debug;

/// Loads the config file if one exists; otherwise falls back to defaults so
/// the tools work out of the box with an explicit --catalog flag.
pub(crate) fn load_config() -> Result<Config> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if !config_file.exists() {
        return Ok(Config::default());
    }

    let config = Config::load_from_file(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid config at {}: {}", config_file.display(), e))?;
    Ok(config)
}

pub(crate) fn resolve_catalog_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = &config.catalog.path {
        return Ok(path.clone());
    }
    let fallback = PathManager::default().catalog_file();
    if fallback.exists() {
        return Ok(fallback);
    }
    Err(eyre!(
        "No catalog file configured. Pass --catalog FILE or set catalog.path \
         in the config file (run 'yemenflix config init' to create one)."
    ))
}

pub(crate) async fn load_catalog(
    flag: Option<PathBuf>,
    config: &Config,
) -> Result<Vec<ContentItem>> {
    let path = resolve_catalog_path(flag, config)?;
    debug!(path = %path.display(), "resolved catalog path");
    let source = JsonFileSource::new(&path);
    Ok(source.fetch_catalog().await?)
}
