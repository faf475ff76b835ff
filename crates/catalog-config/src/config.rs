use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub query: QueryDefaults,
}

/// Where the catalog data lives.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file (an array of content items).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Defaults applied when a query does not spell out its own window or when
/// the collation locale is not overridden per call.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QueryDefaults {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
    /// BCP-47 locale used for title collation. The catalog is primarily
    /// Arabic, so `ar` is the default.
    #[serde(default = "default_title_locale")]
    pub title_locale: String,
}

fn default_page_size() -> u32 {
    24
}

fn default_max_page_size() -> u32 {
    100
}

fn default_title_locale() -> String {
    "ar".to_string()
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            title_locale: default_title_locale(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.query.default_page_size == 0 {
            return Err(anyhow::anyhow!("default_page_size must be at least 1"));
        }
        if self.query.max_page_size == 0 {
            return Err(anyhow::anyhow!("max_page_size must be at least 1"));
        }
        if self.query.default_page_size > self.query.max_page_size {
            return Err(anyhow::anyhow!(
                "default_page_size ({}) exceeds max_page_size ({})",
                self.query.default_page_size,
                self.query.max_page_size
            ));
        }
        if self.query.title_locale.trim().is_empty() {
            return Err(anyhow::anyhow!("title_locale cannot be empty"));
        }
        Ok(())
    }
}
