pub mod config;
pub mod paths;

pub use config::{CatalogConfig, Config, QueryDefaults};
pub use paths::{container_base_path, PathManager};
