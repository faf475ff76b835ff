use catalog_config::{Config, PathManager};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(output),
        ConfigCommands::Init { force } => init_config(force, output),
    }
}

fn show_config(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if !config_file.exists() {
        output.warn(format!(
            "Configuration file not found at: {}",
            config_file.display()
        ));
        output.info("Run 'yemenflix config init' to create one with defaults.");
        return Ok(());
    }

    let config = Config::load_from_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

            table.add_row(vec![
                Cell::new("Config file"),
                Cell::new(config_file.display().to_string()),
            ]);
            table.add_row(vec![
                Cell::new("Catalog path"),
                Cell::new(
                    config
                        .catalog
                        .path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(not set)".to_string()),
                ),
            ]);
            table.add_row(vec![
                Cell::new("Default page size"),
                Cell::new(config.query.default_page_size),
            ]);
            table.add_row(vec![
                Cell::new("Max page size"),
                Cell::new(config.query.max_page_size),
            ]);
            table.add_row(vec![
                Cell::new("Title locale"),
                Cell::new(&config.query.title_locale),
            ]);

            println!("{table}");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "configFile": config_file.display().to_string(),
                "catalogPath": config.catalog.path.as_ref().map(|p| p.display().to_string()),
                "defaultPageSize": config.query.default_page_size,
                "maxPageSize": config.query.max_page_size,
                "titleLocale": config.query.title_locale,
            }));
        }
    }

    Ok(())
}

fn init_config(force: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if config_file.exists() && !force {
        output.error(format!(
            "Configuration file already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!(e))?;
    let config = Config::default();
    config
        .save_to_file(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!(e))?;

    output.success(format!(
        "Wrote default configuration to {}",
        config_file.display()
    ));
    Ok(())
}
