use std::path::PathBuf;

use catalog_models::{ContentStatus, ContentType};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use crate::output::{Output, OutputFormat};

pub async fn run_stats(catalog: Option<PathBuf>, output: &Output) -> Result<()> {
    let config = super::load_config()?;
    let items = super::load_catalog(catalog, &config).await?;

    let by_type: Vec<(ContentType, usize)> = ContentType::ALL
        .iter()
        .map(|t| (*t, items.iter().filter(|i| i.content_type == *t).count()))
        .filter(|(_, count)| *count > 0)
        .collect();

    let by_status: Vec<(ContentStatus, usize)> = ContentStatus::ALL
        .iter()
        .map(|s| (*s, items.iter().filter(|i| i.status == Some(*s)).count()))
        .filter(|(_, count)| *count > 0)
        .collect();

    let unstatused = items.iter().filter(|i| i.status.is_none()).count();
    let featured = items.iter().filter(|i| i.featured).count();
    let trending = items.iter().filter(|i| i.trending).count();

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Metric").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Count").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

            table.add_row(vec![Cell::new("Total items"), Cell::new(items.len())]);
            for (content_type, count) in &by_type {
                table.add_row(vec![
                    Cell::new(format!("Type: {content_type}")),
                    Cell::new(*count),
                ]);
            }
            for (status, count) in &by_status {
                table.add_row(vec![
                    Cell::new(format!("Status: {status}")),
                    Cell::new(*count),
                ]);
            }
            if unstatused > 0 {
                table.add_row(vec![Cell::new("Status: (none)"), Cell::new(unstatused)]);
            }
            table.add_row(vec![Cell::new("Featured"), Cell::new(featured)]);
            table.add_row(vec![Cell::new("Trending"), Cell::new(trending)]);

            println!("{table}");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let by_type: serde_json::Map<String, serde_json::Value> = by_type
                .iter()
                .map(|(t, c)| (t.to_string(), json!(c)))
                .collect();
            let by_status: serde_json::Map<String, serde_json::Value> = by_status
                .iter()
                .map(|(s, c)| (s.to_string(), json!(c)))
                .collect();

            output.json(&json!({
                "total": items.len(),
                "byType": by_type,
                "byStatus": by_status,
                "unstatused": unstatused,
                "featured": featured,
                "trending": trending,
            }));
        }
    }

    Ok(())
}
