use std::collections::HashMap;
use std::path::PathBuf;

use catalog_core::{criteria_from_params, page_from_params, sort_key_from_params, CatalogPipeline};
use catalog_models::QueryPage;
use color_eyre::Result;
use comfy_table::{Cell, Table};

use crate::output::{Output, OutputFormat};

pub struct QueryArgs {
    pub catalog: Option<PathBuf>,
    pub search: Option<String>,
    pub content_type: Option<String>,
    pub status: Option<String>,
    pub year: Option<String>,
    pub quality: Option<String>,
    pub rating: Option<String>,
    pub genre: Option<String>,
    pub sort: String,
    pub page: u32,
    pub page_size: Option<u32>,
}

impl QueryArgs {
    /// Flattens the flags into the same parameter shape the content
    /// endpoints use, so the CLI is just another thin adapter over the
    /// pipeline's parsers.
    fn into_params(self) -> (Option<PathBuf>, HashMap<String, String>) {
        let mut params = HashMap::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(v) = value {
                params.insert(key.to_string(), v);
            }
        };
        put("search", self.search);
        put("type", self.content_type);
        put("status", self.status);
        put("year", self.year);
        put("quality", self.quality);
        put("rating", self.rating);
        put("genre", self.genre);
        put("sortBy", Some(self.sort));
        put("page", Some(self.page.to_string()));
        put("limit", self.page_size.map(|n| n.to_string()));
        (self.catalog, params)
    }
}

pub async fn run_query(args: QueryArgs, output: &Output) -> Result<()> {
    let config = super::load_config()?;
    let (catalog_flag, params) = args.into_params();
    let items = super::load_catalog(catalog_flag, &config).await?;

    let defaults = config.query.clone();
    let pipeline = CatalogPipeline::from_defaults(&defaults);

    let criteria = criteria_from_params(&params);
    let sort_key = sort_key_from_params(&params);
    let window = page_from_params(&params, &defaults);

    let page = pipeline.query(&items, &criteria, sort_key, window);

    match output.format() {
        OutputFormat::Human => render_human(&page, output),
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&page)?);
        }
    }

    Ok(())
}

fn render_human(page: &QueryPage, output: &Output) {
    if output.is_quiet() {
        return;
    }

    if page.results.is_empty() {
        output.warn(format!(
            "No results on page {} ({} matched, {} page(s))",
            page.page, page.total_matched, page.total_pages
        ));
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Type", "Year", "Rating", "Views"]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    for item in &page.results {
        table.add_row(vec![
            Cell::new(&item.id),
            Cell::new(&item.title),
            Cell::new(item.content_type.as_str()),
            Cell::new(
                item.release_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(
                item.rating
                    .map(|r| format!("{r:.1}"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(item.views.to_string()),
        ]);
    }

    println!("{table}");
    output.info(format!(
        "Page {}/{} · {} item(s) matched",
        page.page, page.total_pages, page.total_matched
    ));
}
