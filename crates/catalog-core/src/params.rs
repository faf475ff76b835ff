use std::collections::HashMap;

use catalog_config::QueryDefaults;
use catalog_models::{parse_rating_floor, FilterCriteria, PageRequest, SortKey};

/// Adapters from the flat query-parameter shape the content endpoints use
/// (`type=movie&page=1&limit=24&sortBy=rating&search=...`) into typed
/// inputs. The sentinel `all`, blank values, and anything unparseable all
/// mean "no constraint"; unknown parameters are ignored.
pub fn criteria_from_params(params: &HashMap<String, String>) -> FilterCriteria {
    FilterCriteria {
        search: first_active(params, &["search", "q"]).map(str::to_string),
        content_type: first_active(params, &["type"]).and_then(|v| v.parse().ok()),
        status: first_active(params, &["status"]).and_then(|v| v.parse().ok()),
        year: first_active(params, &["year"]).and_then(|v| v.parse().ok()),
        quality: first_active(params, &["quality"]).map(str::to_string),
        rating_floor: first_active(params, &["rating", "minRating", "min_rating"])
            .and_then(parse_rating_floor),
        genre: first_active(params, &["genre"]).map(str::to_string),
    }
}

pub fn sort_key_from_params(params: &HashMap<String, String>) -> SortKey {
    first_active(params, &["sortBy", "sort_by", "sort"])
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

pub fn page_from_params(params: &HashMap<String, String>, defaults: &QueryDefaults) -> PageRequest {
    let page = first_active(params, &["page"])
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    let page_size = first_active(params, &["limit", "pageSize", "page_size"])
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.default_page_size);
    PageRequest::new(page, page_size).normalized(defaults.default_page_size, defaults.max_page_size)
}

/// First non-sentinel value among the given keys. Blank values and the
/// literal `all` count as absent.
fn first_active<'a>(params: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| {
        params
            .get(*key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
    })
}
