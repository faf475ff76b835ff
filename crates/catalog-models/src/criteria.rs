use serde::{Deserialize, Serialize};

use crate::content::{ContentStatus, ContentType};

/// Active filter constraints for one query. `None` means "do not constrain
/// on this field" (the UI's `all` sentinel maps to `None` at the parsing
/// edge). All active constraints combine with AND semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring match against title, description, and
    /// genre entries. Empty or whitespace-only terms are no-ops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_floor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl FilterCriteria {
    /// Criteria with every constraint disabled; matches any item.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Parses the rating-floor values the filter bar produces: `all` (no
/// floor), `9+`, `9`, `8.5`. Floors are inclusive, so `9+` admits a rating
/// of exactly 9.0. Unparseable input is treated as no floor.
pub fn parse_rating_floor(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return None;
    }
    trimmed
        .strip_suffix('+')
        .unwrap_or(trimmed)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
}
