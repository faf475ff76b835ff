use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One catalog entry, as served by the content API. Field names follow the
/// camelCase wire shape of the catalog JSON. Optional fields that arrive in
/// an unexpected shape deserialize to `None` instead of failing the whole
/// item, so a single malformed record never takes down a catalog load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_localized: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    #[serde(
        default,
        alias = "releaseDate",
        deserialize_with = "de::lenient_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_year: Option<i32>,
    #[serde(default, deserialize_with = "de::lenient_rating")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_views")]
    pub views: u64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub quality: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub trending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
    Program,
    Game,
    Application,
    Theater,
    Wrestling,
    Sports,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::Movie,
        ContentType::Series,
        ContentType::Program,
        ContentType::Game,
        ContentType::Application,
        ContentType::Theater,
        ContentType::Wrestling,
        ContentType::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Series => "series",
            ContentType::Program => "program",
            ContentType::Game => "game",
            ContentType::Application => "application",
            ContentType::Theater => "theater",
            ContentType::Wrestling => "wrestling",
            ContentType::Sports => "sports",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(ContentType::Movie),
            "series" => Ok(ContentType::Series),
            "program" => Ok(ContentType::Program),
            "game" => Ok(ContentType::Game),
            "application" => Ok(ContentType::Application),
            "theater" => Ok(ContentType::Theater),
            "wrestling" => Ok(ContentType::Wrestling),
            "sports" => Ok(ContentType::Sports),
            other => Err(format!("unknown content type: {}", other)),
        }
    }
}

/// Admin-facing publication state. Items coming from the public catalog may
/// not carry one at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Published,
    Draft,
    Archived,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 3] = [
        ContentStatus::Published,
        ContentStatus::Draft,
        ContentStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Published => "published",
            ContentStatus::Draft => "draft",
            ContentStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "published" => Ok(ContentStatus::Published),
            "draft" => Ok(ContentStatus::Draft),
            "archived" => Ok(ContentStatus::Archived),
            other => Err(format!("unknown content status: {}", other)),
        }
    }
}

mod de {
    use super::*;
    use serde::Deserializer;
    use serde_json::Value;

    /// Ids arrive as strings or integers depending on which backend produced
    /// the dump. Normalize both to a string.
    pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "id must be a string or number, got {}",
                other
            ))),
        }
    }

    /// Ratings are clamped into [0, 10] at ingestion. Non-numeric values
    /// (e.g. "N/A" sentinels) become `None` and silently fail rating
    /// filters downstream.
    pub fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, 10.0)))
    }

    /// Accepts a bare year (2023), a numeric string ("2023"), or an ISO
    /// release date ("2023-05-01").
    pub fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i32>().ok().or_else(|| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .map(|d| d.year())
                })
            }
            _ => None,
        }))
    }

    pub fn lenient_views<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .and_then(|v| match v {
                Value::Number(n) => n.as_u64().or_else(|| n.as_i64().map(|i| i.max(0) as u64)),
                Value::String(s) => s.trim().parse::<u64>().ok(),
                _ => None,
            })
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_item() {
        let json = r#"{
            "id": "c-100",
            "title": "The Longest Night",
            "titleLocalized": "أطول ليلة",
            "description": "A drama set in Sanaa",
            "type": "series",
            "status": "published",
            "releaseYear": 2023,
            "rating": 8.5,
            "views": 120345,
            "genres": ["drama", "thriller"],
            "quality": ["1080p", "720p"],
            "language": "ar",
            "country": "YE",
            "featured": true,
            "trending": false,
            "updatedAt": "2024-02-01T10:00:00Z"
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "c-100");
        assert_eq!(item.content_type, ContentType::Series);
        assert_eq!(item.status, Some(ContentStatus::Published));
        assert_eq!(item.release_year, Some(2023));
        assert_eq!(item.rating, Some(8.5));
        assert!(item.featured);
        assert!(item.updated_at.is_some());
    }

    #[test]
    fn test_deserialize_numeric_id_and_string_rating() {
        let json = r#"{"id": 42, "title": "T", "type": "movie", "rating": "7.2"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "42");
        assert_eq!(item.rating, Some(7.2));
        assert_eq!(item.views, 0);
        assert!(item.genres.is_empty());
    }

    #[test]
    fn test_rating_clamped_at_ingestion() {
        let json = r#"{"id": "1", "title": "T", "type": "movie", "rating": 11.4}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rating, Some(10.0));

        let json = r#"{"id": "1", "title": "T", "type": "movie", "rating": -2}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rating, Some(0.0));
    }

    #[test]
    fn test_malformed_rating_becomes_none() {
        let json = r#"{"id": "1", "title": "T", "type": "movie", "rating": "N/A"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rating, None);
    }

    #[test]
    fn test_year_from_release_date() {
        let json = r#"{"id": "1", "title": "T", "type": "movie", "releaseDate": "2021-11-05"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.release_year, Some(2021));
    }

    #[test]
    fn test_content_type_round_trip() {
        for ct in ContentType::ALL {
            assert_eq!(ct.as_str().parse::<ContentType>().unwrap(), ct);
        }
        assert!("podcast".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "Published".parse::<ContentStatus>().unwrap(),
            ContentStatus::Published
        );
        assert!("live".parse::<ContentStatus>().is_err());
    }
}
