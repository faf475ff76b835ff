use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied after filtering. Directions are part of the key:
/// numeric keys are descending (best/newest/most-viewed first), `title` is
/// ascending under locale collation, `relevance` keeps the input order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Relevance,
    Title,
    Rating,
    Year,
    Views,
    Recency,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Title => "title",
            SortKey::Rating => "rating",
            SortKey::Year => "year",
            SortKey::Views => "views",
            SortKey::Recency => "recency",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "title" | "name" => Ok(SortKey::Title),
            "rating" => Ok(SortKey::Rating),
            "year" | "release_year" | "releaseyear" => Ok(SortKey::Year),
            "views" | "popularity" => Ok(SortKey::Views),
            "recency" | "latest" | "updated" | "updatedat" | "updated_at" => Ok(SortKey::Recency),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!("latest".parse::<SortKey>().unwrap(), SortKey::Recency);
        assert_eq!("updatedAt".parse::<SortKey>().unwrap(), SortKey::Recency);
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Title);
        assert!("random".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_default_is_relevance() {
        assert_eq!(SortKey::default(), SortKey::Relevance);
    }
}
