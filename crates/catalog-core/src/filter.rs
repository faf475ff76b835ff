use catalog_models::{ContentItem, ContentStatus, ContentType, FilterCriteria};

/// True when the item satisfies every active constraint. Inactive criteria
/// (`None`) always pass; an item missing the field an active constraint
/// needs fails that constraint silently rather than erroring.
pub fn matches(item: &ContentItem, criteria: &FilterCriteria) -> bool {
    matches_search(item, criteria.search.as_deref())
        && matches_type(item, criteria.content_type)
        && matches_status(item, criteria.status)
        && matches_year(item, criteria.year)
        && matches_quality(item, criteria.quality.as_deref())
        && matches_rating_floor(item, criteria.rating_floor)
        && matches_genre(item, criteria.genre.as_deref())
}

/// Case-insensitive substring match against title, description, and genre
/// entries. Empty or whitespace-only terms match everything.
fn matches_search(item: &ContentItem, term: Option<&str>) -> bool {
    let term = match term.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return true,
    };

    if item.title.to_lowercase().contains(&term) {
        return true;
    }
    if let Some(description) = &item.description {
        if description.to_lowercase().contains(&term) {
            return true;
        }
    }
    item.genres.iter().any(|g| g.to_lowercase().contains(&term))
}

fn matches_type(item: &ContentItem, content_type: Option<ContentType>) -> bool {
    content_type.map_or(true, |t| item.content_type == t)
}

fn matches_status(item: &ContentItem, status: Option<ContentStatus>) -> bool {
    // Items without a status (public catalog entries) fail any status filter
    status.map_or(true, |s| item.status == Some(s))
}

fn matches_year(item: &ContentItem, year: Option<i32>) -> bool {
    year.map_or(true, |y| item.release_year == Some(y))
}

fn matches_quality(item: &ContentItem, quality: Option<&str>) -> bool {
    quality.map_or(true, |q| item.quality.iter().any(|have| have == q))
}

fn matches_rating_floor(item: &ContentItem, floor: Option<f64>) -> bool {
    floor.map_or(true, |f| item.rating.map_or(false, |r| r >= f))
}

fn matches_genre(item: &ContentItem, genre: Option<&str>) -> bool {
    genre.map_or(true, |g| item.genres.iter().any(|have| have == g))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: "Action Film".to_string(),
            title_localized: None,
            description: Some("A fast-paced drama of revenge".to_string()),
            content_type: ContentType::Movie,
            status: Some(ContentStatus::Published),
            release_year: Some(2023),
            rating: Some(8.5),
            views: 1000,
            genres: vec!["action".to_string(), "drama".to_string()],
            quality: vec!["1080p".to_string(), "720p".to_string()],
            language: Some("ar".to_string()),
            country: Some("YE".to_string()),
            featured: false,
            trending: false,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_unconstrained_criteria_match_everything() {
        assert!(matches(&item("1"), &FilterCriteria::any()));
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let criteria = FilterCriteria {
            content_type: Some(ContentType::Movie),
            rating_floor: Some(8.0),
            ..Default::default()
        };
        assert!(matches(&item("1"), &criteria));

        // Same type but rating below the floor: the conjunction fails
        let mut low_rated = item("2");
        low_rated.rating = Some(7.0);
        assert!(!matches(&low_rated, &criteria));

        // High rating but wrong type: also fails
        let mut series = item("3");
        series.content_type = ContentType::Series;
        assert!(!matches(&series, &criteria));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let criteria = FilterCriteria {
            search: Some("DRAMA".to_string()),
            ..Default::default()
        };
        // "drama" appears in the description and the genre list
        assert!(matches(&item("1"), &criteria));

        let criteria = FilterCriteria {
            search: Some("action film".to_string()),
            ..Default::default()
        };
        assert!(matches(&item("1"), &criteria));
    }

    #[test]
    fn test_search_misses_exclude_item() {
        let criteria = FilterCriteria {
            search: Some("wrestling night".to_string()),
            ..Default::default()
        };
        assert!(!matches(&item("1"), &criteria));
    }

    #[test]
    fn test_blank_search_is_noop() {
        let criteria = FilterCriteria {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches(&item("1"), &criteria));
    }

    #[test]
    fn test_rating_floor_is_inclusive() {
        let criteria = FilterCriteria {
            rating_floor: Some(9.0),
            ..Default::default()
        };
        let mut exact = item("1");
        exact.rating = Some(9.0);
        assert!(matches(&exact, &criteria));

        let mut below = item("2");
        below.rating = Some(8.999);
        assert!(!matches(&below, &criteria));
    }

    #[test]
    fn test_missing_fields_fail_active_predicates() {
        let mut unrated = item("1");
        unrated.rating = None;
        let criteria = FilterCriteria {
            rating_floor: Some(1.0),
            ..Default::default()
        };
        assert!(!matches(&unrated, &criteria));

        let mut undated = item("2");
        undated.release_year = None;
        let criteria = FilterCriteria {
            year: Some(2023),
            ..Default::default()
        };
        assert!(!matches(&undated, &criteria));

        let mut no_status = item("3");
        no_status.status = None;
        let criteria = FilterCriteria {
            status: Some(ContentStatus::Published),
            ..Default::default()
        };
        assert!(!matches(&no_status, &criteria));
    }

    #[test]
    fn test_quality_and_genre_membership() {
        let criteria = FilterCriteria {
            quality: Some("4K".to_string()),
            ..Default::default()
        };
        assert!(!matches(&item("1"), &criteria));

        let criteria = FilterCriteria {
            quality: Some("1080p".to_string()),
            genre: Some("action".to_string()),
            ..Default::default()
        };
        assert!(matches(&item("1"), &criteria));
    }
}
