use catalog_models::{ContentItem, SortKey};

use crate::collation::TitleCollator;

/// Applies the comparator selected by `key`. All sorts are stable, so items
/// comparing equal keep their input order; callers rely on that for
/// secondary ordering (e.g. featured rows staying first within a tie).
/// Missing values order last under the descending numeric keys.
pub fn sort_items(items: &mut [&ContentItem], key: SortKey, collator: &TitleCollator) {
    match key {
        SortKey::Relevance => {}
        SortKey::Title => items.sort_by(|a, b| collator.compare(&a.title, &b.title)),
        SortKey::Rating => items.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a))),
        SortKey::Year => items.sort_by(|a, b| b.release_year.cmp(&a.release_year)),
        SortKey::Views => items.sort_by(|a, b| b.views.cmp(&a.views)),
        SortKey::Recency => items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}

fn rating_key(item: &ContentItem) -> f64 {
    item.rating.unwrap_or(f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_models::ContentType;
    use chrono::{TimeZone, Utc};

    fn item(id: &str, title: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: title.to_string(),
            title_localized: None,
            description: None,
            content_type: ContentType::Movie,
            status: None,
            release_year: None,
            rating: None,
            views: 0,
            genres: Vec::new(),
            quality: Vec::new(),
            language: None,
            country: None,
            featured: false,
            trending: false,
            created_at: None,
            updated_at: None,
        }
    }

    fn ids(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_rating_sort_is_stable_on_ties() {
        let mut a = item("1", "A");
        a.rating = Some(8.0);
        let mut b = item("2", "B");
        b.rating = Some(8.0);
        let mut c = item("3", "C");
        c.rating = Some(9.0);

        let mut refs = vec![&a, &b, &c];
        sort_items(&mut refs, SortKey::Rating, &TitleCollator::code_point());
        // 9.0 first, then the two 8.0 items in input order
        assert_eq!(ids(&refs), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_relevance_preserves_input_order() {
        let a = item("1", "Z");
        let b = item("2", "A");
        let c = item("3", "M");

        let mut refs = vec![&a, &b, &c];
        sort_items(&mut refs, SortKey::Relevance, &TitleCollator::code_point());
        assert_eq!(ids(&refs), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_missing_ratings_sort_last() {
        let unrated = item("1", "A");
        let mut rated = item("2", "B");
        rated.rating = Some(1.0);

        let mut refs = vec![&unrated, &rated];
        sort_items(&mut refs, SortKey::Rating, &TitleCollator::code_point());
        assert_eq!(ids(&refs), vec!["2", "1"]);
    }

    #[test]
    fn test_views_and_year_descending() {
        let mut a = item("1", "A");
        a.views = 10;
        a.release_year = Some(2020);
        let mut b = item("2", "B");
        b.views = 30;
        b.release_year = Some(2024);
        let mut c = item("3", "C");
        c.views = 20;
        c.release_year = None;

        let mut refs = vec![&a, &b, &c];
        sort_items(&mut refs, SortKey::Views, &TitleCollator::code_point());
        assert_eq!(ids(&refs), vec!["2", "3", "1"]);

        let mut refs = vec![&a, &b, &c];
        sort_items(&mut refs, SortKey::Year, &TitleCollator::code_point());
        // Missing year lands last
        assert_eq!(ids(&refs), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_recency_descending_by_updated_at() {
        let mut a = item("1", "A");
        a.updated_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut b = item("2", "B");
        b.updated_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let c = item("3", "C");

        let mut refs = vec![&a, &b, &c];
        sort_items(&mut refs, SortKey::Recency, &TitleCollator::code_point());
        assert_eq!(ids(&refs), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_arabic_titles_sort_under_collation() {
        let film = item("1", "فيلم الحركة");
        let series = item("2", "مسلسل الدراما");
        let comedy = item("3", "كوميديا");

        let collator = TitleCollator::new("ar").unwrap();
        let mut refs = vec![&series, &film, &comedy];
        sort_items(&mut refs, SortKey::Title, &collator);
        assert_eq!(ids(&refs), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_hamza_variants_follow_collation_not_code_points() {
        // Code points would put alef madda (آ) before plain alef (ا);
        // Arabic collation orders by the letter skeleton instead.
        let adam = item("1", "آدم");
        let ibn = item("2", "ابن");

        let collator = TitleCollator::new("ar").unwrap();
        let mut refs = vec![&adam, &ibn];
        sort_items(&mut refs, SortKey::Title, &collator);
        assert_eq!(ids(&refs), vec!["2", "1"]);
    }
}
