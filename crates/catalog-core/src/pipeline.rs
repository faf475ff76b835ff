use catalog_config::QueryDefaults;
use catalog_models::{page, ContentItem, FilterCriteria, PageRequest, QueryPage, SortKey};
use tracing::{debug, warn};

use crate::collation::TitleCollator;
use crate::{filter, sort};

/// The catalog query pipeline: filter, stable sort, paginate. A pure
/// function of its inputs; the input slice is never mutated and repeated
/// invocations with identical input produce identical output.
pub struct CatalogPipeline {
    collator: TitleCollator,
    default_page_size: u32,
    max_page_size: u32,
}

impl CatalogPipeline {
    pub fn new() -> Self {
        Self::from_defaults(&QueryDefaults::default())
    }

    pub fn from_defaults(defaults: &QueryDefaults) -> Self {
        let collator = match TitleCollator::new(&defaults.title_locale) {
            Ok(collator) => collator,
            Err(e) => {
                warn!(
                    locale = %defaults.title_locale,
                    error = %e,
                    "collator unavailable, falling back to code-point title ordering"
                );
                TitleCollator::code_point()
            }
        };
        Self {
            collator,
            default_page_size: defaults.default_page_size,
            max_page_size: defaults.max_page_size,
        }
    }

    /// Runs one query. Out-of-range pages yield an empty `results` slice
    /// with accurate counts; invalid windows are clamped, never rejected.
    pub fn query(
        &self,
        items: &[ContentItem],
        criteria: &FilterCriteria,
        sort_key: SortKey,
        window: PageRequest,
    ) -> QueryPage {
        let window = window.normalized(self.default_page_size, self.max_page_size);

        let mut matched: Vec<&ContentItem> =
            items.iter().filter(|item| filter::matches(item, criteria)).collect();
        sort::sort_items(&mut matched, sort_key, &self.collator);

        let total_matched = matched.len();
        let total_pages = page::total_pages(total_matched, window.page_size);

        let start = (window.page as usize - 1).saturating_mul(window.page_size as usize);
        let results: Vec<ContentItem> = if start >= total_matched {
            Vec::new()
        } else {
            let end = start
                .saturating_add(window.page_size as usize)
                .min(total_matched);
            matched[start..end].iter().map(|item| (*item).clone()).collect()
        };

        debug!(
            input = items.len(),
            total_matched,
            total_pages,
            page = window.page,
            page_size = window.page_size,
            sort = %sort_key,
            "catalog query"
        );

        QueryPage {
            results,
            total_matched,
            total_pages,
            page: window.page,
            page_size: window.page_size,
        }
    }
}

impl Default for CatalogPipeline {
    fn default() -> Self {
        Self::new()
    }
}
