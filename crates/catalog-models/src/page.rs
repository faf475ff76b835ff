use serde::{Deserialize, Serialize};

use crate::content::ContentItem;

pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Requested pagination window. Raw values straight from a query string may
/// be zero; `normalized` clamps them rather than erroring, matching the
/// forgiving behavior of the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn first(page_size: u32) -> Self {
        Self { page: 1, page_size }
    }

    /// Clamps the window into valid bounds: page >= 1, page size in
    /// [1, max], with invalid sizes falling back to the supplied default.
    pub fn normalized(self, default_page_size: u32, max_page_size: u32) -> Self {
        let default_page_size = default_page_size.max(1);
        let max_page_size = max_page_size.max(1);
        let page_size = if self.page_size == 0 {
            default_page_size
        } else {
            self.page_size.min(max_page_size)
        };
        Self {
            page: self.page.max(1),
            page_size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of query results plus the count metadata the pagination
/// controls need. The requested window is echoed back for UI state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    pub results: Vec<ContentItem>,
    pub total_matched: usize,
    pub total_pages: u32,
    pub page: u32,
    pub page_size: u32,
}

impl QueryPage {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// `ceil(total / page_size)`, never below 1 so an empty result set still
/// renders as a single empty page instead of a divide-by-zero artifact.
pub fn total_pages(total_matched: usize, page_size: u32) -> u32 {
    let page_size = page_size.max(1) as usize;
    let pages = total_matched.div_ceil(page_size);
    u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
}
