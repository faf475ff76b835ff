pub mod content;
pub mod criteria;
pub mod page;
pub mod sort;

pub use content::{ContentItem, ContentStatus, ContentType};
pub use criteria::{parse_rating_floor, FilterCriteria};
pub use page::{PageRequest, QueryPage};
pub use sort::SortKey;
