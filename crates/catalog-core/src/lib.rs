pub mod collation;
pub mod filter;
pub mod params;
pub mod pipeline;
pub mod sort;
pub mod source;

pub use collation::{CollationError, TitleCollator};
pub use filter::matches;
pub use params::{criteria_from_params, page_from_params, sort_key_from_params};
pub use pipeline::CatalogPipeline;
pub use source::{CatalogSource, JsonFileSource, MemorySource, SourceError};
