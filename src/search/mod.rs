mod criteria;
mod filter;

pub use criteria::{PriceRange, SearchCriteria, SortKey, DEFAULT_MAX_PRICE};
pub use filter::filter_and_sort;
