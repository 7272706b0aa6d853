//! Search module.
//!
//! Contains the typed query, the request parameter parser, and the result
//! types the search engine hands back.

mod parser;
mod query;
pub mod results;

pub use parser::{SearchParameterParser, DEFAULT_DIET_THRESHOLD, MAX_PAGE};
pub use query::{RangedSpec, SearchQuery, SearchQueryBuilder, SortOrder, UnknownSortOrder};
pub use results::{FacetData, LabelData, SearchResult};
