//! Recipe search request handling.
//!
//! This crate covers the two request-scoped steps around a recipe search:
//!
//! - **Search**: parse query-string parameters into a typed [`SearchQuery`](search::SearchQuery)
//! - **Sidebar**: build the sort/filter sidebar with toggle links and facet counts
//!
//! Executing the search, rendering HTML, and HTTP transport live elsewhere.
//!
//! # Example
//!
//! ```rust
//! use recipe_search::prelude::*;
//!
//! let parser = SearchParameterParser::new(20);
//! let query = parser.build_query_from_str("q=pie&ni=6%2C10").unwrap();
//!
//! let uri = QueryUri::parse("/search?q=pie&ni=6%2C10");
//! let sidebar = SidebarComponent::new().build(&query, None, &uri).unwrap();
//!
//! let ingredients = sidebar.filter(INGREDIENTS_INFO_NAME).unwrap();
//! let active = ingredients.option("From 6 to 10").unwrap();
//! assert!(active.is_active);
//! assert_eq!(active.href, "/search?q=pie");
//! ```

pub mod config;
pub mod error;
pub mod search;
pub mod sidebar;
pub mod uri;

pub use config::SearchConfig;
pub use error::{ConfigError, SearchParameterError, SidebarError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::SearchConfig;
    pub use crate::error::{ConfigError, SearchParameterError, SidebarError};

    // Search
    pub use crate::search::{
        FacetData, LabelData, RangedSpec, SearchParameterParser, SearchQuery, SearchResult,
        SortOrder,
    };

    // Sidebar
    pub use crate::sidebar::{
        FilterInfo, FilterOption, FilterSpec, SidebarComponent, SidebarInfo, DIETS_INFO_NAME,
        INGREDIENTS_INFO_NAME, NUTRITION_INFO_NAME, SORT_INFO_NAME, TIME_INFO_NAME,
    };

    pub use crate::uri::{QueryUri, UriBuilder};
}
