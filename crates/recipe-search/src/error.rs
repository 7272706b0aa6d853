//! Search error types.

use thiserror::Error;

/// Errors raised while turning request parameters into a [`SearchQuery`].
///
/// Every variant, [`Self::Internal`] included, is reported back to the
/// client as a bad request. Messages are safe to show or log verbatim.
///
/// [`SearchQuery`]: crate::search::SearchQuery
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchParameterError {
    /// Parameter name not recognized.
    #[error("Unknown parameter {0}")]
    UnknownParameter(String),

    /// Sort token not recognized.
    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    /// Range value could not be parsed.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Page is not an unsigned integer.
    #[error("Can't parse a number >= 0 from {0}")]
    InvalidPage(String),

    /// Page is above the allowed ceiling.
    #[error("For performance reasons, viewing pages {}+ is not allowed.", .max + 1)]
    PageTooHigh { page: u32, max: u32 },

    /// Diet threshold (`science`) is not a number.
    #[error("Invalid diet threshold: {0}")]
    InvalidThreshold(String),

    /// Anything else that went wrong while building the query.
    #[error("Invalid search parameters: {0}")]
    Internal(String),
}

/// Errors raised while building the filter sidebar.
///
/// These are contract violations between components, not user input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SidebarError {
    /// The query carries more than one selected diet.
    #[error("Don't know how to handle multiple selected diets (got {0})")]
    MultipleDiets(usize),
}

/// Errors raised while loading [`SearchConfig`](crate::config::SearchConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML config did not parse.
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON config did not parse.
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds an unusable value.
    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
