//! Sidebar view model handed to the renderer.

use serde::{Deserialize, Serialize};

/// The whole sidebar: filter groups in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarInfo {
    pub filters: Vec<FilterInfo>,
}

impl SidebarInfo {
    /// Find a group by display name.
    pub fn filter(&self, name: &str) -> Option<&FilterInfo> {
        self.filters.iter().find(|f| f.name == name)
    }
}

/// A named group of toggle options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInfo {
    pub name: String,
    /// Whether the group's selection can be cleared. False only for sorting.
    pub is_removable: bool,
    /// Whether the renderer should display option counts.
    pub show_counts: bool,
    pub options: Vec<FilterOption>,
}

impl FilterInfo {
    /// Create an empty, removable group without counts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_removable: true,
            show_counts: false,
            options: Vec::new(),
        }
    }

    pub fn removable(mut self, is_removable: bool) -> Self {
        self.is_removable = is_removable;
        self
    }

    pub fn with_counts(mut self, show_counts: bool) -> Self {
        self.show_counts = show_counts;
        self
    }

    /// Find an option by display name.
    pub fn option(&self, name: &str) -> Option<&FilterOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Options currently applied to the query.
    pub fn active_options(&self) -> impl Iterator<Item = &FilterOption> {
        self.options.iter().filter(|o| o.is_active)
    }
}

/// A single clickable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub name: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Link that toggles this option.
    pub href: String,
}
