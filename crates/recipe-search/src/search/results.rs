//! Search results and facet counts, as handed over by the search engine.

use serde::{Deserialize, Serialize};

/// Facet dimension holding per-diet counts.
pub const DIET_DIMENSION: &str = "diet";
/// Facet dimension holding ingredient-count range counts.
pub const NUM_INGREDIENT_DIMENSION: &str = "num_ingredient";
/// Facet dimension holding total-time range counts.
pub const TOTAL_TIME_DIMENSION: &str = "total_time";
/// Facet dimension holding nutrition range counts.
pub const NUTRITION_DIMENSION: &str = "nutrition";

/// Search results container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching recipes.
    #[serde(default)]
    pub total_hits: u64,
    /// Recipe ids in this page.
    #[serde(default)]
    pub recipe_ids: Vec<u64>,
    /// Facet counts, one entry per dimension.
    #[serde(default)]
    pub facets: Vec<FacetData>,
}

impl SearchResult {
    /// Create empty results.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set facets.
    pub fn with_facets(mut self, facets: Vec<FacetData>) -> Self {
        self.facets = facets;
        self
    }

    /// Find the facet for `dimension`, if the engine returned one.
    pub fn facet(&self, dimension: &str) -> Option<&FacetData> {
        self.facets.iter().find(|fd| fd.dimension == dimension)
    }
}

/// Counts for one facet dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetData {
    /// Dimension name (e.g. "diet").
    pub dimension: String,
    /// Labels with their counts, in engine order.
    #[serde(default)]
    pub children: Vec<LabelData>,
}

impl FacetData {
    /// Create a facet with no labels.
    pub fn new(dimension: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            children: Vec::new(),
        }
    }

    /// Add a label to the facet.
    pub fn with_label(mut self, label: impl Into<String>, count: u64) -> Self {
        self.children.push(LabelData {
            label: label.into(),
            count,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Count for `label`, or 0 when absent.
    pub fn count(&self, label: &str) -> u64 {
        self.children
            .iter()
            .find(|ld| ld.label == label)
            .map_or(0, |ld| ld.count)
    }
}

/// A single facet label with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelData {
    pub label: String,
    pub count: u64,
}
