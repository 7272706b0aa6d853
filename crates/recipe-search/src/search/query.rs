//! Search query value object.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort orders understood by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Sort by fulltext relevance.
    #[default]
    Relevance,
    /// Sort by cook time, fastest first.
    CookTime,
    /// Sort by total time, fastest first.
    TotalTime,
    /// Sort by preparation time, fastest first.
    PrepTime,
    /// Sort by number of ingredients, fewest first.
    NumIngredients,
    /// Sort by calories, lowest first.
    Calories,
}

impl SortOrder {
    /// All sort orders, in declaration order.
    pub const ALL: [SortOrder; 6] = [
        SortOrder::Relevance,
        SortOrder::CookTime,
        SortOrder::TotalTime,
        SortOrder::PrepTime,
        SortOrder::NumIngredients,
        SortOrder::Calories,
    ];

    /// Token used for this order in the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::CookTime => "cook_time",
            SortOrder::TotalTime => "total_time",
            SortOrder::PrepTime => "prep_time",
            SortOrder::NumIngredients => "num_ingredients",
            SortOrder::Calories => "calories",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a sort token is not one of [`SortOrder::as_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| UnknownSortOrder(s.to_string()))
    }
}

/// An inclusive `[start, end]` interval.
///
/// `end == u32::MAX` means the interval has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct RangedSpec {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RangeBounds {
    start: u32,
    end: u32,
}

impl TryFrom<RangeBounds> for RangedSpec {
    type Error = String;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        RangedSpec::new(bounds.start, bounds.end)
            .ok_or_else(|| format!("range start {} is above end {}", bounds.start, bounds.end))
    }
}

impl RangedSpec {
    /// Sentinel end value for "no upper bound".
    pub const UNBOUNDED: u32 = u32::MAX;

    /// The degenerate `[0, 0]` range used when a dimension has no selection.
    pub const UNSELECTED: RangedSpec = RangedSpec { start: 0, end: 0 };

    /// Create a range, returning `None` when `start > end`.
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Create a range with no upper bound.
    pub fn at_least(start: u32) -> Self {
        Self {
            start,
            end: Self::UNBOUNDED,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.end == Self::UNBOUNDED
    }
}

/// A typed recipe search request.
///
/// Built once per request through [`SearchQueryBuilder`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    fulltext: String,
    sort: SortOrder,
    max_results: u32,
    max_facets: u32,
    offset: u32,
    num_ingredients: Option<RangedSpec>,
    total_time: Option<RangedSpec>,
    calories: Option<RangedSpec>,
    fat_content: Option<RangedSpec>,
    carbohydrate_content: Option<RangedSpec>,
    diet_threshold: BTreeMap<String, f32>,
}

impl SearchQuery {
    /// Start building a query.
    pub fn builder() -> SearchQueryBuilder {
        SearchQueryBuilder::default()
    }

    pub fn fulltext(&self) -> &str {
        &self.fulltext
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn max_facets(&self) -> u32 {
        self.max_facets
    }

    /// Zero-based index of the first result.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn num_ingredients(&self) -> Option<RangedSpec> {
        self.num_ingredients
    }

    pub fn total_time(&self) -> Option<RangedSpec> {
        self.total_time
    }

    pub fn calories(&self) -> Option<RangedSpec> {
        self.calories
    }

    pub fn fat_content(&self) -> Option<RangedSpec> {
        self.fat_content
    }

    pub fn carbohydrate_content(&self) -> Option<RangedSpec> {
        self.carbohydrate_content
    }

    /// Selected diets mapped to their minimum score.
    pub fn diet_threshold(&self) -> &BTreeMap<String, f32> {
        &self.diet_threshold
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQueryBuilder::default().build()
    }
}

/// Builder for [`SearchQuery`].
#[derive(Debug, Clone)]
pub struct SearchQueryBuilder {
    query: SearchQuery,
}

impl Default for SearchQueryBuilder {
    fn default() -> Self {
        Self {
            query: SearchQuery {
                fulltext: String::new(),
                sort: SortOrder::Relevance,
                max_results: 10,
                max_facets: 0,
                offset: 0,
                num_ingredients: None,
                total_time: None,
                calories: None,
                fat_content: None,
                carbohydrate_content: None,
                diet_threshold: BTreeMap::new(),
            },
        }
    }
}

impl SearchQueryBuilder {
    pub fn fulltext(mut self, fulltext: impl Into<String>) -> Self {
        self.query.fulltext = fulltext.into();
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.query.sort = sort;
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.query.max_results = max_results;
        self
    }

    pub fn max_facets(mut self, max_facets: u32) -> Self {
        self.query.max_facets = max_facets;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.query.offset = offset;
        self
    }

    pub fn num_ingredients(mut self, range: RangedSpec) -> Self {
        self.query.num_ingredients = Some(range);
        self
    }

    pub fn total_time(mut self, range: RangedSpec) -> Self {
        self.query.total_time = Some(range);
        self
    }

    pub fn calories(mut self, range: RangedSpec) -> Self {
        self.query.calories = Some(range);
        self
    }

    pub fn fat_content(mut self, range: RangedSpec) -> Self {
        self.query.fat_content = Some(range);
        self
    }

    pub fn carbohydrate_content(mut self, range: RangedSpec) -> Self {
        self.query.carbohydrate_content = Some(range);
        self
    }

    /// Add a diet selection. Adding the same diet again overwrites its threshold.
    pub fn put_diet_threshold(mut self, diet: impl Into<String>, threshold: f32) -> Self {
        self.query.diet_threshold.insert(diet.into(), threshold);
        self
    }

    pub fn build(self) -> SearchQuery {
        self.query
    }
}
