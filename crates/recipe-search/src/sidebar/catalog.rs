//! Static filter catalogs shown in the sidebar.
//!
//! Entries are visited in declared order, which is the order they render in.

use crate::search::{RangedSpec, SortOrder};

/// Diet threshold parameter, dropped from every diet option link.
pub const SCIENCE_PARAM: &str = "science";

/// Diets the search index knows about.
pub const KNOWN_DIETS: [&str; 5] = ["keto", "lowcarb", "paleo", "vegan", "vegetarian"];

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSpec {
    /// Sort order choice.
    Sort {
        name: &'static str,
        order: SortOrder,
        query_value: &'static str,
    },
    /// Fixed string value for a parameter, e.g. `diet=keto`.
    String {
        name: &'static str,
        query_name: &'static str,
        query_value: &'static str,
    },
    /// Inclusive range for a parameter, e.g. `ni=6,10`.
    Range {
        name: &'static str,
        start: u32,
        end: u32,
        query_name: &'static str,
    },
}

impl FilterSpec {
    pub const fn sort(name: &'static str, order: SortOrder, query_value: &'static str) -> Self {
        FilterSpec::Sort {
            name,
            order,
            query_value,
        }
    }

    pub const fn string(
        name: &'static str,
        query_name: &'static str,
        query_value: &'static str,
    ) -> Self {
        FilterSpec::String {
            name,
            query_name,
            query_value,
        }
    }

    pub const fn range(name: &'static str, start: u32, end: u32, query_name: &'static str) -> Self {
        FilterSpec::Range {
            name,
            start,
            end,
            query_name,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            FilterSpec::Sort { name, .. }
            | FilterSpec::String { name, .. }
            | FilterSpec::Range { name, .. } => *name,
        }
    }

    /// Query parameter this entry controls.
    pub fn query_name(&self) -> &'static str {
        match self {
            FilterSpec::Sort { .. } => "sort",
            FilterSpec::String { query_name, .. } | FilterSpec::Range { query_name, .. } => {
                *query_name
            }
        }
    }

    /// Value written to the query string when the entry is selected.
    ///
    /// Ranges encode as `"start,end"` with an unbounded end written as `0`.
    /// The same string is the facet label the engine reports counts under.
    pub fn query_value(&self) -> String {
        match self {
            FilterSpec::Sort { query_value, .. } | FilterSpec::String { query_value, .. } => {
                query_value.to_string()
            }
            FilterSpec::Range { start, end, .. } => {
                let end = if *end == RangedSpec::UNBOUNDED { 0 } else { *end };
                format!("{},{}", start, end)
            }
        }
    }
}

pub const SORT_OPTIONS: &[FilterSpec] = &[
    FilterSpec::sort("Relevance", SortOrder::Relevance, "relevance"),
    FilterSpec::sort("Fastest to Cook", SortOrder::TotalTime, "total_time"),
    FilterSpec::sort("Least Ingredients", SortOrder::NumIngredients, "num_ingredients"),
    FilterSpec::sort("Calories", SortOrder::Calories, "calories"),
];

pub const DIET_OPTIONS: &[FilterSpec] = &[
    FilterSpec::string("Low Carb", "diet", "lowcarb"),
    FilterSpec::string("Vegetarian", "diet", "vegetarian"),
    FilterSpec::string("Vegan", "diet", "vegan"),
    FilterSpec::string("Keto", "diet", "keto"),
    FilterSpec::string("Paleo", "diet", "paleo"),
];

pub const INGREDIENT_OPTIONS: &[FilterSpec] = &[
    FilterSpec::range("Up to 5", 0, 5, "ni"),
    FilterSpec::range("From 6 to 10", 6, 10, "ni"),
    FilterSpec::range("More than 10", 10, RangedSpec::UNBOUNDED, "ni"),
];

pub const TOTAL_TIME_OPTIONS: &[FilterSpec] = &[
    FilterSpec::range("Up to 15 minutes", 0, 15, "tt"),
    FilterSpec::range("From 15 to 30 minutes", 15, 30, "tt"),
    FilterSpec::range("From 30 to 60 minutes", 30, 60, "tt"),
    FilterSpec::range("One hour or more", 60, RangedSpec::UNBOUNDED, "tt"),
];

pub const CALORIES_OPTIONS: &[FilterSpec] = &[
    FilterSpec::range("Up to 200 kcal", 0, 200, "n_k"),
    FilterSpec::range("Up to 500 kcal", 0, 500, "n_k"),
];

pub const FAT_OPTIONS: &[FilterSpec] = &[FilterSpec::range("Up to 10g of Fat", 0, 10, "n_f")];

pub const CARBS_OPTIONS: &[FilterSpec] = &[FilterSpec::range("Up to 30g of Carbs", 0, 30, "n_c")];
