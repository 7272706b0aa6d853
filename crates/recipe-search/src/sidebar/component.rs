//! Filter sidebar construction.

use crate::error::SidebarError;
use crate::search::results::{
    DIET_DIMENSION, NUM_INGREDIENT_DIMENSION, NUTRITION_DIMENSION, TOTAL_TIME_DIMENSION,
};
use crate::search::{FacetData, RangedSpec, SearchQuery, SearchResult, SortOrder};
use crate::sidebar::catalog::{
    FilterSpec, CALORIES_OPTIONS, CARBS_OPTIONS, DIET_OPTIONS, FAT_OPTIONS, INGREDIENT_OPTIONS,
    SCIENCE_PARAM, SORT_OPTIONS, TOTAL_TIME_OPTIONS,
};
use crate::sidebar::model::{FilterInfo, FilterOption, SidebarInfo};
use crate::uri::UriBuilder;

pub const SORT_INFO_NAME: &str = "Sort recipes by";
pub const DIETS_INFO_NAME: &str = "Restrict by Diet";
pub const INGREDIENTS_INFO_NAME: &str = "Limit Ingredients";
pub const TIME_INFO_NAME: &str = "Limit Total Time";
pub const NUTRITION_INFO_NAME: &str = "Limit Nutrition (per serving)";

/// Builds the sort and filter sidebar for a search page.
///
/// Groups come out in a fixed order: sort, diet, ingredients, total time,
/// nutrition. Every option link is derived from the caller's base URI, so
/// one group's parameter changes never leak into another.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Build the sidebar for `query`.
    ///
    /// Without a `result` every count is zero and no group shows counts.
    /// Fails only when the query selects more than one diet, which the
    /// parameter parser never produces.
    pub fn build<U: UriBuilder>(
        &self,
        query: &SearchQuery,
        result: Option<&SearchResult>,
        uri: &U,
    ) -> Result<SidebarInfo, SidebarError> {
        let facet = |dimension: &str| result.and_then(|r| r.facet(dimension));

        let filters = vec![
            self.sort_options(query, uri),
            self.diet_filters(query, uri, facet(DIET_DIMENSION))?,
            self.ingredient_filters(query, uri, facet(NUM_INGREDIENT_DIMENSION)),
            self.total_time_filters(query, uri, facet(TOTAL_TIME_DIMENSION)),
            self.nutrition_filters(query, uri, facet(NUTRITION_DIMENSION)),
        ];

        Ok(SidebarInfo { filters })
    }

    pub fn sort_options<U: UriBuilder>(&self, query: &SearchQuery, uri: &U) -> FilterInfo {
        let mut info = FilterInfo::new(SORT_INFO_NAME).removable(false);
        info.options = SORT_OPTIONS
            .iter()
            .map(|spec| sort_option(spec, uri, query.sort()))
            .collect();
        info
    }

    pub fn diet_filters<U: UriBuilder>(
        &self,
        query: &SearchQuery,
        uri: &U,
        facet: Option<&FacetData>,
    ) -> Result<FilterInfo, SidebarError> {
        let selected = query.diet_threshold();
        if selected.len() > 1 {
            tracing::error!(
                diets = ?selected.keys().collect::<Vec<_>>(),
                "Query carries more than one selected diet"
            );
            return Err(SidebarError::MultipleDiets(selected.len()));
        }

        let mut info = FilterInfo::new(DIETS_INFO_NAME).with_counts(has_counts(facet));
        info.options = DIET_OPTIONS
            .iter()
            .map(|spec| {
                let value = spec.query_value();
                let is_active = selected.contains_key(&value);
                // A new diet starts from the default threshold.
                let href = if is_active {
                    uri.replace_query_param(spec.query_name(), None)
                } else {
                    uri.replace_query_param(spec.query_name(), Some(value.as_str()))
                }
                .replace_query_param(SCIENCE_PARAM, None);

                FilterOption {
                    name: spec.name().to_string(),
                    is_active,
                    count: Some(count_label(facet, &value)),
                    href: href.to_uri_string(),
                }
            })
            .collect();
        Ok(info)
    }

    pub fn ingredient_filters<U: UriBuilder>(
        &self,
        query: &SearchQuery,
        uri: &U,
        facet: Option<&FacetData>,
    ) -> FilterInfo {
        let active = query.num_ingredients().unwrap_or(RangedSpec::UNSELECTED);

        let mut info = FilterInfo::new(INGREDIENTS_INFO_NAME).with_counts(has_counts(facet));
        info.options = range_options(INGREDIENT_OPTIONS, uri, active, facet);
        info
    }

    // Counts are attached per option, but the group never asks to show them.
    pub fn total_time_filters<U: UriBuilder>(
        &self,
        query: &SearchQuery,
        uri: &U,
        facet: Option<&FacetData>,
    ) -> FilterInfo {
        let active = query.total_time().unwrap_or(RangedSpec::UNSELECTED);

        let mut info = FilterInfo::new(TIME_INFO_NAME);
        info.options = range_options(TOTAL_TIME_OPTIONS, uri, active, facet);
        info
    }

    pub fn nutrition_filters<U: UriBuilder>(
        &self,
        query: &SearchQuery,
        uri: &U,
        facet: Option<&FacetData>,
    ) -> FilterInfo {
        let kcal = query.calories().unwrap_or(RangedSpec::UNSELECTED);
        let fat = query.fat_content().unwrap_or(RangedSpec::UNSELECTED);
        let carbs = query.carbohydrate_content().unwrap_or(RangedSpec::UNSELECTED);

        let mut info = FilterInfo::new(NUTRITION_INFO_NAME);
        info.options.extend(range_options(CALORIES_OPTIONS, uri, kcal, facet));
        info.options.extend(range_options(FAT_OPTIONS, uri, fat, facet));
        info.options.extend(range_options(CARBS_OPTIONS, uri, carbs, facet));
        info
    }
}

fn has_counts(facet: Option<&FacetData>) -> bool {
    facet.is_some_and(|fd| !fd.is_empty())
}

fn count_label(facet: Option<&FacetData>, label: &str) -> u64 {
    facet.map_or(0, |fd| fd.count(label))
}

fn sort_option<U: UriBuilder>(spec: &FilterSpec, uri: &U, active: SortOrder) -> FilterOption {
    let is_active = matches!(spec, FilterSpec::Sort { order, .. } if *order == active);
    let href = uri.replace_query_param(spec.query_name(), Some(spec.query_value().as_str()));

    FilterOption {
        name: spec.name().to_string(),
        is_active,
        count: None,
        href: href.to_uri_string(),
    }
}

fn range_options<U: UriBuilder>(
    specs: &[FilterSpec],
    uri: &U,
    selected: RangedSpec,
    facet: Option<&FacetData>,
) -> Vec<FilterOption> {
    specs
        .iter()
        .map(|spec| {
            let is_active = matches!(
                spec,
                FilterSpec::Range { start, end, .. }
                    if *start == selected.start() && *end == selected.end()
            );
            let value = spec.query_value();
            let href = if is_active {
                uri.replace_query_param(spec.query_name(), None)
            } else {
                uri.replace_query_param(spec.query_name(), Some(value.as_str()))
            };

            FilterOption {
                name: spec.name().to_string(),
                is_active,
                count: Some(count_label(facet, &value)),
                href: href.to_uri_string(),
            }
        })
        .collect()
}
