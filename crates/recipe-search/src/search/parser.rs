//! Request parameter parsing.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::config::SearchConfig;
use crate::error::SearchParameterError;
use crate::search::{RangedSpec, SearchQuery, SortOrder};

/// Highest page number a client may request.
pub const MAX_PAGE: u32 = 30;

/// Threshold used for a diet when `science` is not given.
pub const DEFAULT_DIET_THRESHOLD: f32 = 1.0;

/// Turns raw query-string parameters into a validated [`SearchQuery`].
#[derive(Debug, Clone)]
pub struct SearchParameterParser {
    page_size: u32,
    max_facets: u32,
}

impl SearchParameterParser {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            max_facets: SearchConfig::default().max_facets,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            page_size: config.page_size,
            max_facets: config.max_facets,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Build a query from decoded parameters.
    ///
    /// Keys are independent of each other except `diet`, which reads its
    /// threshold from `science`.
    pub fn build_query(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<SearchQuery, SearchParameterError> {
        let mut builder = SearchQuery::builder()
            .fulltext("")
            .max_results(self.page_size)
            .max_facets(self.max_facets);

        for (param, value) in params {
            builder = match param.as_str() {
                "q" => builder.fulltext(value.as_str()),
                "sort" => builder.sort(self.parse_sort_order(value)?),
                "ni" => builder.num_ingredients(self.parse_range(value)?),
                "tt" => builder.total_time(self.parse_range(value)?),
                "n_k" => builder.calories(self.parse_range(value)?),
                "n_f" => builder.fat_content(self.parse_range(value)?),
                "n_c" => builder.carbohydrate_content(self.parse_range(value)?),
                "diet" => {
                    let threshold = match params.get("science") {
                        Some(science) => parse_threshold(science)?,
                        None => DEFAULT_DIET_THRESHOLD,
                    };
                    builder.put_diet_threshold(value.as_str(), threshold)
                }
                // Consumed by "diet"
                "science" => builder,
                "page" => builder.offset(self.parse_offset(value)?),
                _ => {
                    tracing::debug!(param = %param, "Rejecting unknown search parameter");
                    return Err(SearchParameterError::UnknownParameter(param.clone()));
                }
            };
        }

        let query = builder.build();
        tracing::debug!(
            fulltext = %query.fulltext(),
            sort = %query.sort(),
            offset = query.offset(),
            "Built search query"
        );
        Ok(query)
    }

    /// Build a query from an `application/x-www-form-urlencoded` string.
    ///
    /// When a key repeats, the last occurrence wins.
    pub fn build_query_from_str(&self, query: &str) -> Result<SearchQuery, SearchParameterError> {
        let params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        self.build_query(&params)
    }

    pub fn parse_sort_order(&self, order: &str) -> Result<SortOrder, SearchParameterError> {
        order
            .parse()
            .map_err(|_| SearchParameterError::InvalidSortOrder(order.to_string()))
    }

    /// Parse `"start,end"` or a bare upper bound `"n"`.
    ///
    /// An end of `0` means unbounded, so `"10,0"` is `[10, u32::MAX]`. The bare
    /// form always starts at 0: `"15"` is `[0, 15]`.
    pub fn parse_range(&self, input: &str) -> Result<RangedSpec, SearchParameterError> {
        let invalid = || SearchParameterError::InvalidRange(input.to_string());

        if input.contains(',') {
            let mut tokens = input.split(',');
            let start = parse_token(tokens.next()).ok_or_else(invalid)?;
            let end = parse_token(tokens.next()).ok_or_else(invalid)?;
            if tokens.next().is_some() {
                return Err(invalid());
            }

            if end == 0 {
                Ok(RangedSpec::at_least(start))
            } else {
                RangedSpec::new(start, end).ok_or_else(invalid)
            }
        } else {
            let end = parse_token(Some(input)).ok_or_else(invalid)?;
            RangedSpec::new(0, end).ok_or_else(invalid)
        }
    }

    fn parse_offset(&self, value: &str) -> Result<u32, SearchParameterError> {
        let page: u32 = value
            .parse()
            .map_err(|_| SearchParameterError::InvalidPage(value.to_string()))?;

        if page > MAX_PAGE {
            return Err(SearchParameterError::PageTooHigh {
                page,
                max: MAX_PAGE,
            });
        }

        // Pages start at 1
        page.saturating_sub(1)
            .checked_mul(self.page_size)
            .ok_or_else(|| {
                SearchParameterError::Internal(format!(
                    "offset overflow for page {} with page size {}",
                    page, self.page_size
                ))
            })
    }
}

fn parse_token(token: Option<&str>) -> Option<u32> {
    token.and_then(|t| t.parse().ok())
}

fn parse_threshold(value: &str) -> Result<f32, SearchParameterError> {
    value
        .trim()
        .parse()
        .map_err(|_| SearchParameterError::InvalidThreshold(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_SIZE: u32 = 20;

    fn parser() -> SearchParameterParser {
        SearchParameterParser::new(PAGE_SIZE)
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let query = parser().build_query(&HashMap::new()).unwrap();
        assert_eq!(query.fulltext(), "");
        assert_eq!(query.sort(), SortOrder::Relevance);
        assert_eq!(query.max_results(), PAGE_SIZE);
        assert_eq!(query.max_facets(), 5);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_fulltext_is_verbatim() {
        let query = parser()
            .build_query(&params(&[("q", "  <b>pecan</b> pie ")]))
            .unwrap();
        assert_eq!(query.fulltext(), "  <b>pecan</b> pie ");
    }

    #[test]
    fn test_all_sort_tokens() {
        for order in SortOrder::ALL {
            let query = parser()
                .build_query(&params(&[("sort", order.as_str())]))
                .unwrap();
            assert_eq!(query.sort(), order);
        }
    }

    #[test]
    fn test_invalid_sort_order() {
        let err = parser()
            .build_query(&params(&[("sort", "price_asc")]))
            .unwrap_err();
        assert_eq!(err, SearchParameterError::InvalidSortOrder("price_asc".into()));
    }

    #[test]
    fn test_unknown_parameter() {
        let err = parser().build_query(&params(&[("foo", "bar")])).unwrap_err();
        assert_eq!(err, SearchParameterError::UnknownParameter("foo".into()));
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn test_range_pair() {
        assert_eq!(parser().parse_range("6,10"), Ok(RangedSpec::new(6, 10).unwrap()));
    }

    #[test]
    fn test_range_zero_end_is_unbounded() {
        let range = parser().parse_range("10,0").unwrap();
        assert_eq!(range.start(), 10);
        assert!(range.is_unbounded());
    }

    #[test]
    fn test_range_bare_number_is_upper_bound() {
        assert_eq!(parser().parse_range("15"), Ok(RangedSpec::new(0, 15).unwrap()));
        assert_eq!(parser().parse_range("0"), Ok(RangedSpec::UNSELECTED));
    }

    #[test]
    fn test_range_rejects_garbage() {
        let inputs = [
            "", ",", "1,", ",1", "a,b", "1,2,3", "-1", "abc", "5,4", "1.5,2", "6, 10", " 15 ",
        ];
        for input in inputs {
            assert_eq!(
                parser().parse_range(input),
                Err(SearchParameterError::InvalidRange(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_range_params_map_to_fields() {
        let query = parser()
            .build_query(&params(&[
                ("ni", "0,5"),
                ("tt", "15,30"),
                ("n_k", "200"),
                ("n_f", "0,10"),
                ("n_c", "30,0"),
            ]))
            .unwrap();

        assert_eq!(query.num_ingredients(), RangedSpec::new(0, 5));
        assert_eq!(query.total_time(), RangedSpec::new(15, 30));
        assert_eq!(query.calories(), RangedSpec::new(0, 200));
        assert_eq!(query.fat_content(), RangedSpec::new(0, 10));
        assert_eq!(query.carbohydrate_content(), Some(RangedSpec::at_least(30)));
    }

    #[test]
    fn test_invalid_range_param() {
        let err = parser().build_query(&params(&[("tt", "x,y")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid range: x,y");
    }

    #[test]
    fn test_diet_default_threshold() {
        let query = parser().build_query(&params(&[("diet", "vegan")])).unwrap();
        assert_eq!(query.diet_threshold().get("vegan"), Some(&1.0));
        assert_eq!(query.diet_threshold().len(), 1);
    }

    #[test]
    fn test_diet_with_science() {
        let query = parser()
            .build_query(&params(&[("diet", "keto"), ("science", "0.75")]))
            .unwrap();
        assert_eq!(query.diet_threshold().get("keto"), Some(&0.75));
    }

    #[test]
    fn test_science_alone_is_ignored() {
        let query = parser().build_query(&params(&[("science", "0.5")])).unwrap();
        assert!(query.diet_threshold().is_empty());
    }

    #[test]
    fn test_invalid_science() {
        let err = parser()
            .build_query(&params(&[("diet", "keto"), ("science", "lots")]))
            .unwrap_err();
        assert_eq!(err, SearchParameterError::InvalidThreshold("lots".into()));
    }

    #[test]
    fn test_page_offset() {
        let query = parser().build_query(&params(&[("page", "3")])).unwrap();
        assert_eq!(query.offset(), 2 * PAGE_SIZE);

        let query = parser().build_query(&params(&[("page", "1")])).unwrap();
        assert_eq!(query.offset(), 0);

        let query = parser().build_query(&params(&[("page", "0")])).unwrap();
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_page_ceiling() {
        let query = parser().build_query(&params(&[("page", "30")])).unwrap();
        assert_eq!(query.offset(), 29 * PAGE_SIZE);

        let err = parser().build_query(&params(&[("page", "31")])).unwrap_err();
        assert_eq!(err, SearchParameterError::PageTooHigh { page: 31, max: MAX_PAGE });
    }

    #[test]
    fn test_page_must_be_unsigned() {
        for page in ["-1", "two", "", "1.5"] {
            let err = parser().build_query(&params(&[("page", page)])).unwrap_err();
            assert_eq!(err, SearchParameterError::InvalidPage(page.to_string()));
        }
    }

    #[test]
    fn test_build_query_from_str() {
        let query = parser()
            .build_query_from_str("q=banana+bread&ni=6%2C10&diet=keto&diet=paleo&page=2")
            .unwrap();

        assert_eq!(query.fulltext(), "banana bread");
        assert_eq!(query.num_ingredients(), RangedSpec::new(6, 10));
        assert_eq!(query.offset(), PAGE_SIZE);
        assert_eq!(query.diet_threshold().len(), 1);
        assert!(query.diet_threshold().contains_key("paleo"));
    }

    #[test]
    fn test_from_config() {
        let config = SearchConfig {
            page_size: 7,
            max_facets: 3,
        };
        let query = SearchParameterParser::from_config(&config)
            .build_query(&params(&[("page", "2")]))
            .unwrap();
        assert_eq!(query.max_results(), 7);
        assert_eq!(query.max_facets(), 3);
        assert_eq!(query.offset(), 7);
    }
}
