//! Link building for sidebar options.

use url::form_urlencoded;

/// Builds the `href` of a sidebar option.
///
/// Implementations are immutable: [`replace_query_param`] returns a new
/// builder and leaves `self` untouched, so options built from the same base
/// never see each other's changes.
///
/// [`replace_query_param`]: UriBuilder::replace_query_param
pub trait UriBuilder: Clone {
    /// Set `name` to `value`, or remove it when `value` is `None`.
    fn replace_query_param(&self, name: &str, value: Option<&str>) -> Self;

    /// Finalize into a relative URI string.
    fn to_uri_string(&self) -> String;
}

/// A path plus ordered query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryUri {
    path: String,
    params: Vec<(String, String)>,
}

impl QueryUri {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Build from a request target such as `/search?q=pie&ni=0%2C5`.
    pub fn parse(target: &str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                params: form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect(),
            },
            None => Self::new(target),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of `name`, if present.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl UriBuilder for QueryUri {
    fn replace_query_param(&self, name: &str, value: Option<&str>) -> Self {
        let mut params: Vec<(String, String)> = self
            .params
            .iter()
            .filter(|(k, _)| k != name)
            .cloned()
            .collect();

        if let Some(value) = value {
            params.push((name.to_string(), value.to_string()));
        }

        Self {
            path: self.path.clone(),
            params,
        }
    }

    fn to_uri_string(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish();
        format!("{}?{}", self.path, query)
    }
}
