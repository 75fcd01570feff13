/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Name of the page-size parameter used by a resource family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSizeParam {
    /// `per_page=` (users)
    PerPage,
    /// `limit=` (accounts)
    Limit,
}

impl PageSizeParam {
    /// Query parameter name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSizeParam::PerPage => "per_page",
            PageSizeParam::Limit => "limit",
        }
    }
}

/// Ordered set of search filters
///
/// Filters are emitted in insertion order. Duplicate fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    fields: Vec<(String, String)>,
}

impl SearchFilters {
    /// Creates an empty filter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `field=value` filter
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Display) -> Self {
        self.push(field, value);
        self
    }

    /// Appends a `field=value` filter in place
    pub fn push(&mut self, field: impl Into<String>, value: impl Display) {
        self.fields.push((field.into(), value.to_string()));
    }

    /// Whether no filter was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the filters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for SearchFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = SearchFilters::new();
        for (k, v) in iter {
            filters.push(k, v);
        }
        filters
    }
}

/// Builds a search query string
///
/// The page size and page come first, followed by one `&field=value` per
/// filter. Values are written verbatim, without URL-encoding, because the API
/// expects the exact strings the caller supplies.
#[must_use]
pub fn build_search_string(
    param: PageSizeParam,
    filters: &SearchFilters,
    limit: u32,
    page: u32,
) -> String {
    filters.iter().fold(
        format!("?{}={limit}&page={page}", param.as_str()),
        |mut query, (field, value)| {
            query.push('&');
            query.push_str(field);
            query.push('=');
            query.push_str(value);
            query
        },
    )
}
