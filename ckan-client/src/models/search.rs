use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Package, Resource};

/// The `result` wrapper returned by the search actions.
///
/// `results` has no default: an object without it is not a search result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResult<T> {
    /// Total number of matches on the server, not the length of `results`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub facets: Map<String, Value>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub search_facets: Map<String, Value>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub results: Vec<T>,
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        SearchResult {
            count: 0,
            sort: None,
            facets: Map::new(),
            search_facets: Map::new(),
            results: Vec::new(),
        }
    }
}

/// Result of `package_search`
pub type PackageSearchResult = SearchResult<Package>;

/// Result of `resource_search`
pub type ResourceSearchResult = SearchResult<Resource>;
