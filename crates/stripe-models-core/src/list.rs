//! List and search result wrappers.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::Object;

/// Pagination metadata shared by every list response.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMeta {
    /// Whether there are more items after this page.
    pub has_more: bool,
    /// The URL of the list endpoint.
    pub url: String,
    /// Total number of items, only present when requested.
    pub total_count: Option<u64>,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// Always `list`.
    #[serde(default = "list_object")]
    pub object: String,
    /// The items on this page, in API order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: ListMeta,
}

fn list_object() -> String {
    "list".to_string()
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            object: list_object(),
            data: Vec::new(),
            meta: ListMeta::default(),
        }
    }
}

impl<T> List<T> {
    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Object> List<T> {
    /// The cursor to pass as `starting_after` to fetch the next page.
    ///
    /// `None` when the API reported no further items.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&T::Id> {
        if self.meta.has_more {
            self.data.last().map(T::id)
        } else {
            None
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Pagination metadata of a search response.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMeta {
    /// Whether there are more results.
    pub has_more: bool,
    /// The `page` token for the next request.
    pub next_page: Option<String>,
    /// The URL of the search endpoint.
    pub url: String,
    /// Total number of matches, only present when requested.
    pub total_count: Option<u64>,
}

/// One page of a search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    /// Always `search_result`.
    #[serde(default = "search_object")]
    pub object: String,
    /// The matching items, in relevance order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: SearchMeta,
}

fn search_object() -> String {
    "search_result".to_string()
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self {
            object: search_object(),
            data: Vec::new(),
            meta: SearchMeta::default(),
        }
    }
}

impl<T> SearchResult<T> {
    /// The token to pass as `page` for the next request, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        if self.meta.has_more {
            self.meta.next_page.as_deref()
        } else {
            None
        }
    }
}

impl<T> IntoIterator for SearchResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def_id;

    def_id!(ThingId, "Test id.");

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Thing {
        id: ThingId,
    }

    crate::impl_object!(Thing, ThingId, "thing");

    #[test]
    fn list_decodes_meta_and_data() {
        let list: List<Thing> = serde_json::from_str(
            r#"{"object":"list","data":[{"id":"t_1"},{"id":"t_2"}],"has_more":true,"url":"/v1/things"}"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.meta.has_more);
        assert_eq!(list.meta.url, "/v1/things");
        assert_eq!(list.next_cursor().map(ThingId::as_str), Some("t_2"));
    }

    #[test]
    fn exhausted_list_has_no_cursor() {
        let list: List<Thing> =
            serde_json::from_str(r#"{"object":"list","data":[{"id":"t_1"}],"has_more":false}"#).unwrap();
        assert!(list.next_cursor().is_none());
    }

    #[test]
    fn search_result_exposes_next_page() {
        let result: SearchResult<Thing> = serde_json::from_str(
            r#"{"object":"search_result","data":[],"has_more":true,"next_page":"pg_2","url":"/v1/things/search"}"#,
        )
        .unwrap();
        assert_eq!(result.next_page(), Some("pg_2"));
        assert!(result.data.is_empty());
    }
}
