//! Paginated list envelope returned by every list endpoint.
//!
//! The API has reported paging in two shapes over time: flat `page`,
//! `page_size`, `total_count`, `has_more` fields, and a nested `pagination`
//! object with `current_page`, `per_page`, `total_count`, `total_pages`.
//! [`ListResponse`] accepts either and back-fills the flat fields from the
//! nested block once, while decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::Error;

/// The nested `pagination` block. Missing and `null` fields read as zero.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    #[serde_as(as = "DefaultOnNull")]
    pub current_page: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub per_page: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_count: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_pages: i64,
}

/// A page of `T` plus its paging metadata.
///
/// After decoding, `page`, `page_size` and `total_count` hold the nested
/// `pagination` values whenever the response left the flat fields unset, and
/// `has_more` is `true` when `pagination.total_pages > pagination.current_page`.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub has_more: bool,
}

/// Wire shape, decoded in a single pass before reconciliation. Absent and
/// `null` values are treated alike.
#[serde_as]
#[derive(Deserialize)]
struct RawListResponse<T> {
    items: Option<Vec<T>>,
    pagination: Option<Pagination>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    page: i64,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    page_size: i64,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    total_count: i64,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    has_more: bool,
}

impl<T> From<RawListResponse<T>> for ListResponse<T> {
    fn from(raw: RawListResponse<T>) -> Self {
        let pagination = raw.pagination.unwrap_or_default();
        let mut resp = ListResponse {
            items: raw.items.unwrap_or_default(),
            pagination,
            page: raw.page,
            page_size: raw.page_size,
            total_count: raw.total_count,
            has_more: raw.has_more,
        };
        if pagination.total_count > 0 && resp.total_count == 0 {
            resp.total_count = pagination.total_count;
        }
        if pagination.current_page > 0 && resp.page == 0 {
            resp.page = pagination.current_page;
        }
        if pagination.per_page > 0 && resp.page_size == 0 {
            resp.page_size = pagination.per_page;
        }
        if pagination.total_pages > pagination.current_page {
            resp.has_more = true;
        }
        resp
    }
}

impl<'de, T> Deserialize<'de> for ListResponse<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawListResponse::<T>::deserialize(deserializer).map(ListResponse::from)
    }
}

impl<T: DeserializeOwned> ListResponse<T> {
    /// Decodes a response body.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl<T> ListResponse<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The page to request next, if the server reported more.
    pub fn next_page(&self) -> Option<i64> {
        if self.has_more {
            Some(self.page.max(0) + 1)
        } else {
            None
        }
    }
}
