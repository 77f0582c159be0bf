//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortOrder`].

use std::str::FromStr;

use url::Url;

use super::builder::QueryBuilder;

/// Trait implemented by all list/search option structs. Provides URL
/// serialization and the shared pagination builder methods.
pub trait Query {
    /// Renders this query's parameters, in the order the endpoint documents them.
    fn to_builder(&self) -> QueryBuilder;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_builder().add_to_url(url)
    }

    /// Sets the page number (1-indexed). Zero leaves it to the API default.
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page. Zero leaves it to the API default.
    fn with_page_size(mut self, page_size: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_size = page_size;
        self
    }
}

/// Sort order accepted by the `sort_order` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}
impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortOrder::Asc => "asc",
                SortOrder::Desc => "desc",
            }
        )
    }
}
impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Pagination fields shared by all list queries. Zero means "not set".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed).
    pub page: i64,
    /// Results per page.
    pub page_size: i64,
}

impl QueryCommon {
    /// Adds `page` and `page_size` to `builder` when set.
    pub fn add_to_builder(&self, builder: QueryBuilder) -> QueryBuilder {
        builder
            .int("page", self.page)
            .int("page_size", self.page_size)
    }
}

pub(crate) fn sort_order_str(order: Option<SortOrder>) -> String {
    order.map(|o| o.to_string()).unwrap_or_default()
}
