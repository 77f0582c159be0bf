use chrono::{DateTime, Utc};

use super::builder::QueryBuilder;
use super::common::{sort_order_str, Query, QueryCommon, SortOrder};

/// Options for `GET /orders`.
#[derive(Clone, Debug, Default)]
pub struct OrderQuery {
    pub common: QueryCommon,
    pub status: Option<String>,
    /// Lower bound on `created_at`.
    pub since: Option<DateTime<Utc>>,
    /// Upper bound on `created_at`.
    pub until: Option<DateTime<Utc>>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Query for OrderQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_builder(&self) -> QueryBuilder {
        self.common
            .add_to_builder(QueryBuilder::new())
            .string("status", self.status.as_deref().unwrap_or_default())
            .time("created_at_min", self.since.as_ref())
            .time("created_at_max", self.until.as_ref())
            .string("sort_by", self.sort_by.as_deref().unwrap_or_default())
            .string("sort_order", &sort_order_str(self.sort_order))
    }
}

impl OrderQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }
    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }
    pub fn with_sort_by(mut self, sort_by: &str) -> Self {
        self.sort_by = Some(sort_by.to_string());
        self
    }
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

/// Options for `GET /orders/search`.
#[derive(Clone, Debug, Default)]
pub struct OrderSearchQuery {
    pub common: QueryCommon,
    pub query: Option<String>,
    pub status: Option<String>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl Query for OrderSearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_builder(&self) -> QueryBuilder {
        let builder = QueryBuilder::new()
            .string("query", self.query.as_deref().unwrap_or_default())
            .string("status", self.status.as_deref().unwrap_or_default())
            .time("created_at_min", self.since.as_ref())
            .time("created_at_max", self.until.as_ref());
        self.common.add_to_builder(builder)
    }
}

impl OrderSearchQuery {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }
    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use url::Url;

    use super::*;

    #[test]
    fn test_order_query() {
        let url = Url::parse("https://example.com/orders").unwrap();

        insta::assert_snapshot!(
            OrderQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/orders"
        );

        insta::assert_snapshot!(
            OrderQuery::default()
                .with_page(2)
                .with_page_size(50)
                .with_status("open")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/orders?page=2&page_size=50&status=open"
        );

        let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        insta::assert_snapshot!(
            OrderQuery::default()
                .with_since(since)
                .with_sort_by("created_at")
                .with_sort_order(SortOrder::Asc)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/orders?created_at_min=2024-01-01T00%3A00%3A00Z&sort_by=created_at&sort_order=asc"
        );
    }

    #[test]
    fn test_order_search_query_puts_paging_last() {
        let q = OrderSearchQuery::default()
            .with_query("#1001")
            .with_page(1)
            .to_builder();
        assert_eq!(q.encode(), "query=%231001&page=1");
    }
}
