use super::builder::QueryBuilder;
use super::common::{sort_order_str, Query, QueryCommon, SortOrder};

/// Options for `GET /customers`.
#[derive(Clone, Debug, Default)]
pub struct CustomerQuery {
    pub common: QueryCommon,
    pub email: Option<String>,
    pub state: Option<String>,
    /// Comma-separated tag filter, passed through verbatim.
    pub tags: Option<String>,
    /// `Some(false)` is sent explicitly; `None` leaves the filter off.
    pub accepts_marketing: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Query for CustomerQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_builder(&self) -> QueryBuilder {
        self.common
            .add_to_builder(QueryBuilder::new())
            .string("email", self.email.as_deref().unwrap_or_default())
            .string("state", self.state.as_deref().unwrap_or_default())
            .string("tags", self.tags.as_deref().unwrap_or_default())
            .bool_opt("accepts_marketing", self.accepts_marketing)
            .string("sort_by", self.sort_by.as_deref().unwrap_or_default())
            .string("sort_order", &sort_order_str(self.sort_order))
    }
}

impl CustomerQuery {
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }
    pub fn with_tags(mut self, tags: &str) -> Self {
        self.tags = Some(tags.to_string());
        self
    }
    pub fn with_accepts_marketing(mut self, accepts_marketing: bool) -> Self {
        self.accepts_marketing = Some(accepts_marketing);
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

/// Options for `GET /customers/search`.
#[derive(Clone, Debug, Default)]
pub struct CustomerSearchQuery {
    pub common: QueryCommon,
    pub query: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Query for CustomerSearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_builder(&self) -> QueryBuilder {
        let builder = QueryBuilder::new()
            .string("query", self.query.as_deref().unwrap_or_default())
            .string("email", self.email.as_deref().unwrap_or_default())
            .string("phone", self.phone.as_deref().unwrap_or_default());
        self.common.add_to_builder(builder)
    }
}

impl CustomerSearchQuery {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_marketing_false_is_sent() {
        let q = CustomerQuery::default()
            .with_accepts_marketing(false)
            .to_builder();
        assert_eq!(q.get("accepts_marketing"), Some("false"));
    }

    #[test]
    fn accepts_marketing_unset_is_omitted() {
        let q = CustomerQuery::default().with_email("a@b.co").to_builder();
        assert_eq!(q.get("accepts_marketing"), None);
        assert_eq!(q.encode(), "email=a%40b.co");
    }

    #[test]
    fn search_query_fields() {
        let q = CustomerSearchQuery::default()
            .with_query("jane")
            .with_phone("+886912345678")
            .with_page_size(10)
            .to_builder();
        assert_eq!(q.encode(), "query=jane&phone=%2B886912345678&page_size=10");
    }
}
