use super::builder::QueryBuilder;
use super::common::{Query, QueryCommon};

/// Options for `GET /webhooks`.
#[derive(Clone, Debug, Default)]
pub struct WebhookQuery {
    pub common: QueryCommon,
    /// Event topic, e.g. `orders/create`.
    pub topic: Option<String>,
    pub address: Option<String>,
}

impl Query for WebhookQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_builder(&self) -> QueryBuilder {
        self.common
            .add_to_builder(QueryBuilder::new())
            .string("topic", self.topic.as_deref().unwrap_or_default())
            .string("address", self.address.as_deref().unwrap_or_default())
    }
}

impl WebhookQuery {
    pub fn with_topic(mut self, topic: &str) -> Self {
        self.topic = Some(topic.to_string());
        self
    }
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }
}
