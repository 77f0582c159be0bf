use super::builder::QueryBuilder;
use super::common::{Query, QueryCommon};

/// Options for `GET /payments`.
#[derive(Clone, Debug, Default)]
pub struct PaymentQuery {
    pub common: QueryCommon,
    pub status: Option<String>,
    pub gateway: Option<String>,
}

impl Query for PaymentQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_builder(&self) -> QueryBuilder {
        self.common
            .add_to_builder(QueryBuilder::new())
            .string("status", self.status.as_deref().unwrap_or_default())
            .string("gateway", self.gateway.as_deref().unwrap_or_default())
    }
}

impl PaymentQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_gateway(mut self, gateway: &str) -> Self {
        self.gateway = Some(gateway.to_string());
        self
    }
}
