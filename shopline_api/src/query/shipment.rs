use super::builder::QueryBuilder;
use super::common::{Query, QueryCommon};

/// Options for `GET /shipments`.
#[derive(Clone, Debug, Default)]
pub struct ShipmentQuery {
    pub common: QueryCommon,
    pub order_id: Option<String>,
    pub fulfillment_id: Option<String>,
    pub status: Option<String>,
    pub tracking_number: Option<String>,
}

impl Query for ShipmentQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_builder(&self) -> QueryBuilder {
        self.common
            .add_to_builder(QueryBuilder::new())
            .string("order_id", self.order_id.as_deref().unwrap_or_default())
            .string(
                "fulfillment_id",
                self.fulfillment_id.as_deref().unwrap_or_default(),
            )
            .string("status", self.status.as_deref().unwrap_or_default())
            .string(
                "tracking_number",
                self.tracking_number.as_deref().unwrap_or_default(),
            )
    }
}

impl ShipmentQuery {
    pub fn with_order_id(mut self, order_id: &str) -> Self {
        self.order_id = Some(order_id.to_string());
        self
    }
    pub fn with_fulfillment_id(mut self, fulfillment_id: &str) -> Self {
        self.fulfillment_id = Some(fulfillment_id.to_string());
        self
    }
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_tracking_number(mut self, tracking_number: &str) -> Self {
        self.tracking_number = Some(tracking_number.to_string());
        self
    }
}
