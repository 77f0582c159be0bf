use serde::de::IgnoredAny;
use serde_json::json;

use crate::client::require;
use crate::query::{OrderQuery, OrderSearchQuery};
use crate::types::{
    ListResponse, Order, OrderCreateRequest, OrderSummary, OrderTags, OrderUpdateRequest,
};
use crate::{Client, Error};

impl Client {
    /// Fetches one page of orders.
    pub async fn list_orders(&self, query: &OrderQuery) -> Result<ListResponse<OrderSummary>, Error> {
        self.get_with_query("/orders", query).await
    }

    /// Full-text order search.
    pub async fn search_orders(
        &self,
        query: &OrderSearchQuery,
    ) -> Result<ListResponse<OrderSummary>, Error> {
        self.get_with_query("/orders/search", query).await
    }

    /// Fetches a single order. Line items are derived from
    /// `subtotal_items` when the response omits them.
    pub async fn get_order(&self, id: &str) -> Result<Order, Error> {
        require(id, "order id")?;
        self.get(&format!("/orders/{}", id)).await
    }

    pub async fn create_order(&self, req: &OrderCreateRequest) -> Result<Order, Error> {
        self.post("/orders", req).await
    }

    pub async fn update_order(&self, id: &str, req: &OrderUpdateRequest) -> Result<Order, Error> {
        require(id, "order id")?;
        self.patch(&format!("/orders/{}", id), Some(req)).await
    }

    pub async fn update_order_status(&self, id: &str, status: &str) -> Result<Order, Error> {
        require(id, "order id")?;
        let body = json!({ "status": status });
        self.patch(&format!("/orders/{}/status", id), Some(&body))
            .await
    }

    /// Cancels an order. The response body, if any, is discarded.
    pub async fn cancel_order(&self, id: &str) -> Result<(), Error> {
        require(id, "order id")?;
        self.patch::<IgnoredAny, ()>(&format!("/orders/{}/cancel", id), None)
            .await?;
        Ok(())
    }

    pub async fn get_order_tags(&self, id: &str) -> Result<OrderTags, Error> {
        require(id, "order id")?;
        self.get(&format!("/orders/{}/tags", id)).await
    }

    /// Replaces the order's tags.
    pub async fn update_order_tags(&self, id: &str, tags: &[String]) -> Result<Order, Error> {
        require(id, "order id")?;
        let body = OrderTags {
            tags: tags.to_vec(),
        };
        self.put(&format!("/orders/{}/tags", id), &body).await
    }
}
