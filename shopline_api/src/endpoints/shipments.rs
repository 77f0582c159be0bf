use crate::client::require;
use crate::query::ShipmentQuery;
use crate::types::{ListResponse, Shipment, ShipmentCreateRequest, ShipmentUpdateRequest};
use crate::{Client, Error};

impl Client {
    pub async fn list_shipments(
        &self,
        query: &ShipmentQuery,
    ) -> Result<ListResponse<Shipment>, Error> {
        self.get_with_query("/shipments", query).await
    }

    pub async fn get_shipment(&self, id: &str) -> Result<Shipment, Error> {
        require(id, "shipment id")?;
        self.get(&format!("/shipments/{}", id)).await
    }

    pub async fn create_shipment(&self, req: &ShipmentCreateRequest) -> Result<Shipment, Error> {
        require(&req.order_id, "order id")?;
        self.post("/shipments", req).await
    }

    pub async fn update_shipment(
        &self,
        id: &str,
        req: &ShipmentUpdateRequest,
    ) -> Result<Shipment, Error> {
        require(id, "shipment id")?;
        self.put(&format!("/shipments/{}", id), req).await
    }

    pub async fn delete_shipment(&self, id: &str) -> Result<(), Error> {
        require(id, "shipment id")?;
        self.delete(&format!("/shipments/{}", id)).await
    }
}
