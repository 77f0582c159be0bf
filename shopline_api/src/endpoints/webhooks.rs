use crate::client::require;
use crate::query::WebhookQuery;
use crate::types::{ListResponse, Webhook, WebhookCreateRequest, WebhookUpdateRequest};
use crate::{Client, Error};

impl Client {
    pub async fn list_webhooks(&self, query: &WebhookQuery) -> Result<ListResponse<Webhook>, Error> {
        self.get_with_query("/webhooks", query).await
    }

    pub async fn get_webhook(&self, id: &str) -> Result<Webhook, Error> {
        require(id, "webhook id")?;
        self.get(&format!("/webhooks/{}", id)).await
    }

    /// Registers a webhook. Both `address` and `topic` must be non-blank.
    pub async fn create_webhook(&self, req: &WebhookCreateRequest) -> Result<Webhook, Error> {
        require(&req.address, "webhook address")?;
        require(&req.topic, "webhook topic")?;
        self.post("/webhooks", req).await
    }

    pub async fn update_webhook(
        &self,
        id: &str,
        req: &WebhookUpdateRequest,
    ) -> Result<Webhook, Error> {
        require(id, "webhook id")?;
        self.put(&format!("/webhooks/{}", id), req).await
    }

    pub async fn delete_webhook(&self, id: &str) -> Result<(), Error> {
        require(id, "webhook id")?;
        self.delete(&format!("/webhooks/{}", id)).await
    }
}
