use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Payload encoding of webhook deliveries.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WebhookFormat {
    #[default]
    Json,
    Xml,
}
impl std::fmt::Display for WebhookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WebhookFormat::Json => "json",
                WebhookFormat::Xml => "xml",
            }
        )
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Webhook {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    /// Delivery URL.
    #[serde_as(as = "DefaultOnNull")]
    pub address: String,
    /// Event topic, e.g. `orders/create`.
    #[serde_as(as = "DefaultOnNull")]
    pub topic: String,
    #[serde_as(as = "DefaultOnNull")]
    pub format: WebhookFormat,
    #[serde_as(as = "DefaultOnNull")]
    pub api_version: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /webhooks`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WebhookCreateRequest {
    pub address: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub format: Option<WebhookFormat>,
}

/// Body of `PUT /webhooks/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WebhookUpdateRequest {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub format: Option<WebhookFormat>,
}
