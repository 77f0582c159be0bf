use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Shipment {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub order_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub fulfillment_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tracking_company: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tracking_number: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tracking_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /shipments`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ShipmentCreateRequest {
    pub order_id: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub fulfillment_id: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub tracking_company: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub tracking_number: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub tracking_url: String,
}

/// Body of `PUT /shipments/{id}`. Empty fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ShipmentUpdateRequest {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub tracking_company: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub tracking_number: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub tracking_url: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub status: String,
}
