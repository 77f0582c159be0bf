use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Customer {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub email: String,
    #[serde_as(as = "DefaultOnNull")]
    pub first_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub last_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub phone: String,
    #[serde_as(as = "DefaultOnNull")]
    pub accepts_marketing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_balance: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "DefaultOnNull")]
    pub subscriptions: Vec<CustomerSubscription>,
    #[serde_as(as = "DefaultOnNull")]
    pub orders_count: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub total_spent: String,
    #[serde_as(as = "DefaultOnNull")]
    pub currency: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tags: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub note: String,
    #[serde_as(as = "DefaultOnNull")]
    pub state: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Marketing subscription state on one platform (email, sms, line, ...).
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerSubscription {
    #[serde_as(as = "DefaultOnNull")]
    pub platform: String,
    #[serde_as(as = "DefaultOnNull")]
    pub is_active: bool,
}

/// Body of `POST /customers`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CustomerCreateRequest {
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub phone: String,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub accepts_marketing: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub note: String,
}

/// Body of `PUT /customers/{id}`. Only `Some` fields are sent.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CustomerUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
