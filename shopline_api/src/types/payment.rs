use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::Address;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Payment {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub order_id: String,
    /// Decimal amount as sent by the API, e.g. `"199.00"`.
    #[serde_as(as = "DefaultOnNull")]
    pub amount: String,
    #[serde_as(as = "DefaultOnNull")]
    pub currency: String,
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub gateway: String,
    #[serde_as(as = "DefaultOnNull")]
    pub payment_method: String,
    #[serde_as(as = "DefaultOnNull")]
    pub transaction_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Masked card details.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CreditCard {
    #[serde_as(as = "DefaultOnNull")]
    pub brand: String,
    #[serde_as(as = "DefaultOnNull")]
    pub last4: String,
    #[serde_as(as = "DefaultOnNull")]
    pub expiry_month: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub expiry_year: u32,
}

/// Body of `POST /payments/{id}/capture` and `/refund`.
#[derive(Serialize, Clone, Debug, Default)]
pub struct PaymentActionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PaymentActionRequest {
    /// Sets the amount; a blank value leaves it unset.
    pub fn with_amount(mut self, amount: &str) -> Self {
        self.amount = non_blank(amount);
        self
    }

    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = non_blank(reason);
        self
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
