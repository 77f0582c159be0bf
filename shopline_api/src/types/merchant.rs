use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// The store the access token belongs to.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Merchant {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub handle: String,
    #[serde_as(as = "DefaultOnNull")]
    pub email: String,
    #[serde_as(as = "DefaultOnNull")]
    pub phone: String,
    #[serde_as(as = "DefaultOnNull")]
    pub domain: String,
    #[serde_as(as = "DefaultOnNull")]
    pub primary_domain: String,
    #[serde_as(as = "DefaultOnNull")]
    pub currency: String,
    #[serde_as(as = "DefaultOnNull")]
    pub timezone: String,
    #[serde_as(as = "DefaultOnNull")]
    pub country: String,
    #[serde_as(as = "DefaultOnNull")]
    pub country_code: String,
    #[serde_as(as = "DefaultOnNull")]
    pub plan: String,
    #[serde_as(as = "DefaultOnNull")]
    pub plan_display_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub shop_owner: String,
    #[serde_as(as = "DefaultOnNull")]
    pub weight_unit: String,
    #[serde_as(as = "DefaultOnNull")]
    pub taxes_included: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub password_enabled: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub has_storefront: bool,
    pub billing_address: Option<MerchantAddress>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MerchantAddress {
    #[serde_as(as = "DefaultOnNull")]
    pub first_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub last_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub company: String,
    #[serde_as(as = "DefaultOnNull")]
    pub address1: String,
    #[serde_as(as = "DefaultOnNull")]
    pub address2: String,
    #[serde_as(as = "DefaultOnNull")]
    pub city: String,
    #[serde_as(as = "DefaultOnNull")]
    pub province: String,
    #[serde_as(as = "DefaultOnNull")]
    pub province_code: String,
    #[serde_as(as = "DefaultOnNull")]
    pub country: String,
    #[serde_as(as = "DefaultOnNull")]
    pub country_code: String,
    #[serde_as(as = "DefaultOnNull")]
    pub zip: String,
    #[serde_as(as = "DefaultOnNull")]
    pub phone: String,
}

/// A staff account of the merchant.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MerchantStaff {
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
    pub role: String,
    #[serde_as(as = "DefaultOnNull")]
    pub permissions: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub account_owner: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// `GET /merchants` wraps the merchant in an unpaginated `items` array.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MerchantsResponse {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub items: Vec<Merchant>,
}
