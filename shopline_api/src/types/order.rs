use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};

use super::{Address, Customer};

/// Money amount as the API renders it.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Price {
    #[serde_as(as = "DefaultOnNull")]
    pub cents: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub currency_symbol: String,
    #[serde_as(as = "DefaultOnNull")]
    pub currency_iso: String,
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    #[serde_as(as = "DefaultOnNull")]
    pub dollars: f64,
}

/// Row shape returned by the order list and search endpoints.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OrderSummary {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub order_number: String,
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub payment_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub fulfill_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub total_price: String,
    #[serde_as(as = "DefaultOnNull")]
    pub currency: String,
    #[serde_as(as = "DefaultOnNull")]
    pub customer_email: String,
    #[serde_as(as = "DefaultOnNull")]
    pub customer_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Order detail.
///
/// Some endpoints return items only under `subtotal_items`. When
/// `line_items` comes back empty, decoding derives it from `subtotal_items`.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(remote = "Self", default)]
pub struct Order {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub order_number: String,
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub payment_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub fulfill_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub total_price: String,
    #[serde_as(as = "DefaultOnNull")]
    pub currency: String,
    #[serde_as(as = "DefaultOnNull")]
    pub customer_email: String,
    #[serde_as(as = "DefaultOnNull")]
    pub customer_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde_as(as = "DefaultOnNull")]
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "DefaultOnNull")]
    pub subtotal_items: Vec<OrderSubtotalItem>,
    #[serde_as(as = "DefaultOnNull")]
    pub line_items: Vec<OrderLineItem>,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde_as(as = "DefaultOnNull")]
    pub note: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "DefaultOnNull")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Serialize for Order {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Order::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut order = Order::deserialize(deserializer)?;
        if order.line_items.is_empty() && !order.subtotal_items.is_empty() {
            order.line_items = order
                .subtotal_items
                .iter()
                .map(OrderLineItem::from)
                .collect();
        }
        Ok(order)
    }
}

/// An entry of `subtotal_items`.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OrderSubtotalItem {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub item_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub item_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub item_variation_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub item_variation_key: String,
    #[serde_as(as = "DefaultOnNull")]
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_data: Option<Value>,
}

/// A line item on an order. Price fields vary in shape between endpoints
/// (number, string or object) and are kept as raw JSON.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OrderLineItem {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub product_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub variant_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sku: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde_as(as = "DefaultOnNull")]
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Value>,
}

impl From<&OrderSubtotalItem> for OrderLineItem {
    fn from(item: &OrderSubtotalItem) -> Self {
        let variant_id = if item.item_variation_key.is_empty() {
            &item.item_variation_id
        } else {
            &item.item_variation_key
        };
        let unit_price = item.item_price.as_ref().or(item.price.as_ref());
        let (title, sku) = item
            .item_data
            .as_ref()
            .map(title_and_sku)
            .unwrap_or_default();
        OrderLineItem {
            id: item.id.trim().to_string(),
            product_id: item.item_id.trim().to_string(),
            variant_id: variant_id.trim().to_string(),
            sku,
            title,
            quantity: item.quantity,
            price: unit_price.and_then(|p| serde_json::to_value(p).ok()),
            currency: unit_price
                .map(|p| p.currency_iso.clone())
                .unwrap_or_default(),
            total: item
                .total_price
                .as_ref()
                .and_then(|p| serde_json::to_value(p).ok()),
        }
    }
}

/// Pulls a display title and SKU out of `item_data`.
fn title_and_sku(data: &Value) -> (String, String) {
    let sku = text_at(data, "/variation_data/sku");
    let title = [
        "/variation_data/title",
        "/product_data/title",
        "/variation_data/title_translations",
        "/product_data/title_translations",
    ]
    .iter()
    .map(|pointer| text_at(data, pointer))
    .find(|title| !title.is_empty())
    .unwrap_or_default();
    (title, sku)
}

/// Reads a string, or a translation map keyed by locale, at `pointer`.
fn text_at(data: &Value, pointer: &str) -> String {
    match data.pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(map)) => ["en", "en-US", "default"]
            .iter()
            .find_map(|locale| map.get(*locale).and_then(Value::as_str))
            .or_else(|| map.values().find_map(Value::as_str))
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

/// A line of [`OrderCreateRequest`].
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OrderItem {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub variation_id: Option<String>,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
}

/// Body of `POST /orders`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OrderCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub customer_email: Option<String>,
    pub line_items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

/// Body of `PATCH /orders/{id}`. Only `Some` fields are sent.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OrderUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub billing_address: Option<Address>,
}

/// Tags attached to an order.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderTags {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_items_derived_from_subtotal_items() {
        let json = r#"{
            "id": "ord_1",
            "subtotal_items": [{
                "id": " li_1 ",
                "item_id": "prod_1",
                "item_variation_id": "var_1",
                "item_variation_key": "key_1",
                "quantity": 2,
                "item_price": {"cents": 1000, "currency_iso": "TWD", "dollars": 10.0},
                "total_price": {"cents": 2000, "currency_iso": "TWD", "dollars": 20.0},
                "item_data": {
                    "variation_data": {"sku": "SKU-1"},
                    "product_data": {"title_translations": {"zh-hant": "杯子", "en": "Mug"}}
                }
            }]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.line_items.len(), 1);
        let li = &order.line_items[0];
        assert_eq!(li.id, "li_1");
        assert_eq!(li.product_id, "prod_1");
        assert_eq!(li.variant_id, "key_1");
        assert_eq!(li.quantity, 2);
        assert_eq!(li.sku, "SKU-1");
        assert_eq!(li.title, "Mug");
        assert_eq!(li.currency, "TWD");
        assert_eq!(li.price.as_ref().unwrap()["cents"], 1000);
        assert_eq!(li.total.as_ref().unwrap()["cents"], 2000);
    }

    #[test]
    fn explicit_line_items_are_kept() {
        let json = r#"{
            "id": "ord_1",
            "line_items": [{"id": "li_9", "title": "Given"}],
            "subtotal_items": [{"id": "li_1", "item_id": "prod_1"}]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].title, "Given");
    }

    #[test]
    fn missing_line_items_become_empty() {
        let order: Order = serde_json::from_str(r#"{"id":"ord_1"}"#).unwrap();
        assert!(order.line_items.is_empty());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["line_items"], serde_json::json!([]));
    }

    #[test]
    fn variant_falls_back_to_variation_id() {
        let item = OrderSubtotalItem {
            item_variation_id: "var_1".into(),
            ..Default::default()
        };
        assert_eq!(OrderLineItem::from(&item).variant_id, "var_1");
    }
}
