use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use shopline_api::types::{
    Customer, ListResponse, Merchant, Order, OrderLineItem, OrderSummary, Payment, Shipment,
    Webhook,
};
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct OrderRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Payment")]
    #[serde(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Fulfillment")]
    #[serde(rename = "Fulfillment")]
    fulfillment: String,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
    #[tabled(rename = "Customer")]
    #[serde(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct LineItemRow {
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "SKU")]
    #[serde(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Qty")]
    #[serde(rename = "Qty")]
    quantity: i64,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
}

/// One CSV line per line item, each carrying the order it belongs to.
#[derive(Serialize)]
struct OrderCsvRow {
    #[serde(rename = "Order ID")]
    order_id: String,
    #[serde(rename = "Number")]
    number: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Payment")]
    payment: String,
    #[serde(rename = "Order Total")]
    order_total: String,
    #[serde(rename = "Customer")]
    customer: String,
    #[serde(rename = "Created")]
    created: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "SKU")]
    sku: String,
    #[serde(rename = "Qty")]
    quantity: Option<i64>,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Total")]
    total: String,
}

#[derive(Tabled, Serialize)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Orders")]
    #[serde(rename = "Orders")]
    orders: i64,
    #[tabled(rename = "Spent")]
    #[serde(rename = "Spent")]
    spent: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
}

#[derive(Tabled, Serialize)]
struct PaymentRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Order")]
    #[serde(rename = "Order")]
    order_id: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Gateway")]
    #[serde(rename = "Gateway")]
    gateway: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct ShipmentRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Order")]
    #[serde(rename = "Order")]
    order_id: String,
    #[tabled(rename = "Carrier")]
    #[serde(rename = "Carrier")]
    carrier: String,
    #[tabled(rename = "Tracking")]
    #[serde(rename = "Tracking")]
    tracking: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Shipped")]
    #[serde(rename = "Shipped")]
    shipped: String,
}

#[derive(Tabled, Serialize)]
struct WebhookRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Topic")]
    #[serde(rename = "Topic")]
    topic: String,
    #[tabled(rename = "Address")]
    #[serde(rename = "Address")]
    address: String,
    #[tabled(rename = "Format")]
    #[serde(rename = "Format")]
    format: String,
}

#[derive(Tabled, Serialize)]
struct MerchantRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Handle")]
    #[serde(rename = "Handle")]
    handle: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Currency")]
    #[serde(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Timezone")]
    #[serde(rename = "Timezone")]
    timezone: String,
    #[tabled(rename = "Plan")]
    #[serde(rename = "Plan")]
    plan: String,
}

// -- Row builders --

fn build_order_rows(orders: &[OrderSummary]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            id: o.id.clone(),
            number: o.order_number.clone(),
            status: o.status.clone(),
            payment: o.payment_status.clone(),
            fulfillment: o.fulfill_status.clone(),
            total: format_amount(&o.total_price, &o.currency),
            customer: customer_label(&o.customer_name, &o.customer_email),
            created: format_time(o.created_at),
        })
        .collect()
}

fn build_order_detail_row(order: &Order) -> OrderRow {
    OrderRow {
        id: order.id.clone(),
        number: order.order_number.clone(),
        status: order.status.clone(),
        payment: order.payment_status.clone(),
        fulfillment: order.fulfill_status.clone(),
        total: format_amount(&order.total_price, &order.currency),
        customer: customer_label(&order.customer_name, &order.customer_email),
        created: format_time(order.created_at),
    }
}

fn build_line_item_rows(items: &[OrderLineItem]) -> Vec<LineItemRow> {
    items
        .iter()
        .map(|li| LineItemRow {
            title: li.title.clone(),
            sku: li.sku.clone(),
            quantity: li.quantity,
            price: li.price.as_ref().map(format_price).unwrap_or_default(),
            total: li.total.as_ref().map(format_price).unwrap_or_default(),
        })
        .collect()
}

/// An order without line items still yields one row.
fn build_order_csv_rows(order: &Order) -> Vec<OrderCsvRow> {
    let head = build_order_detail_row(order);
    let row = |li: Option<LineItemRow>| OrderCsvRow {
        order_id: head.id.clone(),
        number: head.number.clone(),
        status: head.status.clone(),
        payment: head.payment.clone(),
        order_total: head.total.clone(),
        customer: head.customer.clone(),
        created: head.created.clone(),
        quantity: li.as_ref().map(|li| li.quantity),
        title: li.as_ref().map(|li| li.title.clone()).unwrap_or_default(),
        sku: li.as_ref().map(|li| li.sku.clone()).unwrap_or_default(),
        price: li.as_ref().map(|li| li.price.clone()).unwrap_or_default(),
        total: li.map(|li| li.total).unwrap_or_default(),
    };
    let items = build_line_item_rows(&order.line_items);
    if items.is_empty() {
        vec![row(None)]
    } else {
        items.into_iter().map(|li| row(Some(li))).collect()
    }
}

fn build_customer_rows(customers: &[Customer]) -> Vec<CustomerRow> {
    customers
        .iter()
        .map(|c| CustomerRow {
            id: c.id.clone(),
            name: c.full_name(),
            email: c.email.clone(),
            orders: c.orders_count,
            spent: format_amount(&c.total_spent, &c.currency),
            state: c.state.clone(),
        })
        .collect()
}

fn build_payment_rows(payments: &[Payment]) -> Vec<PaymentRow> {
    payments
        .iter()
        .map(|p| PaymentRow {
            id: p.id.clone(),
            order_id: p.order_id.clone(),
            amount: format_amount(&p.amount, &p.currency),
            status: p.status.clone(),
            gateway: p.gateway.clone(),
            created: format_time(p.created_at),
        })
        .collect()
}

fn build_shipment_rows(shipments: &[Shipment]) -> Vec<ShipmentRow> {
    shipments
        .iter()
        .map(|s| ShipmentRow {
            id: s.id.clone(),
            order_id: s.order_id.clone(),
            carrier: s.tracking_company.clone(),
            tracking: s.tracking_number.clone(),
            status: s.status.clone(),
            shipped: format_time(s.shipped_at),
        })
        .collect()
}

fn build_webhook_rows(webhooks: &[Webhook]) -> Vec<WebhookRow> {
    webhooks
        .iter()
        .map(|w| WebhookRow {
            id: w.id.clone(),
            topic: w.topic.clone(),
            address: w.address.clone(),
            format: w.format.to_string(),
        })
        .collect()
}

fn build_merchant_rows(merchants: &[Merchant]) -> Vec<MerchantRow> {
    merchants
        .iter()
        .map(|m| MerchantRow {
            id: m.id.clone(),
            name: m.name.clone(),
            handle: m.handle.clone(),
            email: m.email.clone(),
            currency: m.currency.clone(),
            timezone: m.timezone.clone(),
            plan: if m.plan_display_name.is_empty() {
                m.plan.clone()
            } else {
                m.plan_display_name.clone()
            },
        })
        .collect()
}

// -- Printers --

pub fn print_orders(orders: &[OrderSummary], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(orders),
        OutputFormat::Table => print_table(build_order_rows(orders)),
        OutputFormat::Csv => print_csv(&build_order_rows(orders))?,
    }
    Ok(())
}

/// Prints the order header, then its line items.
pub fn print_order(order: &Order, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(order),
        OutputFormat::Table => {
            print_table(vec![build_order_detail_row(order)]);
            if let Some(addr) = &order.shipping_address {
                println!("Ship to: {}", addr.one_line());
            }
            if !order.line_items.is_empty() {
                print_table(build_line_item_rows(&order.line_items));
            }
        }
        OutputFormat::Csv => print_csv(&build_order_csv_rows(order))?,
    }
    Ok(())
}

pub fn print_customers(customers: &[Customer], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(customers),
        OutputFormat::Table => print_table(build_customer_rows(customers)),
        OutputFormat::Csv => print_csv(&build_customer_rows(customers))?,
    }
    Ok(())
}

pub fn print_payments(payments: &[Payment], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(payments),
        OutputFormat::Table => print_table(build_payment_rows(payments)),
        OutputFormat::Csv => print_csv(&build_payment_rows(payments))?,
    }
    Ok(())
}

pub fn print_shipments(shipments: &[Shipment], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(shipments),
        OutputFormat::Table => print_table(build_shipment_rows(shipments)),
        OutputFormat::Csv => print_csv(&build_shipment_rows(shipments))?,
    }
    Ok(())
}

pub fn print_webhooks(webhooks: &[Webhook], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(webhooks),
        OutputFormat::Table => print_table(build_webhook_rows(webhooks)),
        OutputFormat::Csv => print_csv(&build_webhook_rows(webhooks))?,
    }
    Ok(())
}

pub fn print_merchant(merchant: &Merchant, format: &OutputFormat) -> Result<()> {
    let merchants = std::slice::from_ref(merchant);
    match format {
        OutputFormat::Json => print_json(merchant),
        OutputFormat::Table => print_table(build_merchant_rows(merchants)),
        OutputFormat::Csv => print_csv(&build_merchant_rows(merchants))?,
    }
    Ok(())
}

/// Writes the paging line for a list response to stderr.
pub fn print_page_summary<T>(resp: &ListResponse<T>, noun: &str) {
    eprintln!("{}", page_summary(resp, noun));
}

fn page_summary<T>(resp: &ListResponse<T>, noun: &str) -> String {
    let page = resp.page.max(1);
    let total = if resp.total_count > 0 {
        resp.total_count
    } else {
        resp.len() as i64
    };
    if resp.has_more {
        format!("Page {} ({} total {}, more available)", page, total, noun)
    } else {
        format!("Page {} ({} total {})", page, total, noun)
    }
}

fn print_table<R: Tabled>(rows: Vec<R>) {
    println!("{}", Table::new(rows));
}

fn print_csv<R: Serialize>(rows: &[R]) -> Result<()> {
    let stdout = std::io::stdout();
    write_csv(rows, stdout.lock())
}

fn write_csv<R: Serialize, W: Write>(rows: &[R], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn format_amount(amount: &str, currency: &str) -> String {
    match (amount.is_empty(), currency.is_empty()) {
        (true, _) => String::new(),
        (false, true) => amount.to_string(),
        (false, false) => format!("{} {}", amount, currency),
    }
}

/// Renders a line-item price, which may be a number, a string, or a
/// price object with `label` / `dollars` fields.
fn format_price(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => {
            if let Some(label) = map.get("label").and_then(Value::as_str).filter(|l| !l.is_empty()) {
                return label.to_string();
            }
            let currency = map.get("currency_iso").and_then(Value::as_str).unwrap_or_default();
            match map.get("dollars").and_then(Value::as_f64) {
                Some(d) => format_amount(&format!("{:.2}", d), currency),
                None => String::new(),
            }
        }
        _ => String::new(),
    }
}

fn customer_label(name: &str, email: &str) -> String {
    match (name.is_empty(), email.is_empty()) {
        (false, false) => format!("{} <{}>", name, email),
        (false, true) => name.to_string(),
        (true, _) => email.to_string(),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
