use std::time::Duration;

use serde_json::json;
use shopline_api::paginate::fetch_pages;
use shopline_api::types::{
    CustomerCreateRequest, CustomerUpdateRequest, OrderCreateRequest, OrderItem,
    OrderUpdateRequest, ShipmentCreateRequest, ShipmentUpdateRequest, WebhookCreateRequest,
    WebhookFormat, WebhookUpdateRequest,
};
use shopline_api::{
    Client, CustomerQuery, CustomerSearchQuery, Error, MerchantStaffQuery, OrderQuery,
    OrderSearchQuery, PaymentQuery, Query, ShipmentQuery, WebhookQuery,
};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "test-token")
}

async fn assert_no_requests(server: &MockServer) {
    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty(), "unexpected requests: {}", received.len());
}

#[tokio::test]
async fn list_orders_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("orders.json");

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "2"))
        .and(query_param("status", "confirmed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let query = OrderQuery::default()
        .with_status("confirmed")
        .with_page(1)
        .with_page_size(2);
    let resp = client_for(&mock_server).list_orders(&query).await.unwrap();

    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].id, "ord_123");
    assert_eq!(resp.items[1].total_price, "350.50");
    assert_eq!(resp.page, 1);
    assert_eq!(resp.page_size, 2);
    assert_eq!(resp.total_count, 5);
    assert!(resp.has_more);
}

#[tokio::test]
async fn default_query_sends_no_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param_is_missing("page"))
        .and(query_param_is_missing("page_size"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[]}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resp = client_for(&mock_server)
        .list_orders(&OrderQuery::default())
        .await
        .unwrap();
    assert!(resp.is_empty());
    assert!(!resp.has_more);
}

#[tokio::test]
async fn requests_carry_auth_and_json_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/ord_123"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("x-shopline-access-token", "test-token"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("order_detail.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server).get_order("ord_123").await.unwrap();
}

#[tokio::test]
async fn get_order_derives_line_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/ord_123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("order_detail.json")))
        .mount(&mock_server)
        .await;

    let order = client_for(&mock_server).get_order("ord_123").await.unwrap();
    assert_eq!(order.order_number, "1001");
    assert_eq!(order.tags, vec!["vip", "repeat"]);
    assert_eq!(order.line_items.len(), 1);
    let item = &order.line_items[0];
    assert_eq!(item.product_id, "prod_9");
    assert_eq!(item.variant_id, "var_9");
    assert_eq!(item.quantity, 3);
    assert_eq!(item.sku, "MUG-BLUE");
    assert_eq!(item.title, "Ceramic Mug");
    assert_eq!(item.currency, "TWD");
}

#[tokio::test]
async fn search_orders_sends_query_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/search"))
        .and(query_param("query", "amy"))
        .and(query_param("status", "confirmed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("orders.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = OrderSearchQuery::default()
        .with_query("amy")
        .with_status("confirmed");
    let resp = client_for(&mock_server).search_orders(&query).await.unwrap();
    assert_eq!(resp.len(), 2);
}

#[tokio::test]
async fn update_order_patches_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/orders/ord_123"))
        .and(body_json(json!({"note": "gift wrap"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ord_123", "note": "gift wrap"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let req = OrderUpdateRequest {
        note: Some("gift wrap".into()),
        ..Default::default()
    };
    let order = client_for(&mock_server)
        .update_order("ord_123", &req)
        .await
        .unwrap();
    assert_eq!(order.note, "gift wrap");
}

#[tokio::test]
async fn update_order_status_sends_status_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/orders/ord_123/status"))
        .and(body_json(json!({"status": "completed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ord_123", "status": "completed"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let order = client_for(&mock_server)
        .update_order_status("ord_123", "completed")
        .await
        .unwrap();
    assert_eq!(order.status, "completed");
}

#[tokio::test]
async fn cancel_order_accepts_empty_and_json_bodies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/orders/ord_1/cancel"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/orders/ord_2/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ord_2", "status": "cancelled"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.cancel_order("ord_1").await.unwrap();
    client.cancel_order("ord_2").await.unwrap();
}

#[tokio::test]
async fn order_tags_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/ord_123/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": ["vip"]})))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/orders/ord_123/tags"))
        .and(body_json(json!({"tags": ["vip", "wholesale"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ord_123", "tags": ["vip", "wholesale"]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let tags = client.get_order_tags("ord_123").await.unwrap();
    assert_eq!(tags.tags, vec!["vip"]);

    let order = client
        .update_order_tags("ord_123", &["vip".to_string(), "wholesale".to_string()])
        .await
        .unwrap();
    assert_eq!(order.tags.len(), 2);
}

#[tokio::test]
async fn list_customers_with_legacy_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("accepts_marketing", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("customers.json")))
        .mount(&mock_server)
        .await;

    let query = CustomerQuery::default().with_accepts_marketing(false);
    let resp = client_for(&mock_server).list_customers(&query).await.unwrap();
    assert_eq!(resp.page_size, 20);
    assert_eq!(resp.total_count, 1);
    assert!(!resp.has_more);
    assert_eq!(resp.items[0].full_name(), "Amy Chen");
    assert_eq!(resp.items[0].credit_balance, Some(150.0));
}

#[tokio::test]
async fn create_and_delete_customer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({"email": "new@example.com", "first_name": "New"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "cust_9", "email": "new@example.com"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/customers/cust_9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let req = CustomerCreateRequest {
        email: "new@example.com".into(),
        first_name: "New".into(),
        ..Default::default()
    };
    let customer = client.create_customer(&req).await.unwrap();
    assert_eq!(customer.id, "cust_9");
    client.delete_customer("cust_9").await.unwrap();
}

#[tokio::test]
async fn payments_list_and_refund() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments"))
        .and(query_param("gateway", "stripe"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("payments.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payments/pay_1/refund"))
        .and(body_json(json!({"amount": "100.00", "reason": "damaged"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_1", "status": "refunded"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let resp = client
        .list_payments(&PaymentQuery::default().with_gateway("stripe"))
        .await
        .unwrap();
    assert_eq!(resp.items[0].amount, "1200.00");
    assert_eq!(resp.items[0].credit_card.as_ref().unwrap().last4, "4242");

    let refunded = client
        .refund_payment("pay_1", "100.00", "damaged")
        .await
        .unwrap();
    assert_eq!(refunded.status, "refunded");
}

#[tokio::test]
async fn capture_and_void_payment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/payments/pay_1/capture"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_1", "status": "captured"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payments/pay_2/void"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_2", "status": "voided"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.capture_payment("pay_1", "").await.unwrap().status, "captured");
    assert_eq!(client.void_payment("pay_2").await.unwrap().status, "voided");
}

#[tokio::test]
async fn list_order_payments_uses_order_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/ord_123/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("payments.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resp = client_for(&mock_server)
        .list_order_payments("ord_123")
        .await
        .unwrap();
    assert_eq!(resp.items[0].order_id, "ord_123");
}

#[tokio::test]
async fn shipments_crud() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shipments"))
        .and(query_param("order_id", "ord_123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("shipments.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/shipments"))
        .and(body_json(json!({"order_id": "ord_123", "tracking_number": "TRK0002"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "ship_124", "order_id": "ord_123"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/shipments/ship_123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let resp = client
        .list_shipments(&ShipmentQuery::default().with_order_id("ord_123"))
        .await
        .unwrap();
    assert_eq!(resp.items[0].tracking_company, "Black Cat");
    assert!(resp.items[0].shipped_at.is_some());

    let created = client
        .create_shipment(&ShipmentCreateRequest {
            order_id: "ord_123".into(),
            tracking_number: "TRK0002".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "ship_124");
    client.delete_shipment("ship_123").await.unwrap();
}

#[tokio::test]
async fn webhooks_list_create_update() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .and(query_param("topic", "orders/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("webhooks.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .and(body_json(json!({"address": "https://hooks.example.com/new", "topic": "orders/paid"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "wh_200", "topic": "orders/paid"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/webhooks/wh_123"))
        .and(body_json(json!({"format": "xml"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "wh_123", "format": "xml"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let resp = client
        .list_webhooks(&WebhookQuery::default().with_topic("orders/create"))
        .await
        .unwrap();
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[1].format, WebhookFormat::Xml);

    let created = client
        .create_webhook(&WebhookCreateRequest {
            address: "https://hooks.example.com/new".into(),
            topic: "orders/paid".into(),
            format: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, "wh_200");

    let updated = client
        .update_webhook(
            "wh_123",
            &WebhookUpdateRequest {
                format: Some(WebhookFormat::Xml),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.format, WebhookFormat::Xml);
}

#[tokio::test]
async fn get_merchant_returns_first_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchants"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("merchants.json")))
        .mount(&mock_server)
        .await;

    let merchant = client_for(&mock_server).get_merchant().await.unwrap();
    assert_eq!(merchant.id, "mer_1");
    assert_eq!(merchant.timezone, "Asia/Taipei");
    assert!(merchant.taxes_included);
}

#[tokio::test]
async fn get_merchant_empty_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchants"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[]}"#))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).get_merchant().await.unwrap_err();
    assert!(matches!(err, Error::NotFound("merchant")));
    assert_eq!(err.to_string(), "no merchant found");
}

#[tokio::test]
async fn list_merchant_staff_filters_active() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchant/staff"))
        .and(query_param("active", "true"))
        .and(query_param("role", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("staff.json")))
        .mount(&mock_server)
        .await;

    let query = MerchantStaffQuery::default()
        .with_role("admin")
        .with_active(true);
    let resp = client_for(&mock_server)
        .list_merchant_staff(&query)
        .await
        .unwrap();
    assert_eq!(resp.items[0].permissions, vec!["orders", "products"]);
    assert_eq!(resp.page_size, 50);
}

#[tokio::test]
async fn not_found_uses_json_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"code":"NOT_FOUND","message":"Order not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).get_order("missing").await.unwrap_err();
    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "NOT_FOUND");
            assert_eq!(message, "Order not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn bad_request_without_json_gets_http_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid json"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .create_customer(&CustomerCreateRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    match err {
        Error::Api { code, .. } => assert_eq!(code, "HTTP_400"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .list_orders(&OrderQuery::default())
        .await
        .unwrap_err();
    match err {
        Error::Api { status, code, .. } => {
            assert_eq!(status, 500);
            assert_eq!(code, "HTTP_500");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .list_orders(&OrderQuery::default())
        .await
        .unwrap_err();
    match err {
        Error::RateLimited { retry_after } => assert_eq!(retry_after, Duration::from_secs(7)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_without_header_defaults_to_one_second() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .list_webhooks(&WebhookQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::RateLimited { retry_after } if retry_after == Duration::from_secs(1)
    ));
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .list_orders(&OrderQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn blank_ids_are_rejected_before_any_request() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    assert!(matches!(
        client.get_order("").await,
        Err(Error::MissingArgument("order id"))
    ));
    assert!(matches!(
        client.cancel_order("  ").await,
        Err(Error::MissingArgument("order id"))
    ));
    assert!(matches!(
        client.get_customer("").await,
        Err(Error::MissingArgument("customer id"))
    ));
    assert!(matches!(
        client.refund_payment("", "1.00", "").await,
        Err(Error::MissingArgument("payment id"))
    ));
    assert!(matches!(
        client.delete_shipment("").await,
        Err(Error::MissingArgument("shipment id"))
    ));
    assert!(matches!(
        client.delete_webhook("\t").await,
        Err(Error::MissingArgument("webhook id"))
    ));
    assert!(matches!(
        client.get_merchant_staff("").await,
        Err(Error::MissingArgument("staff id"))
    ));
    assert!(matches!(
        client.create_webhook(&WebhookCreateRequest::default()).await,
        Err(Error::MissingArgument("webhook address"))
    ));

    assert_no_requests(&mock_server).await;
}

#[tokio::test]
async fn unreachable_server_is_request_failed() {
    let client = Client::with_base_url("http://127.0.0.1:1", "t");
    let err = client.list_orders(&OrderQuery::default()).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
}

#[tokio::test]
async fn create_order_posts_line_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_json(json!({
            "customer_id": "cust_1",
            "line_items": [{"product_id": "prod_9", "quantity": 2}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "ord_900", "status": "pending"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let req = OrderCreateRequest {
        customer_id: Some("cust_1".into()),
        line_items: vec![OrderItem {
            product_id: "prod_9".into(),
            quantity: 2,
            ..Default::default()
        }],
        ..Default::default()
    };
    let order = client_for(&mock_server).create_order(&req).await.unwrap();
    assert_eq!(order.id, "ord_900");
    assert!(order.line_items.is_empty());
}

#[tokio::test]
async fn search_and_update_customer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/search"))
        .and(query_param("phone", "+886912345678"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("customers.json")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/customers/cust_1"))
        .and(body_json(json!({"note": "prefers email", "tags": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "cust_1", "note": "prefers email"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let found = client
        .search_customers(&CustomerSearchQuery::default().with_phone("+886912345678"))
        .await
        .unwrap();
    assert_eq!(found.items[0].id, "cust_1");

    let req = CustomerUpdateRequest {
        note: Some("prefers email".into()),
        tags: Some(vec![]),
        ..Default::default()
    };
    let updated = client.update_customer("cust_1", &req).await.unwrap();
    assert_eq!(updated.note, "prefers email");
}

#[tokio::test]
async fn single_resource_getters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/payments/pay_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pay_1", "amount": "10.00"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shipments/ship_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ship_123", "status": "delivered"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/webhooks/wh_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "wh_123", "topic": "orders/create"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/merchant/staff/staff_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "staff_1", "role": "admin"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.get_payment("pay_1").await.unwrap().amount, "10.00");
    assert_eq!(client.get_shipment("ship_123").await.unwrap().status, "delivered");
    assert_eq!(client.get_webhook("wh_123").await.unwrap().format, WebhookFormat::Json);
    assert_eq!(client.get_merchant_staff("staff_1").await.unwrap().role, "admin");
}

#[tokio::test]
async fn update_shipment_and_delete_webhook() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/shipments/ship_123"))
        .and(body_json(json!({"status": "delivered"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ship_123", "status": "delivered"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/webhooks/wh_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let req = ShipmentUpdateRequest {
        status: "delivered".into(),
        ..Default::default()
    };
    assert_eq!(
        client.update_shipment("ship_123", &req).await.unwrap().status,
        "delivered"
    );
    client.delete_webhook("wh_123").await.unwrap();
}

#[tokio::test]
async fn list_merchants_returns_all_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchants"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("merchants.json")))
        .mount(&mock_server)
        .await;

    let merchants = client_for(&mock_server).list_merchants().await.unwrap();
    assert_eq!(merchants.len(), 1);
    assert_eq!(merchants[0].name, "Tea House");
}

#[tokio::test]
async fn fetch_pages_walks_the_order_list() {
    let mock_server = MockServer::start().await;

    for (page, ids, total_pages) in [(1, ["a", "b"], 2), (2, ["c", "d"], 2)] {
        Mock::given(method("GET"))
            .and(path("/orders"))
            .and(query_param("page", page.to_string()))
            .and(query_param("page_size", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"id": ids[0]}, {"id": ids[1]}],
                "pagination": {"current_page": page, "per_page": 2, "total_count": 4, "total_pages": total_pages}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let resp = fetch_pages(1, 2, 3, |page, size| {
        let query = OrderQuery::default().with_page(page).with_page_size(size);
        let client = &client;
        async move { client.list_orders(&query).await }
    })
    .await
    .unwrap();

    let ids: Vec<&str> = resp.items.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(resp.has_more);
    assert_eq!(resp.total_count, 4);
}
