#![allow(dead_code)]

use serde_json::{Value, json};
use storefront_checkout::config::GatewayConfig;
use storefront_checkout::infrastructure::http::HttpPaymentGateway;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn gateway_for(server: &MockServer) -> HttpPaymentGateway {
    HttpPaymentGateway::new(GatewayConfig::new(&server.uri()).unwrap())
}

pub fn mug_catalog() -> Value {
    json!([{ "id": 1, "name": "Mug", "price": 9.99 }])
}

pub fn mug_capture() -> Value {
    json!({
        "productName": "Mug",
        "amount": "9.99",
        "currencyCode": "USD",
        "status": "COMPLETED"
    })
}

pub async fn mount_catalog(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Order creation for `product_id`, answered at most `times` times.
pub async fn mount_create_order(server: &MockServer, product_id: u64, order_id: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/paypal/create-order"))
        .and(body_json(json!({ "productId": product_id })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": order_id,
            "approvalUrl": format!("https://paypal.test/approve?token={order_id}"),
        })))
        .expect(times)
        .mount(server)
        .await;
}

/// Capture of `order_id`, expected exactly `times` times.
pub async fn mount_capture(server: &MockServer, order_id: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/paypal/capture-order"))
        .and(query_param("orderId", order_id))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}
