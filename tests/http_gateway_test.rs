mod common;

use common::{gateway_for, mount_capture, mount_catalog, mount_create_order, mug_capture, mug_catalog};
use rust_decimal_macros::dec;
use serde_json::json;
use storefront_checkout::config::GatewayConfig;
use storefront_checkout::domain::order::OrderId;
use storefront_checkout::domain::ports::PaymentGateway;
use storefront_checkout::domain::product::ProductId;
use storefront_checkout::error::{CAPTURE_FALLBACK_MESSAGE, StorefrontError};
use storefront_checkout::infrastructure::http::HttpPaymentGateway;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_products() {
    let server = MockServer::start().await;
    mount_catalog(&server, mug_catalog()).await;

    let products = gateway_for(&server).list_products().await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, ProductId(1));
    assert_eq!(products[0].name, "Mug");
    assert_eq!(products[0].price, dec!(9.99));
}

#[tokio::test]
async fn test_list_products_non_success_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&server)
        .await;

    let result = gateway_for(&server).list_products().await;
    assert!(matches!(result, Err(StorefrontError::Transport(_))));
}

#[tokio::test]
async fn test_create_order_sends_product_id() {
    let server = MockServer::start().await;
    mount_create_order(&server, 1, "O1", 1).await;

    let order = gateway_for(&server).create_order(ProductId(1)).await.unwrap();

    assert_eq!(order.order_id, OrderId::from("O1"));
    assert_eq!(order.approval_url.as_str(), "https://paypal.test/approve?token=O1");
}

#[tokio::test]
async fn test_create_order_failure_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/paypal/create-order"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid product id" })),
        )
        .mount(&server)
        .await;

    let result = gateway_for(&server).create_order(ProductId(42)).await;
    assert!(matches!(result, Err(StorefrontError::Transport(_))));
}

#[tokio::test]
async fn test_capture_order() {
    let server = MockServer::start().await;
    mount_capture(&server, "O1", ResponseTemplate::new(200).set_body_json(mug_capture()), 1).await;

    let result = gateway_for(&server)
        .capture_order(&OrderId::from("O1"))
        .await
        .unwrap();

    assert_eq!(result.product_name, "Mug");
    assert_eq!(result.amount, dec!(9.99));
    assert_eq!(result.currency_code, "USD");
    assert_eq!(result.status, "COMPLETED");
}

#[tokio::test]
async fn test_capture_order_encodes_token() {
    let server = MockServer::start().await;
    mount_capture(
        &server,
        "O 1&x=2",
        ResponseTemplate::new(200).set_body_json(mug_capture()),
        1,
    )
    .await;

    let result = gateway_for(&server)
        .capture_order(&OrderId::from("O 1&x=2"))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_capture_error_surfaces_server_message() {
    let server = MockServer::start().await;
    mount_capture(
        &server,
        "O1",
        ResponseTemplate::new(502).set_body_json(json!({ "message": "Order already captured" })),
        1,
    )
    .await;

    let result = gateway_for(&server).capture_order(&OrderId::from("O1")).await;
    match result {
        Err(StorefrontError::Capture(message)) => assert_eq!(message, "Order already captured"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_capture_error_without_message_uses_fallback() {
    let server = MockServer::start().await;
    mount_capture(
        &server,
        "O1",
        ResponseTemplate::new(500).set_body_string("<html>gateway down</html>"),
        1,
    )
    .await;
    mount_capture(
        &server,
        "O2",
        ResponseTemplate::new(422).set_body_json(json!({ "error": "UNPROCESSABLE" })),
        1,
    )
    .await;

    let gateway = gateway_for(&server);
    for order in ["O1", "O2"] {
        let result = gateway.capture_order(&OrderId::from(order)).await;
        match result {
            Err(StorefrontError::Capture(message)) => assert_eq!(message, CAPTURE_FALLBACK_MESSAGE),
            other => panic!("unexpected result for {order}: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let gateway = HttpPaymentGateway::new(GatewayConfig::new("http://127.0.0.1:1").unwrap());

    let result = gateway.capture_order(&OrderId::from("O1")).await;
    assert!(matches!(result, Err(StorefrontError::Transport(_))));
}

#[tokio::test]
async fn test_base_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backend/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mug_catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let config = GatewayConfig::new(&format!("{}/backend", server.uri())).unwrap();
    let products = HttpPaymentGateway::new(config).list_products().await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Mug");
}
