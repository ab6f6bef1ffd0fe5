use crate::domain::order::{CaptureResult, OrderCreation, OrderId};
use crate::domain::ports::PaymentGateway;
use crate::domain::product::{Product, ProductId};
use crate::error::{CAPTURE_FALLBACK_MESSAGE, Result, StorefrontError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// A call received by [`InMemoryPaymentGateway`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    ListProducts,
    CreateOrder(ProductId),
    CaptureOrder(OrderId),
}

/// A scripted, in-process payment gateway.
///
/// Responses are fixed at construction; every call is recorded in a log shared
/// between clones (`Arc<RwLock<Vec<GatewayCall>>>`), so a test can hand one clone
/// to a flow and inspect the calls through another.
#[derive(Default, Clone)]
pub struct InMemoryPaymentGateway {
    products: Vec<Product>,
    catalog_unavailable: bool,
    orders: HashMap<ProductId, OrderCreation>,
    captures: HashMap<OrderId, std::result::Result<CaptureResult, Option<String>>>,
    capture_delay: Option<Duration>,
    calls: Arc<RwLock<Vec<GatewayCall>>>,
}

impl InMemoryPaymentGateway {
    /// Creates a gateway with an empty catalog and no scripted orders.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Makes `list_products` fail with a transport error.
    pub fn with_catalog_unavailable(mut self) -> Self {
        self.catalog_unavailable = true;
        self
    }

    /// Scripts the order returned when `product_id` is purchased.
    /// Unscripted products fail order creation.
    pub fn with_order(mut self, product_id: ProductId, order: OrderCreation) -> Self {
        self.orders.insert(product_id, order);
        self
    }

    pub fn with_capture(mut self, order_id: OrderId, result: CaptureResult) -> Self {
        self.captures.insert(order_id, Ok(result));
        self
    }

    /// Scripts a rejected capture. `None` models a backend error without a message body.
    pub fn with_capture_failure(mut self, order_id: OrderId, message: Option<&str>) -> Self {
        self.captures
            .insert(order_id, Err(message.map(str::to_string)));
        self
    }

    /// Holds every capture for `delay` before answering.
    pub fn with_capture_delay(mut self, delay: Duration) -> Self {
        self.capture_delay = Some(delay);
        self
    }

    pub async fn calls(&self) -> Vec<GatewayCall> {
        self.calls.read().await.clone()
    }

    pub async fn create_order_calls(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|call| matches!(call, GatewayCall::CreateOrder(_)))
            .count()
    }

    pub async fn capture_calls(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|call| matches!(call, GatewayCall::CaptureOrder(_)))
            .count()
    }

    async fn record(&self, call: GatewayCall) {
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn list_products(&self) -> Result<Vec<Product>> {
        self.record(GatewayCall::ListProducts).await;
        if self.catalog_unavailable {
            return Err(StorefrontError::Transport(
                "listing products returned 503 Service Unavailable".to_string(),
            ));
        }
        Ok(self.products.clone())
    }

    async fn create_order(&self, product_id: ProductId) -> Result<OrderCreation> {
        self.record(GatewayCall::CreateOrder(product_id)).await;
        self.orders.get(&product_id).cloned().ok_or_else(|| {
            StorefrontError::Transport("creating order returned 400 Bad Request".to_string())
        })
    }

    async fn capture_order(&self, order_id: &OrderId) -> Result<CaptureResult> {
        self.record(GatewayCall::CaptureOrder(order_id.clone())).await;
        if let Some(delay) = self.capture_delay {
            tokio::time::sleep(delay).await;
        }
        match self.captures.get(order_id) {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(Some(message))) => Err(StorefrontError::Capture(message.clone())),
            Some(Err(None)) | None => Err(StorefrontError::Capture(
                CAPTURE_FALLBACK_MESSAGE.to_string(),
            )),
        }
    }
}
