use super::order::{CaptureResult, OrderCreation, OrderId};
use super::product::{Product, ProductId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// The three remote calls the storefront makes against its backend.
///
/// Each call is a single outbound request: no caching, no retry.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>>;
    async fn create_order(&self, product_id: ProductId) -> Result<OrderCreation>;
    async fn capture_order(&self, order_id: &OrderId) -> Result<CaptureResult>;
}

/// Leaves the application for an external page.
///
/// Once `navigate` returns, no in-memory state of the current page is expected to survive.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &Url);
}

pub type PaymentGatewayRef = Arc<dyn PaymentGateway>;
pub type NavigatorRef = Arc<dyn Navigator>;
