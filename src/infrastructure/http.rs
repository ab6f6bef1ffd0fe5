use crate::config::GatewayConfig;
use crate::domain::order::{CaptureResult, OrderCreation, OrderId};
use crate::domain::ports::PaymentGateway;
use crate::domain::product::{Product, ProductId};
use crate::error::{CAPTURE_FALLBACK_MESSAGE, Result, StorefrontError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const PRODUCTS_PATH: &str = "api/products";
const CREATE_ORDER_PATH: &str = "api/paypal/create-order";
const CAPTURE_ORDER_PATH: &str = "api/paypal/capture-order";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderRequest {
    product_id: ProductId,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`PaymentGateway`] backed by the storefront's REST backend.
///
/// Uses the HTTP client's default timeouts; failures are reported once and never retried.
#[derive(Clone)]
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpPaymentGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>> {
        let url = self.config.endpoint(PRODUCTS_PATH)?;
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(StorefrontError::Transport(format!(
                "listing products returned {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    async fn create_order(&self, product_id: ProductId) -> Result<OrderCreation> {
        let url = self.config.endpoint(CREATE_ORDER_PATH)?;
        let response = self
            .client
            .post(url)
            .json(&CreateOrderRequest { product_id })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StorefrontError::Transport(format!(
                "creating order returned {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    #[instrument(skip(self, order_id), fields(order_id = %order_id))]
    async fn capture_order(&self, order_id: &OrderId) -> Result<CaptureResult> {
        let mut url = self.config.endpoint(CAPTURE_ORDER_PATH)?;
        url.query_pairs_mut().append_pair("orderId", order_id.as_str());

        let response = self.client.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // Unreadable or field-less bodies fall back to the generic message.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| CAPTURE_FALLBACK_MESSAGE.to_string());
            debug!(%status, %message, "capture rejected by backend");
            return Err(StorefrontError::Capture(message));
        }
        Ok(response.json().await?)
    }
}
