use crate::domain::order::{CaptureResult, OrderId};
use crate::domain::ports::PaymentGatewayRef;
use crate::error::StorefrontError;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

/// Shown when the capture fails without a business reason (network, bad response).
pub const CAPTURE_FAILED_MESSAGE: &str = "Failed to capture PayPal order";

/// Query parameter the provider uses to hand the order back on return.
pub const RESUME_TOKEN_PARAM: &str = "token";

/// Where the return page stands in the capture of a single order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckoutState {
    #[default]
    AwaitingToken,
    Capturing,
    Succeeded(CaptureResult),
    Failed(String),
}

impl CheckoutState {
    /// `Succeeded` and `Failed` are final for the lifetime of an orchestrator.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckoutState::Succeeded(_) | CheckoutState::Failed(_))
    }
}

/// Extracts the resume token from a return URL. Empty values count as absent.
pub fn resume_token(return_url: &Url) -> Option<OrderId> {
    return_url
        .query_pairs()
        .find(|(key, _)| key == RESUME_TOKEN_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .map(OrderId)
}

/// Drives the return page: at most one capture per instance, whatever the
/// number of activations.
///
/// The capture latch is set *before* the request is issued, so activations
/// that race or repeat observe it and back off.
pub struct CheckoutOrchestrator {
    gateway: PaymentGatewayRef,
    capture_started: AtomicBool,
    state: RwLock<CheckoutState>,
}

impl CheckoutOrchestrator {
    pub fn new(gateway: PaymentGatewayRef) -> Self {
        Self {
            gateway,
            capture_started: AtomicBool::new(false),
            state: RwLock::new(CheckoutState::AwaitingToken),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> CheckoutState {
        self.state.read().await.clone()
    }

    /// Reacts to the page becoming active on `return_url`.
    ///
    /// Safe to call any number of times: only the first activation carrying a
    /// token reaches the gateway. Returns the state as this caller leaves it.
    pub async fn activate(&self, return_url: &Url) -> CheckoutState {
        let order_id = {
            let mut state = self.state.write().await;
            if state.is_terminal() {
                return state.clone();
            }

            if self.capture_started.load(Ordering::Acquire) {
                debug!(url = %return_url, "capture already started, skipping");
                return state.clone();
            }

            let Some(order_id) = resume_token(return_url) else {
                warn!(url = %return_url, "return navigation without resume token");
                *state = CheckoutState::Failed(StorefrontError::MissingToken.to_string());
                return state.clone();
            };

            // Claimed under the state lock, before the request goes out.
            self.capture_started.store(true, Ordering::Release);
            *state = CheckoutState::Capturing;
            order_id
        };
        info!(%order_id, "capturing order");

        let next = match self.gateway.capture_order(&order_id).await {
            Ok(result) => {
                info!(%order_id, status = %result.status, "order captured");
                CheckoutState::Succeeded(result)
            }
            Err(StorefrontError::Capture(message)) => {
                warn!(%order_id, %message, "capture rejected");
                CheckoutState::Failed(message)
            }
            Err(e) => {
                warn!(%order_id, error = %e, "capture failed");
                CheckoutState::Failed(CAPTURE_FAILED_MESSAGE.to_string())
            }
        };

        let mut state = self.state.write().await;
        *state = next;
        state.clone()
    }
}
