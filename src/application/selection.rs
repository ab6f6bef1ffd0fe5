use crate::domain::ports::{NavigatorRef, PaymentGatewayRef};
use crate::domain::product::ProductId;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};
use url::Url;

pub const CREATE_ORDER_FAILED_MESSAGE: &str = "Failed to create PayPal order";
pub const PAY_LABEL: &str = "Pay with PayPal";
pub const REDIRECTING_LABEL: &str = "Redirecting to PayPal...";

/// What happened to a purchase-initiation action.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// The browser was sent to the provider's approval page.
    Redirected(Url),
    /// Another purchase was already in flight; nothing was sent.
    Busy,
    /// Order creation failed; the product can be selected again.
    Failed(String),
}

/// Presentation of a product's purchase button.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseControl {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Default)]
struct SelectionState {
    in_flight: Option<ProductId>,
    error: Option<String>,
}

/// Catalog interaction state: which product, if any, is being redirected for payment.
///
/// At most one purchase may be in flight. The check-and-set happens under a
/// mutex that is released before the order is created.
pub struct ProductSelectionFlow {
    gateway: PaymentGatewayRef,
    navigator: NavigatorRef,
    state: Mutex<SelectionState>,
}

impl ProductSelectionFlow {
    pub fn new(gateway: PaymentGatewayRef, navigator: NavigatorRef) -> Self {
        Self {
            gateway,
            navigator,
            state: Mutex::new(SelectionState::default()),
        }
    }

    /// Starts the purchase of `product_id`.
    ///
    /// On success the navigator leaves the application and the selection stays
    /// in flight; nothing after that point is expected to run on this page.
    pub async fn initiate(&self, product_id: ProductId) -> SelectionOutcome {
        {
            let mut state = self.lock();
            if let Some(current) = state.in_flight {
                debug!(%product_id, in_flight = %current, "purchase already in flight, ignoring");
                return SelectionOutcome::Busy;
            }
            state.in_flight = Some(product_id);
            state.error = None;
        }

        match self.gateway.create_order(product_id).await {
            Ok(order) => {
                info!(%product_id, order_id = %order.order_id, "order created, redirecting to approval");
                self.navigator.navigate(&order.approval_url);
                SelectionOutcome::Redirected(order.approval_url)
            }
            Err(e) => {
                warn!(%product_id, error = %e, "order creation failed");
                let mut state = self.lock();
                state.in_flight = None;
                state.error = Some(CREATE_ORDER_FAILED_MESSAGE.to_string());
                SelectionOutcome::Failed(CREATE_ORDER_FAILED_MESSAGE.to_string())
            }
        }
    }

    pub fn in_flight(&self) -> Option<ProductId> {
        self.lock().in_flight
    }

    /// Message of the last failed initiation, cleared by the next attempt.
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// Button state for `product_id`.
    ///
    /// Only the in-flight product's control is disabled; siblings stay
    /// clickable and are turned away by [`initiate`](Self::initiate) instead.
    pub fn control(&self, product_id: ProductId) -> PurchaseControl {
        if self.in_flight() == Some(product_id) {
            PurchaseControl {
                label: REDIRECTING_LABEL,
                disabled: true,
            }
        } else {
            PurchaseControl {
                label: PAY_LABEL,
                disabled: false,
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SelectionState> {
        // The state is a plain option pair; a poisoned guard still holds a usable value.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
