use crate::domain::ports::PaymentGateway;
use crate::domain::product::Product;
use tracing::warn;

pub const LOAD_PRODUCTS_FAILED_MESSAGE: &str = "Failed to load products";

/// Outcome of loading the catalog page.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPage {
    Loaded(Vec<Product>),
    Failed(String),
}

impl CatalogPage {
    /// Fetches the product list once. Failures are reduced to a generic message.
    pub async fn load(gateway: &dyn PaymentGateway) -> Self {
        match gateway.list_products().await {
            Ok(products) => CatalogPage::Loaded(products),
            Err(e) => {
                warn!(error = %e, "failed to load products");
                CatalogPage::Failed(LOAD_PRODUCTS_FAILED_MESSAGE.to_string())
            }
        }
    }
}
