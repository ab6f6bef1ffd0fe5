use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of a product. Opaque to the checkout core; the backend
/// is authoritative on whether it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A purchasable item as listed by the catalog endpoint.
///
/// `price` accepts either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_price_from_number_or_string() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[{"id":1,"name":"Mug","price":9.99},{"id":2,"name":"Hoodie","price":"39.99"}]"#,
        )
        .unwrap();

        assert_eq!(products[0].id, ProductId(1));
        assert_eq!(products[0].price, dec!(9.99));
        assert_eq!(products[1].price, dec!(39.99));
    }
}
