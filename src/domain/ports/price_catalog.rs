use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPrice {
    pub product: String,
    pub base_price: f64,
}

/// Base-price lookup. Swappable between an in-memory table, SQLite or a
/// remote catalog without touching the pricing logic.
pub trait PriceCatalog: Send + Sync {
    /// `Ok(None)` when the product has no configured price.
    fn base_price(&self, product: &str) -> Result<Option<f64>, DomainError>;
    fn set_base_price(&self, product: &str, price: f64) -> Result<(), DomainError>;
    /// All configured prices, sorted by product.
    fn list_prices(&self) -> Result<Vec<ProductPrice>, DomainError>;
}
