use crate::domain::error::DomainError;
use crate::domain::ports::price_catalog::{PriceCatalog, ProductPrice};
use std::sync::Arc;

pub struct CatalogUseCase {
    catalog: Arc<dyn PriceCatalog>,
}

impl CatalogUseCase {
    pub fn new(catalog: Arc<dyn PriceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn set_price(&self, product: &str, price: f64) -> Result<ProductPrice, DomainError> {
        let product = product.trim();
        if product.is_empty() {
            return Err(DomainError::InvalidInput("product name is empty".into()));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "base price must be a positive number, got {price}"
            )));
        }
        self.catalog.set_base_price(product, price)?;
        tracing::info!(product, price, "base price updated");
        Ok(ProductPrice {
            product: product.to_string(),
            base_price: price,
        })
    }

    pub fn prices(&self) -> Result<Vec<ProductPrice>, DomainError> {
        self.catalog.list_prices()
    }
}
