use super::DEFAULT_BASE_PRICES;
use crate::domain::error::DomainError;
use crate::domain::ports::price_catalog::{PriceCatalog, ProductPrice};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Price table held in memory. Useful for tests and embedded use.
#[derive(Default)]
pub struct InMemoryCatalog {
    prices: RwLock<BTreeMap<String, f64>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self::from_prices(DEFAULT_BASE_PRICES.iter().copied())
    }

    pub fn from_prices<'a>(prices: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            prices: RwLock::new(
                prices
                    .into_iter()
                    .map(|(product, price)| (product.to_string(), price))
                    .collect(),
            ),
        }
    }
}

impl PriceCatalog for InMemoryCatalog {
    fn base_price(&self, product: &str) -> Result<Option<f64>, DomainError> {
        let prices = self
            .prices
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(prices.get(product).copied())
    }

    fn set_base_price(&self, product: &str, price: f64) -> Result<(), DomainError> {
        let mut prices = self
            .prices
            .write()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        prices.insert(product.to_string(), price);
        Ok(())
    }

    fn list_prices(&self) -> Result<Vec<ProductPrice>, DomainError> {
        let prices = self
            .prices
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(prices
            .iter()
            .map(|(product, &base_price)| ProductPrice {
                product: product.clone(),
                base_price,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_reference_table() {
        let catalog = InMemoryCatalog::with_defaults();
        assert_eq!(catalog.base_price("Milk_1L").unwrap(), Some(60.0));
        assert_eq!(catalog.base_price("Colgate_Toothpaste").unwrap(), Some(45.0));
        assert_eq!(catalog.base_price("Unknown").unwrap(), None);
        assert_eq!(catalog.list_prices().unwrap().len(), 15);
    }

    #[test]
    fn test_set_price_overrides() {
        let catalog = InMemoryCatalog::new();
        catalog.set_base_price("Kurkure", 20.0).unwrap();
        catalog.set_base_price("Kurkure", 22.5).unwrap();
        assert_eq!(catalog.base_price("Kurkure").unwrap(), Some(22.5));
    }

    #[test]
    fn test_list_is_sorted() {
        let catalog = InMemoryCatalog::from_prices([("b", 2.0), ("a", 1.0)]);
        let names: Vec<String> = catalog.list_prices().unwrap().into_iter().map(|p| p.product).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
