use crate::domain::entities::sales_record::SalesRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::sales_repository::SalesRepository;
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_HISTORY_DAYS: usize = 30;

#[derive(Debug, Serialize)]
pub struct SalesHistory {
    pub product: String,
    pub period: String,
    pub data: Vec<SalesRecord>,
}

pub struct SalesHistoryUseCase {
    sales: Arc<dyn SalesRepository>,
}

impl SalesHistoryUseCase {
    pub fn new(sales: Arc<dyn SalesRepository>) -> Self {
        Self { sales }
    }

    pub fn products(&self) -> Result<Vec<String>, DomainError> {
        self.sales.products()
    }

    pub fn history(&self, product: &str, days: usize) -> Result<SalesHistory, DomainError> {
        if days == 0 {
            return Err(DomainError::InvalidInput("days must be at least 1".into()));
        }
        if self.sales.last_date(product)?.is_none() {
            return Err(DomainError::UnknownProduct(format!(
                "Product '{product}' not found"
            )));
        }
        let data = self.sales.recent(product, days)?;
        Ok(SalesHistory {
            product: product.to_string(),
            period: format!("Last {days} days"),
            data,
        })
    }
}
