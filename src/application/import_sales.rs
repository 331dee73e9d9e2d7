use crate::domain::entities::sales_record::SalesRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::sales_repository::SalesRepository;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub rows_read: usize,
    pub rows_imported: usize,
    pub products: Vec<String>,
}

pub struct ImportSalesUseCase {
    sales: Arc<dyn SalesRepository>,
}

impl ImportSalesUseCase {
    pub fn new(sales: Arc<dyn SalesRepository>) -> Self {
        Self { sales }
    }

    /// All records are validated before any is written.
    pub fn execute(&self, records: Vec<SalesRecord>) -> Result<ImportSummary, DomainError> {
        for record in &records {
            record.validate().map_err(DomainError::InvalidInput)?;
        }

        let rows_imported = self.sales.upsert(&records)?;
        let products: BTreeSet<String> = records.iter().map(|r| r.product.clone()).collect();

        tracing::info!(
            rows = records.len(),
            imported = rows_imported,
            products = products.len(),
            "sales history imported"
        );

        Ok(ImportSummary {
            rows_read: records.len(),
            rows_imported,
            products: products.into_iter().collect(),
        })
    }
}
