use crate::domain::entities::sales_record::SalesRecord;
use crate::domain::error::DomainError;
use chrono::NaiveDate;

pub trait SalesRepository: Send + Sync {
    /// Insert or replace records keyed by (product, date). Returns rows written.
    fn upsert(&self, records: &[SalesRecord]) -> Result<usize, DomainError>;
    /// Distinct products with history, sorted.
    fn products(&self) -> Result<Vec<String>, DomainError>;
    fn last_date(&self, product: &str) -> Result<Option<NaiveDate>, DomainError>;
    /// The most recent `limit` records for a product, oldest first.
    fn recent(&self, product: &str, limit: usize) -> Result<Vec<SalesRecord>, DomainError>;
}
