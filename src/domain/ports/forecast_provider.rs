use crate::domain::error::DomainError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of per-day demand predictions for a product.
///
/// Implementations can be a local baseline model over stored history or a
/// remote model-serving endpoint.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Model name reported back to clients (e.g. "Prophet").
    fn model_name(&self) -> &str;

    /// Predict demand for `days` consecutive days starting at `start`.
    /// Must return exactly `days` values, in calendar order.
    /// A product without a usable model yields `DomainError::NotFound`.
    async fn forecast(
        &self,
        product: &str,
        start: NaiveDate,
        days: usize,
    ) -> Result<Vec<f64>, DomainError>;
}
