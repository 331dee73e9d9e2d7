use crate::domain::entities::forecast::Forecast;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_provider::ForecastProvider;
use crate::domain::ports::sales_repository::SalesRepository;
use crate::domain::values::precision::round2;
use chrono::Duration;
use std::sync::Arc;

/// Longest horizon a single request may ask for.
pub const MAX_HORIZON_DAYS: u32 = 365;
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

pub struct ForecastUseCase {
    sales: Arc<dyn SalesRepository>,
    provider: Arc<dyn ForecastProvider>,
}

impl ForecastUseCase {
    pub fn new(sales: Arc<dyn SalesRepository>, provider: Arc<dyn ForecastProvider>) -> Self {
        Self { sales, provider }
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    pub async fn execute(&self, product: &str, days_ahead: u32) -> Result<Forecast, DomainError> {
        if days_ahead == 0 || days_ahead > MAX_HORIZON_DAYS {
            return Err(DomainError::InvalidInput(format!(
                "days ahead must be between 1 and {MAX_HORIZON_DAYS}, got {days_ahead}"
            )));
        }

        let last_date = self
            .sales
            .last_date(product)?
            .ok_or_else(|| DomainError::UnknownProduct(format!("Product '{product}' not found")))?;
        let start = last_date + Duration::days(1);
        let days = days_ahead as usize;

        let values = self.provider.forecast(product, start, days).await?;
        if values.len() != days {
            return Err(DomainError::Forecast(format!(
                "{} returned {} values for a {days}-day horizon",
                self.provider.model_name(),
                values.len()
            )));
        }

        let forecast = Forecast {
            product: product.to_string(),
            forecast_dates: (0..days_ahead as i64)
                .map(|i| start + Duration::days(i))
                .collect(),
            forecast_values: values.into_iter().map(round2).collect(),
            model_used: self.provider.model_name().to_string(),
        };
        tracing::debug!(
            product,
            horizon = forecast.horizon(),
            total = forecast.total_demand(),
            "forecast generated"
        );
        Ok(forecast)
    }
}
