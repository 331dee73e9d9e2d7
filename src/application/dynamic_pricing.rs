use crate::application::forecast::ForecastUseCase;
use crate::domain::error::DomainError;
use crate::domain::ports::price_catalog::PriceCatalog;
use crate::domain::values::pricing::{compute_pricing, PricingPlan};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

/// Pricing plan for a named product, with the dates it covers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingReport {
    pub product: String,
    pub forecast_dates: Vec<NaiveDate>,
    pub model_used: String,
    #[serde(flatten)]
    pub plan: PricingPlan,
}

pub struct DynamicPricingUseCase {
    forecast: Arc<ForecastUseCase>,
    catalog: Arc<dyn PriceCatalog>,
}

impl DynamicPricingUseCase {
    pub fn new(forecast: Arc<ForecastUseCase>, catalog: Arc<dyn PriceCatalog>) -> Self {
        Self { forecast, catalog }
    }

    pub async fn execute(
        &self,
        product: &str,
        days_ahead: u32,
        elasticity: f64,
    ) -> Result<PricingReport, DomainError> {
        let forecast = self.forecast.execute(product, days_ahead).await?;

        let base_price = self.catalog.base_price(product)?.ok_or_else(|| {
            DomainError::NotFound(format!("No base price configured for '{product}'"))
        })?;
        if base_price <= 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "base price for '{product}' must be positive, got {base_price}"
            )));
        }

        let plan = compute_pricing(&forecast.forecast_values, base_price, elasticity)?;
        tracing::info!(
            product,
            days = days_ahead,
            elasticity,
            revenue_delta = plan.overall_strategy.potential_revenue_increase_percent,
            "pricing plan computed"
        );

        Ok(PricingReport {
            product: forecast.product,
            forecast_dates: forecast.forecast_dates,
            model_used: forecast.model_used,
            plan,
        })
    }
}
