//! Weekday-seasonal naive baseline.
//!
//! Each future day is predicted as the mean quantity sold on the same
//! weekday over the last few weeks of history. Retail demand is dominated
//! by the weekly cycle, so this is a reasonable stand-in when no trained
//! model is being served.

use crate::domain::error::DomainError;
use crate::domain::ports::forecast_provider::ForecastProvider;
use crate::domain::ports::sales_repository::SalesRepository;
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use std::sync::Arc;

/// Fewer observed days than this and the product has no usable model.
pub const MIN_HISTORY_DAYS: usize = 7;
pub const DEFAULT_HISTORY_WEEKS: usize = 4;

pub struct SeasonalNaiveProvider {
    sales: Arc<dyn SalesRepository>,
    weeks: usize,
}

impl SeasonalNaiveProvider {
    pub fn new(sales: Arc<dyn SalesRepository>, weeks: usize) -> Self {
        Self {
            sales,
            weeks: weeks.max(1),
        }
    }
}

#[async_trait]
impl ForecastProvider for SeasonalNaiveProvider {
    fn model_name(&self) -> &str {
        "SeasonalNaive"
    }

    async fn forecast(
        &self,
        product: &str,
        start: NaiveDate,
        days: usize,
    ) -> Result<Vec<f64>, DomainError> {
        let history = self.sales.recent(product, self.weeks * 7)?;
        if history.len() < MIN_HISTORY_DAYS {
            return Err(DomainError::NotFound(format!(
                "Model for '{product}' not found"
            )));
        }

        let window_mean =
            history.iter().map(|r| r.quantity_sold).sum::<f64>() / history.len() as f64;

        // (sum, count) per weekday, Monday first
        let mut by_weekday = [(0.0_f64, 0_usize); 7];
        for record in &history {
            let slot = &mut by_weekday[record.date.weekday().num_days_from_monday() as usize];
            slot.0 += record.quantity_sold;
            slot.1 += 1;
        }

        let values = (0..days)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                match by_weekday[date.weekday().num_days_from_monday() as usize] {
                    (sum, n) if n > 0 => sum / n as f64,
                    _ => {
                        tracing::warn!(product, %date, "no same-weekday history, using window mean");
                        window_mean
                    }
                }
            })
            .collect();
        Ok(values)
    }
}
