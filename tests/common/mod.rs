//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use pricecast::domain::entities::sales_record::SalesRecord;
use pricecast::domain::error::DomainError;
use pricecast::domain::ports::forecast_provider::ForecastProvider;
use pricecast::infrastructure::catalog::in_memory::InMemoryCatalog;
use pricecast::PriceCast;
use std::collections::HashMap;
use std::sync::Arc;

/// Forecaster that serves fixed series per product, cycling them to fill
/// the requested horizon. Products without a series have no model.
pub struct FixedForecaster {
    series: HashMap<String, Vec<f64>>,
}

impl FixedForecaster {
    pub fn new(series: &[(&str, Vec<f64>)]) -> Self {
        Self {
            series: series
                .iter()
                .map(|(p, v)| (p.to_string(), v.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl ForecastProvider for FixedForecaster {
    fn model_name(&self) -> &str {
        "Fixed"
    }

    async fn forecast(
        &self,
        product: &str,
        _start: NaiveDate,
        days: usize,
    ) -> Result<Vec<f64>, DomainError> {
        let series = self
            .series
            .get(product)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::NotFound(format!("Model for '{product}' not found")))?;
        Ok(series.iter().copied().cycle().take(days).collect())
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `days` consecutive records ending on `last`, all with `qty` units.
pub fn flat_history(product: &str, last: NaiveDate, days: i64, qty: f64) -> Vec<SalesRecord> {
    (0..days)
        .rev()
        .map(|i| SalesRecord::new(product, last - Duration::days(i), qty))
        .collect()
}

pub fn sample_week() -> Vec<f64> {
    vec![100.0, 100.0, 100.0, 150.0, 50.0, 100.0, 100.0]
}

/// In-memory store with Milk_1L history ending 2024-03-31, a fixed
/// forecast for Milk_1L and Curd_500g, and the reference price table.
pub fn setup() -> PriceCast {
    let forecaster = Arc::new(FixedForecaster::new(&[
        ("Milk_1L", sample_week()),
        ("Curd_500g", vec![20.0, 20.0, 20.0]),
    ]));
    let pc = PriceCast::with_providers(
        ":memory:",
        forecaster,
        Arc::new(InMemoryCatalog::with_defaults()),
    )
    .unwrap();
    pc.import_sales(flat_history("Milk_1L", day(2024, 3, 31), 30, 100.0))
        .unwrap();
    pc
}
