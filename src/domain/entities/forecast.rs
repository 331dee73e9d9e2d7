use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Demand forecast for one product over a contiguous run of future days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub product: String,
    pub forecast_dates: Vec<NaiveDate>,
    /// Predicted units per day, rounded to 2 decimals.
    pub forecast_values: Vec<f64>,
    pub model_used: String,
}

impl Forecast {
    pub fn horizon(&self) -> usize {
        self.forecast_values.len()
    }

    pub fn total_demand(&self) -> f64 {
        self.forecast_values.iter().sum()
    }
}
