use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Units of one product sold on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub product: String,
    pub date: NaiveDate,
    pub quantity_sold: f64,
}

impl SalesRecord {
    pub fn new(product: impl Into<String>, date: NaiveDate, quantity_sold: f64) -> Self {
        Self {
            product: product.into(),
            date,
            quantity_sold,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.product.trim().is_empty() {
            return Err(format!("sales record on {} has an empty product name", self.date));
        }
        if !self.quantity_sold.is_finite() || self.quantity_sold < 0.0 {
            return Err(format!(
                "sales record for '{}' on {} has invalid quantity {}",
                self.product, self.date, self.quantity_sold
            ));
        }
        Ok(())
    }
}
