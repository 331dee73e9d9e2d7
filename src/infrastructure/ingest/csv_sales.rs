use crate::domain::entities::sales_record::SalesRecord;
use crate::domain::error::DomainError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One row of the processed sales export. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct SalesRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "ProductName")]
    product: String,
    #[serde(rename = "QuantitySold")]
    quantity_sold: f64,
}

pub fn read_sales_csv(path: &Path) -> Result<Vec<SalesRecord>, DomainError> {
    let file = std::fs::File::open(path).map_err(|e| {
        DomainError::Parse(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;
    parse_sales(file)
}

pub fn parse_sales<R: Read>(reader: R) -> Result<Vec<SalesRecord>, DomainError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<SalesRow>().enumerate() {
        // header is line 1
        let line = i + 2;
        let row = row.map_err(|e| DomainError::Parse(format!("line {line}: {e}")))?;
        records.push(SalesRecord {
            date: parse_day(&row.date)
                .ok_or_else(|| DomainError::Parse(format!("line {line}: bad date '{}'", row.date)))?,
            product: row.product,
            quantity_sold: row.quantity_sold,
        });
    }
    Ok(records)
}

/// Accepts `YYYY-MM-DD` optionally followed by a time part.
fn parse_day(s: &str) -> Option<NaiveDate> {
    let day = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
