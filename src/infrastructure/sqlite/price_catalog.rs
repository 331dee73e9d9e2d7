use crate::domain::error::DomainError;
use crate::domain::ports::price_catalog::{PriceCatalog, ProductPrice};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

pub struct SqlitePriceCatalog {
    conn: Mutex<Connection>,
}

impl SqlitePriceCatalog {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Insert prices for products that have none yet. Existing prices are
    /// left untouched. Returns the number of prices added.
    pub fn seed(&self, prices: &[(&str, f64)]) -> Result<usize, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let now = chrono::Utc::now().to_rfc3339();
        let mut added = 0;
        for (product, price) in prices {
            added += conn
                .execute(
                    "INSERT OR IGNORE INTO base_prices (product, base_price, updated_at) VALUES (?1, ?2, ?3)",
                    params![product, price, now],
                )
                .map_err(|e| DomainError::Database(format!("Failed to seed price: {e}")))?;
        }
        Ok(added)
    }
}

impl PriceCatalog for SqlitePriceCatalog {
    fn base_price(&self, product: &str) -> Result<Option<f64>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.query_row(
            "SELECT base_price FROM base_prices WHERE product = ?1",
            params![product],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| DomainError::Database(e.to_string()))
    }

    fn set_base_price(&self, product: &str, price: f64) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO base_prices (product, base_price, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(product) DO UPDATE SET base_price = excluded.base_price, updated_at = excluded.updated_at",
            params![product, price, chrono::Utc::now().to_rfc3339()],
        )
        .map_err(|e| DomainError::Database(format!("Failed to set price: {e}")))?;
        Ok(())
    }

    fn list_prices(&self) -> Result<Vec<ProductPrice>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT product, base_price FROM base_prices ORDER BY product")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let prices = stmt
            .query_map([], |row| {
                Ok(ProductPrice {
                    product: row.get(0)?,
                    base_price: row.get(1)?,
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(prices)
    }
}
