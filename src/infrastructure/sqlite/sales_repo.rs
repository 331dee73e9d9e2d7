use crate::domain::entities::sales_record::SalesRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::sales_repository::SalesRepository;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct SqliteSalesRepo {
    conn: Mutex<Connection>,
}

impl SqliteSalesRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn parse_date(s: &str) -> Result<NaiveDate, rusqlite::Error> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
    }

    fn row_to_record(row: &rusqlite::Row) -> Result<SalesRecord, rusqlite::Error> {
        let date_str: String = row.get(1)?;
        Ok(SalesRecord {
            product: row.get(0)?,
            date: Self::parse_date(&date_str)?,
            quantity_sold: row.get(2)?,
        })
    }
}

impl SalesRepository for SqliteSalesRepo {
    fn upsert(&self, records: &[SalesRecord]) -> Result<usize, DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut written = 0;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO sales (product, sale_date, quantity_sold) VALUES (?1, ?2, ?3)
                     ON CONFLICT(product, sale_date) DO UPDATE SET quantity_sold = excluded.quantity_sold",
                )
                .map_err(|e| DomainError::Database(e.to_string()))?;
            for record in records {
                written += stmt
                    .execute(params![
                        record.product,
                        record.date.format(DATE_FORMAT).to_string(),
                        record.quantity_sold,
                    ])
                    .map_err(|e| DomainError::Database(format!("Failed to write sale: {e}")))?;
            }
        }
        tx.commit()
            .map_err(|e| DomainError::Database(format!("Failed to commit sales: {e}")))?;
        Ok(written)
    }

    fn products(&self) -> Result<Vec<String>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT DISTINCT product FROM sales ORDER BY product")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let products = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<String>, _>>()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(products)
    }

    fn last_date(&self, product: &str) -> Result<Option<NaiveDate>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let last: Option<String> = conn
            .query_row(
                "SELECT MAX(sale_date) FROM sales WHERE product = ?1",
                params![product],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))?
            .flatten();
        last.map(|s| {
            NaiveDate::parse_from_str(&s, DATE_FORMAT)
                .map_err(|e| DomainError::Parse(format!("Bad stored date '{s}': {e}")))
        })
        .transpose()
    }

    fn recent(&self, product: &str, limit: usize) -> Result<Vec<SalesRecord>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT product, sale_date, quantity_sold FROM (
                    SELECT product, sale_date, quantity_sold FROM sales
                    WHERE product = ?1 ORDER BY sale_date DESC LIMIT ?2
                 ) ORDER BY sale_date ASC",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let records = stmt
            .query_map(params![product, limit as i64], Self::row_to_record)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(records)
    }
}
