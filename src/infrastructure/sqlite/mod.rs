pub mod migrations;
pub mod price_catalog;
pub mod sales_repo;

use crate::domain::error::DomainError;
use rusqlite::Connection;

/// Open a WAL-mode connection with the schema in place.
pub fn open(db_path: &str) -> Result<Connection, DomainError> {
    let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
