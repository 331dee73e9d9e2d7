use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS sales (
            product TEXT NOT NULL,
            sale_date TEXT NOT NULL,
            quantity_sold REAL NOT NULL,
            PRIMARY KEY (product, sale_date)
        );

        CREATE TABLE IF NOT EXISTS base_prices (
            product TEXT PRIMARY KEY,
            base_price REAL NOT NULL CHECK (base_price > 0),
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sales_date ON sales(sale_date);
        "
    ).map_err(|e| format!("Migration failed: {e}"))
}
