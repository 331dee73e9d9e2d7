pub mod catalog;
pub mod forecasting;
pub mod ingest;
pub mod sqlite;
