pub mod csv_sales;
