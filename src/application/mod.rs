pub mod catalog;
pub mod dynamic_pricing;
pub mod forecast;
pub mod history;
pub mod import_sales;
