pub mod forecast_provider;
pub mod price_catalog;
pub mod sales_repository;
