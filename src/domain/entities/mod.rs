pub mod forecast;
pub mod sales_record;
