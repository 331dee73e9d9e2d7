pub mod http;
pub mod seasonal_naive;
