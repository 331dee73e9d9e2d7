pub mod adjustment;
pub mod precision;
pub mod pricing;
