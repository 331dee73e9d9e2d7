use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pricecast", about = "Demand forecasting and dynamic pricing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen address (defaults to PRICECAST_ADDR or 127.0.0.1:8000)
        #[arg(long)]
        addr: Option<String>,
    },
    /// Import daily sales history from a CSV (Date, ProductName, QuantitySold)
    Import {
        path: PathBuf,
    },
    /// List products with sales history
    Products,
    /// Show recent sales history for a product
    History {
        product: String,
        #[arg(long, default_value = "30")]
        days: usize,
    },
    /// Forecast demand for a product
    Forecast {
        product: String,
        #[arg(long, default_value = "7")]
        days: u32,
    },
    /// Recommend daily prices for a product from its forecast
    Price {
        product: String,
        #[arg(long, default_value = "7")]
        days: u32,
        /// Maximum fractional price movement (0.1 = ±10%)
        #[arg(long, default_value = "0.1", allow_negative_numbers = true)]
        elasticity: f64,
    },
    /// Price an explicit forecast series
    Plan {
        #[arg(long)]
        base_price: f64,
        #[arg(long, default_value = "0.1", allow_negative_numbers = true)]
        elasticity: f64,
        /// Forecasted demand per day, soonest first
        #[arg(required = true, num_args = 1..)]
        values: Vec<f64>,
    },
    /// Set the base price of a product
    SetPrice {
        product: String,
        price: f64,
    },
    /// List configured base prices
    Prices,
}
