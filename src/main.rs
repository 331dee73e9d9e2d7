use clap::Parser;
use pricecast::cli::commands::{Cli, Commands};
use pricecast::config::Config;
use pricecast::PriceCast;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let pc = match PriceCast::new(&config) {
        Ok(pc) => pc,
        Err(e) => {
            eprintln!("Error initializing pricecast: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(pc, &config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    pc: PriceCast,
    config: &Config,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.addr.clone());
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, model = pc.model_name(), "listening");
            axum::serve(listener, pricecast::api::router(Arc::new(pc))).await?;
        }
        Commands::Import { path } => {
            let summary = pc.import_sales_csv(&path)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Products => {
            let products = pc.products()?;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        Commands::History { product, days } => {
            let history = pc.history(&product, days)?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
        Commands::Forecast { product, days } => {
            let forecast = pc.forecast(&product, days).await?;
            println!("{}", serde_json::to_string_pretty(&forecast)?);
        }
        Commands::Price {
            product,
            days,
            elasticity,
        } => {
            let report = pc.dynamic_pricing(&product, days, elasticity).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Plan {
            base_price,
            elasticity,
            values,
        } => {
            let plan = pc.compute_plan(&values, base_price, elasticity)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Commands::SetPrice { product, price } => {
            let updated = pc.set_base_price(&product, price)?;
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        Commands::Prices => {
            let prices = pc.base_prices()?;
            println!("{}", serde_json::to_string_pretty(&prices)?);
        }
    }
    Ok(())
}
