pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::catalog::CatalogUseCase;
use crate::application::dynamic_pricing::{DynamicPricingUseCase, PricingReport};
use crate::application::forecast::ForecastUseCase;
use crate::application::history::{SalesHistory, SalesHistoryUseCase};
use crate::application::import_sales::{ImportSalesUseCase, ImportSummary};
use crate::config::{Config, ForecasterKind};
use crate::domain::entities::forecast::Forecast;
use crate::domain::entities::sales_record::SalesRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_provider::ForecastProvider;
use crate::domain::ports::price_catalog::{PriceCatalog, ProductPrice};
use crate::domain::ports::sales_repository::SalesRepository;
use crate::domain::values::pricing::{compute_pricing, PricingPlan};
use crate::infrastructure::catalog::DEFAULT_BASE_PRICES;
use crate::infrastructure::forecasting::http::HttpForecastProvider;
use crate::infrastructure::forecasting::seasonal_naive::SeasonalNaiveProvider;
use crate::infrastructure::ingest::csv_sales::read_sales_csv;
use crate::infrastructure::sqlite::price_catalog::SqlitePriceCatalog;
use crate::infrastructure::sqlite::sales_repo::SqliteSalesRepo;
use std::path::Path;
use std::sync::Arc;

pub struct PriceCast {
    forecast_uc: Arc<ForecastUseCase>,
    pricing_uc: DynamicPricingUseCase,
    catalog_uc: CatalogUseCase,
    history_uc: SalesHistoryUseCase,
    import_uc: ImportSalesUseCase,
}

impl PriceCast {
    /// Wire the SQLite store, the configured forecaster and a SQLite
    /// catalog seeded with the reference prices.
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let sales: Arc<dyn SalesRepository> =
            Arc::new(SqliteSalesRepo::new(infrastructure::sqlite::open(&config.db_path)?));

        let catalog = SqlitePriceCatalog::new(infrastructure::sqlite::open(&config.db_path)?);
        let seeded = catalog.seed(DEFAULT_BASE_PRICES)?;
        if seeded > 0 {
            tracing::info!(seeded, "seeded catalog with reference prices");
        }

        let forecaster: Arc<dyn ForecastProvider> = match config.forecaster {
            ForecasterKind::Naive => {
                Arc::new(SeasonalNaiveProvider::new(sales.clone(), config.history_weeks))
            }
            ForecasterKind::Http => {
                let url = config.forecast_url.clone().ok_or_else(|| {
                    DomainError::Config("forecast URL is required for the http forecaster".into())
                })?;
                Arc::new(HttpForecastProvider::new(url, config.model_name.clone()))
            }
        };
        tracing::info!(
            db = %config.db_path,
            forecaster = %config.forecaster,
            model = forecaster.model_name(),
            "pricecast initialised"
        );

        Ok(Self::assemble(sales, forecaster, Arc::new(catalog)))
    }

    /// Open the sales store at `db_path` and plug in caller-supplied
    /// forecaster and catalog.
    pub fn with_providers(
        db_path: &str,
        forecaster: Arc<dyn ForecastProvider>,
        catalog: Arc<dyn PriceCatalog>,
    ) -> Result<Self, DomainError> {
        let sales: Arc<dyn SalesRepository> =
            Arc::new(SqliteSalesRepo::new(infrastructure::sqlite::open(db_path)?));
        Ok(Self::assemble(sales, forecaster, catalog))
    }

    /// Fully injected construction, e.g. to share one sales store between
    /// the facade and a history-based forecaster.
    pub fn assemble(
        sales: Arc<dyn SalesRepository>,
        forecaster: Arc<dyn ForecastProvider>,
        catalog: Arc<dyn PriceCatalog>,
    ) -> Self {
        let forecast_uc = Arc::new(ForecastUseCase::new(sales.clone(), forecaster));
        Self {
            pricing_uc: DynamicPricingUseCase::new(forecast_uc.clone(), catalog.clone()),
            forecast_uc,
            catalog_uc: CatalogUseCase::new(catalog),
            history_uc: SalesHistoryUseCase::new(sales.clone()),
            import_uc: ImportSalesUseCase::new(sales),
        }
    }

    pub fn model_name(&self) -> &str {
        self.forecast_uc.model_name()
    }

    pub fn import_sales(&self, records: Vec<SalesRecord>) -> Result<ImportSummary, DomainError> {
        self.import_uc.execute(records)
    }

    pub fn import_sales_csv(&self, path: &Path) -> Result<ImportSummary, DomainError> {
        let records = read_sales_csv(path)?;
        self.import_uc.execute(records)
    }

    pub fn products(&self) -> Result<Vec<String>, DomainError> {
        self.history_uc.products()
    }

    pub fn history(&self, product: &str, days: usize) -> Result<SalesHistory, DomainError> {
        self.history_uc.history(product, days)
    }

    pub async fn forecast(&self, product: &str, days_ahead: u32) -> Result<Forecast, DomainError> {
        self.forecast_uc.execute(product, days_ahead).await
    }

    pub async fn dynamic_pricing(
        &self,
        product: &str,
        days_ahead: u32,
        elasticity: f64,
    ) -> Result<PricingReport, DomainError> {
        self.pricing_uc.execute(product, days_ahead, elasticity).await
    }

    /// Price an explicit forecast series, bypassing the forecaster and catalog.
    pub fn compute_plan(
        &self,
        forecast_values: &[f64],
        base_price: f64,
        elasticity: f64,
    ) -> Result<PricingPlan, DomainError> {
        compute_pricing(forecast_values, base_price, elasticity)
    }

    pub fn set_base_price(&self, product: &str, price: f64) -> Result<ProductPrice, DomainError> {
        self.catalog_uc.set_price(product, price)
    }

    pub fn base_prices(&self) -> Result<Vec<ProductPrice>, DomainError> {
        self.catalog_uc.prices()
    }
}
