use super::error::ApiError;
use super::AppState;
use crate::application::dynamic_pricing::PricingReport;
use crate::application::forecast::DEFAULT_HORIZON_DAYS;
use crate::application::history::{SalesHistory, DEFAULT_HISTORY_DAYS};
use crate::domain::entities::forecast::Forecast;
use crate::domain::ports::price_catalog::ProductPrice;
use crate::domain::values::pricing::{PricingPlan, DEFAULT_ELASTICITY};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_DAYS
}

fn default_elasticity() -> f64 {
    DEFAULT_ELASTICITY
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub product: String,
    #[serde(default = "default_horizon", alias = "days_ahead")]
    pub days_ahead: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub product: String,
    #[serde(default = "default_horizon", alias = "days_ahead")]
    pub days_ahead: u32,
    #[serde(default = "default_elasticity", alias = "price_elasticity")]
    pub price_elasticity: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputePricingRequest {
    #[serde(alias = "forecast_values")]
    pub forecast_values: Vec<f64>,
    #[serde(alias = "base_price")]
    pub base_price: f64,
    #[serde(default = "default_elasticity")]
    pub elasticity: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPriceRequest {
    #[serde(alias = "base_price")]
    pub base_price: f64,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub count: usize,
    pub products: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PriceList {
    pub count: usize,
    pub prices: Vec<ProductPrice>,
}

pub async fn root() -> Json<ApiInfo> {
    let endpoints = BTreeMap::from([
        ("/health", "GET - Liveness check"),
        ("/products", "GET - List products"),
        ("/predict", "POST - Get forecast"),
        ("/historical/{product}", "GET - Recent sales history"),
        ("/pricing", "POST - Dynamic pricing for a product"),
        ("/pricing/compute", "POST - Price an explicit forecast series"),
        ("/prices", "GET - List base prices"),
        ("/prices/{product}", "PUT - Set a base price"),
    ]);
    Json(ApiInfo {
        message: "Welcome to the pricecast forecasting API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn list_products(State(app): State<AppState>) -> Result<Json<ProductList>, ApiError> {
    let products = app.products()?;
    Ok(Json(ProductList {
        count: products.len(),
        products,
    }))
}

pub async fn predict(
    State(app): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Forecast>, ApiError> {
    let Json(req) = payload?;
    let forecast = app.forecast(&req.product, req.days_ahead).await?;
    Ok(Json(forecast))
}

pub async fn historical(
    State(app): State<AppState>,
    Path(product): Path<String>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<SalesHistory>, ApiError> {
    let Query(query) = query?;
    let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS);
    Ok(Json(app.history(&product, days)?))
}

pub async fn dynamic_pricing(
    State(app): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> Result<Json<PricingReport>, ApiError> {
    let Json(req) = payload?;
    let report = app
        .dynamic_pricing(&req.product, req.days_ahead, req.price_elasticity)
        .await?;
    Ok(Json(report))
}

pub async fn compute_pricing(
    State(app): State<AppState>,
    payload: Result<Json<ComputePricingRequest>, JsonRejection>,
) -> Result<Json<PricingPlan>, ApiError> {
    let Json(req) = payload?;
    let plan = app.compute_plan(&req.forecast_values, req.base_price, req.elasticity)?;
    Ok(Json(plan))
}

pub async fn list_prices(State(app): State<AppState>) -> Result<Json<PriceList>, ApiError> {
    let prices = app.base_prices()?;
    Ok(Json(PriceList {
        count: prices.len(),
        prices,
    }))
}

pub async fn set_price(
    State(app): State<AppState>,
    Path(product): Path<String>,
    payload: Result<Json<SetPriceRequest>, JsonRejection>,
) -> Result<Json<ProductPrice>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(app.set_base_price(&product, req.base_price)?))
}
