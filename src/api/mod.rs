pub mod error;
pub mod handlers;

use crate::PriceCast;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub type AppState = Arc<PriceCast>;

pub fn router(app: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/products", get(handlers::list_products))
        .route("/predict", post(handlers::predict))
        .route("/historical/:product", get(handlers::historical))
        .route("/pricing", post(handlers::dynamic_pricing))
        .route("/pricing/compute", post(handlers::compute_pricing))
        .route("/prices", get(handlers::list_prices))
        .route("/prices/:product", put(handlers::set_price))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app)
}
