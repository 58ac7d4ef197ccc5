pub mod config;
pub mod midwares;
pub mod price_simulator;
pub mod publisher;
pub mod route_handlers;

use axum::{routing::get, Router};

use midwares::{app_state::AppState, cors::cors_layer};
use route_handlers::commodities::{health_check, list_commodities, not_found};

pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/commodities", get(list_commodities))
    .route("/health", get(health_check))
    .fallback(not_found)
    .layer(cors_layer())
    .with_state(state)
}
