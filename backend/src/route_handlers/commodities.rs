use axum::{extract::State, http::Uri, Json};
use pricepredict_common::Commodity;
use serde::Serialize;

use crate::midwares::app_state::{AppError, AppState};

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
  pub code: u16,
  pub status: &'static str
}

/// `GET /commodities`: the current in-memory list, used to seed dashboards.
pub async fn list_commodities(State(state): State<AppState>) -> Json<Vec<Commodity>> {
  Json(state.store.snapshot().await)
}

pub async fn health_check() -> Json<HealthCheckResponse> {
  Json(HealthCheckResponse { code: 200, status: "ok" })
}

pub async fn not_found(uri: Uri) -> AppError {
  AppError::NotFound(format!("no route for {}", uri.path()))
}
