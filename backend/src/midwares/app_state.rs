use std::sync::Arc;
use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use futures::lock::Mutex;
use pricepredict_common::Commodity;
use rand::Rng;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::price_simulator::sim::PriceSimulator;

#[derive(Debug, Serialize, Clone, Error)]
pub enum AppError {
  #[error("{0}")]
  NotFound(String),
}

impl IntoResponse for AppError {
  fn into_response(self) -> axum::response::Response {
    let (status, message) = match self {
      Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
    };

    let body = Json(json!({"error": message, "code": status.as_u16()}));

    (status, body).into_response()
  }
}

/// Owner of the live commodity list.
///
/// Cloning hands out another handle to the same list. The ticker is the only
/// writer; request handlers only take snapshots.
#[derive(Clone)]
pub struct CommodityStore {
  commodities: Arc<Mutex<Vec<Commodity>>>
}

impl CommodityStore {
  pub fn new(commodities: Vec<Commodity>) -> Self {
    Self { commodities: Arc::new(Mutex::new(commodities)) }
  }

  pub async fn snapshot(&self) -> Vec<Commodity> {
    self.commodities.lock().await.clone()
  }

  /// Runs one simulator step against the list and returns the mutated record.
  pub async fn apply_tick<R: Rng>(&self, simulator: &mut PriceSimulator<R>, now: DateTime<Utc>) -> Option<Commodity> {
    let mut commodities = self.commodities.lock().await;
    simulator.tick(&mut commodities, now)
  }
}

#[derive(Clone)]
pub struct AppState {
  pub store: CommodityStore
}
