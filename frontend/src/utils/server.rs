use pricepredict_common::Commodity;
use thiserror::Error;

pub const COMMODITIES_URL: &str = env!("COMMODITIES_URL");
pub const PUSHER_KEY: &str = env!("PUSHER_KEY");
pub const PUSHER_CLUSTER: &str = env!("PUSHER_CLUSTER");

// App Errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
  #[error("Reqwest error: {0}")]
  ReqwestError(String),
  #[error("Websocket connection error: {0}")]
  WsConnectionError(String),
  #[error("Deserialize error: {0}")]
  DeserializeError(String),
}

/// One-shot fetch of the simulator's current list. No retry.
pub async fn fetch_commodities() -> Result<Vec<Commodity>, AppError> {
  let resp = reqwest::get(COMMODITIES_URL)
    .await
    .and_then(|r| r.error_for_status())
    .map_err(|e| AppError::ReqwestError(e.to_string()))?;

  resp.json::<Vec<Commodity>>()
    .await
    .map_err(|e| AppError::DeserializeError(e.to_string()))
}
