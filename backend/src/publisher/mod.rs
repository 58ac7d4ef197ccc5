pub mod pusher;

use async_trait::async_trait;
use thiserror::Error;

use crate::price_simulator::sim::PriceUpdate;

#[derive(Debug, Error)]
pub enum PublishError {
  #[error("failed to serialize update: {0}")]
  Serialize(#[from] serde_json::Error),
  #[error("relay request failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("relay rejected event with status {status}: {body}")]
  Rejected { status: u16, body: String }
}

/// Where ticks go once the store has been mutated.
#[async_trait]
pub trait Publisher: Send + Sync {
  async fn publish(&self, update: &PriceUpdate) -> Result<(), PublishError>;
}
