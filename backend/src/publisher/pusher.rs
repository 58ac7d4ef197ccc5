use std::time::{SystemTime, UNIX_EPOCH};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Serialize;
use sha2::Sha256;
use tracing::debug;

use crate::{config::RelayConfig, price_simulator::sim::PriceUpdate};
use super::{PublishError, Publisher};

type HmacSha256 = Hmac<Sha256>;

const AUTH_VERSION: &str = "1.0";

/// Body of `POST /apps/{app_id}/events`. `data` is the payload JSON as a string.
#[derive(Debug, Serialize)]
pub struct TriggerBody<'a> {
  pub name: &'a str,
  pub channels: [&'a str; 1],
  pub data: String
}

impl<'a> TriggerBody<'a> {
  pub fn for_update(update: &'a PriceUpdate) -> Result<Self, PublishError> {
    Ok(Self {
      name: update.event,
      channels: [update.channel],
      data: serde_json::to_string(&update.commodity)?
    })
  }
}

/// Triggers events through the Pusher Channels HTTP API.
pub struct PusherPublisher {
  client: Client,
  config: RelayConfig
}

impl PusherPublisher {
  pub fn new(config: RelayConfig) -> Self {
    Self { client: Client::new(), config }
  }

  fn events_path(&self) -> String {
    format!("/apps/{}/events", self.config.app_id)
  }

  fn events_url(&self) -> String {
    let scheme = if self.config.use_tls { "https" } else { "http" };
    format!("{}://api-{}.pusher.com{}", scheme, self.config.cluster, self.events_path())
  }

  /// Query string carrying the request signature.
  ///
  /// The signed string is `POST\n{path}\n{params}` with params sorted by key,
  /// keyed with the app secret (HMAC-SHA256, hex encoded).
  pub fn signed_query(&self, body: &str, timestamp: u64) -> String {
    let body_md5 = hex::encode(Md5::digest(body.as_bytes()));
    let params = format!(
      "auth_key={}&auth_timestamp={}&auth_version={}&body_md5={}",
      self.config.key, timestamp, AUTH_VERSION, body_md5
    );
    let to_sign = format!("POST\n{}\n{}", self.events_path(), params);

    let mut mac = HmacSha256::new_from_slice(self.config.secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(to_sign.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    format!("{}&auth_signature={}", params, signature)
  }
}

fn unix_now() -> u64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_secs())
    .unwrap_or_default()
}

#[async_trait]
impl Publisher for PusherPublisher {
  async fn publish(&self, update: &PriceUpdate) -> Result<(), PublishError> {
    let body = serde_json::to_string(&TriggerBody::for_update(update)?)?;
    let url = format!("{}?{}", self.events_url(), self.signed_query(&body, unix_now()));

    let resp = self.client
      .post(url)
      .header(CONTENT_TYPE, "application/json")
      .body(body)
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(PublishError::Rejected { status: status.as_u16(), body });
    }

    debug!("relay accepted {} for {}", update.event, update.commodity.id);
    Ok(())
  }
}
