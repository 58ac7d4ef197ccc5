//! Pusher Channels wire format, as seen from a websocket subscriber.
//!
//! Frames are JSON objects `{"event", "channel"?, "data"?}`. Server frames
//! usually carry `data` as a JSON *string* that has to be decoded a second
//! time; some (e.g. `pusher:error`) send a plain object.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::model::Commodity;

pub const CHANNEL: &str = "commodities-channel";
pub const PRICE_UPDATE_EVENT: &str = "price-update";
pub const PROTOCOL_VERSION: u8 = 7;

const CLIENT_NAME: &str = "pricepredict";
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
pub enum RelayError {
  #[error("malformed relay frame: {0}")]
  Malformed(#[from] serde_json::Error),
  #[error("`{0}` frame carried no data")]
  MissingData(String)
}

#[derive(Debug, Deserialize)]
struct RawFrame {
  event: String,
  #[serde(default)]
  channel: Option<String>,
  #[serde(default)]
  data: Option<Value>
}

#[derive(Debug, Deserialize)]
struct ConnectionData {
  socket_id: String,
  #[serde(default)]
  activity_timeout: Option<u64>
}

#[derive(Debug, Deserialize)]
struct ErrorData {
  #[serde(default)]
  code: Option<u16>,
  #[serde(default)]
  message: String
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelayEvent {
  ConnectionEstablished { socket_id: String, activity_timeout: Option<u64> },
  SubscriptionSucceeded { channel: String },
  Ping,
  Error { code: Option<u16>, message: String },
  PriceUpdate(Commodity),
  Other { event: String, channel: Option<String> }
}

/// `wss://ws-{cluster}.pusher.com/app/{key}?protocol=7&...`
pub fn socket_url(cluster: &str, key: &str) -> String {
  format!(
    "wss://ws-{}.pusher.com/app/{}?protocol={}&client={}&version={}",
    cluster, key, PROTOCOL_VERSION, CLIENT_NAME, CLIENT_VERSION
  )
}

pub fn subscribe_frame(channel: &str) -> String {
  json!({"event": "pusher:subscribe", "data": {"channel": channel}}).to_string()
}

pub fn unsubscribe_frame(channel: &str) -> String {
  json!({"event": "pusher:unsubscribe", "data": {"channel": channel}}).to_string()
}

pub fn pong_frame() -> String {
  json!({"event": "pusher:pong", "data": {}}).to_string()
}

// string payloads are JSON-in-JSON
fn unwrap_data<T: for<'de> Deserialize<'de>>(event: &str, data: Option<Value>) -> Result<T, RelayError> {
  match data {
    Some(Value::String(s)) => Ok(serde_json::from_str(&s)?),
    Some(v) => Ok(serde_json::from_value(v)?),
    None => Err(RelayError::MissingData(event.to_string()))
  }
}

pub fn decode_frame(text: &str) -> Result<RelayEvent, RelayError> {
  let RawFrame { event, channel, data } = serde_json::from_str(text)?;

  let decoded = match event.as_str() {
    "pusher:connection_established" => {
      let ConnectionData { socket_id, activity_timeout } = unwrap_data(&event, data)?;
      RelayEvent::ConnectionEstablished { socket_id, activity_timeout }
    },
    "pusher_internal:subscription_succeeded" => RelayEvent::SubscriptionSucceeded {
      channel: channel.unwrap_or_default()
    },
    "pusher:ping" => RelayEvent::Ping,
    "pusher:error" => {
      let ErrorData { code, message } = unwrap_data(&event, data)?;
      RelayEvent::Error { code, message }
    },
    PRICE_UPDATE_EVENT if channel.as_deref() == Some(CHANNEL) => {
      RelayEvent::PriceUpdate(unwrap_data(&event, data)?)
    },
    _ => RelayEvent::Other { event, channel }
  };

  Ok(decoded)
}
