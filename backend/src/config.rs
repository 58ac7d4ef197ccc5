use std::{env, net::SocketAddr, time::Duration};
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
const DEFAULT_TICK_INTERVAL_MS: u64 = 3_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("{0} must be set")]
  Missing(&'static str),
  #[error("{var} has invalid value `{value}`: {reason}")]
  Invalid { var: &'static str, value: String, reason: String }
}

/// Credentials for the hosted relay (Pusher Channels).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
  pub app_id: String,
  pub key: String,
  pub secret: String,
  pub cluster: String,
  /// `https` for the trigger API unless `PUSHER_USE_TLS=false`
  pub use_tls: bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub bind_addr: SocketAddr,
  pub tick_interval: Duration,
  pub relay: RelayConfig
}

impl ServerConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|var| env::var(var).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>
  {
    let required = |var: &'static str| {
      lookup(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
    };

    let use_tls = match lookup("PUSHER_USE_TLS") {
      Some(raw) => raw.trim().to_ascii_lowercase().parse::<bool>().map_err(|e| ConfigError::Invalid {
        var: "PUSHER_USE_TLS",
        value: raw.clone(),
        reason: e.to_string()
      })?,
      None => true
    };

    let relay = RelayConfig {
      app_id: required("PUSHER_APP_ID")?,
      key: required("PUSHER_KEY")?,
      secret: required("PUSHER_SECRET")?,
      cluster: required("PUSHER_CLUSTER")?,
      use_tls
    };

    let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
      var: "BIND_ADDR",
      value: bind_raw.clone(),
      reason: e.to_string()
    })?;

    let tick_interval = match lookup("TICK_INTERVAL_MS") {
      Some(raw) => {
        let ms = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
          var: "TICK_INTERVAL_MS",
          value: raw.clone(),
          reason: e.to_string()
        })?;
        if ms == 0 {
          return Err(ConfigError::Invalid { var: "TICK_INTERVAL_MS", value: raw, reason: "must be positive".to_string() });
        }
        Duration::from_millis(ms)
      },
      None => Duration::from_millis(DEFAULT_TICK_INTERVAL_MS)
    };

    Ok(Self { bind_addr, tick_interval, relay })
  }
}
