use std::sync::Arc;
use anyhow::Context;
use backend::{
  build_router,
  config::ServerConfig,
  midwares::app_state::{AppState, CommodityStore},
  price_simulator::{fixtures::seed_commodities, sim::PriceSimulator, ticker::Ticker},
  publisher::pusher::PusherPublisher
};
use chrono::Utc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // loaded before the subscriber so RUST_LOG can come from .env
  let dotenv = dotenvy::dotenv();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  match dotenv {
    Ok(path) => info!("loaded environment from {}", path.display()),
    Err(_) => info!("no .env file, reading process environment only")
  }

  let config = ServerConfig::from_env().context("invalid server configuration")?;

  let store = CommodityStore::new(seed_commodities(Utc::now()));
  let publisher = Arc::new(PusherPublisher::new(config.relay.clone()));
  let simulator = PriceSimulator::new()?;

  tokio::spawn(Ticker::new(store.clone(), simulator, publisher, config.tick_interval).run());

  let app = build_router(AppState { store });

  let listener = TcpListener::bind(config.bind_addr)
    .await
    .with_context(|| format!("failed to bind {}", config.bind_addr))?;
  info!("Server running on http://{} (relay cluster: {})", config.bind_addr, config.relay.cluster);

  if let Err(e) = axum::serve(listener, app).await {
    warn!("server stopped: {}", e);
    return Err(e.into());
  }
  Ok(())
}
