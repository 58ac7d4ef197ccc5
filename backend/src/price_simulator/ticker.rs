use std::{sync::Arc, time::Duration};
use chrono::Utc;
use rand::{rngs::StdRng, Rng};
use tokio::{task::JoinHandle, time::{self, Instant, MissedTickBehavior}};
use tracing::{error, info};

use crate::{midwares::app_state::CommodityStore, publisher::Publisher};
use super::sim::{PriceSimulator, PriceUpdate};

/// Periodic driver: mutate one record, then hand the event to the publisher.
///
/// Publish policy is log-and-continue. A publish runs on its own task and is
/// never awaited by the timer; a failure is logged and not retried, and the
/// mutation already applied to the store stays in place.
pub struct Ticker<R = StdRng> {
  store: CommodityStore,
  simulator: PriceSimulator<R>,
  publisher: Arc<dyn Publisher>,
  period: Duration
}

impl<R: Rng + Send + 'static> Ticker<R> {
  pub fn new(store: CommodityStore, simulator: PriceSimulator<R>, publisher: Arc<dyn Publisher>, period: Duration) -> Self {
    Self { store, simulator, publisher, period }
  }

  /// One tick: apply the mutation and dispatch the resulting event.
  pub async fn tick(&mut self) -> Option<(PriceUpdate, JoinHandle<()>)> {
    let commodity = self.store.apply_tick(&mut self.simulator, Utc::now()).await?;
    info!("Updating {}: ₹{:.2}", commodity.name, commodity.current_price);

    let update = PriceUpdate::new(commodity);
    let handle = dispatch(self.publisher.clone(), update.clone());
    Some((update, handle))
  }

  /// Ticks every `period` until the task is dropped. The first tick fires one
  /// full period after start.
  pub async fn run(mut self) {
    let mut interval = time::interval_at(Instant::now() + self.period, self.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("price ticker started, period {:?}", self.period);
    loop {
      interval.tick().await;
      self.tick().await;
    }
  }
}

fn dispatch(publisher: Arc<dyn Publisher>, update: PriceUpdate) -> JoinHandle<()> {
  tokio::spawn(async move {
    if let Err(e) = publisher.publish(&update).await {
      error!("relay publish failed for {}: {}", update.commodity.id, e);
    }
  })
}
