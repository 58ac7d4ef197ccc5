use chrono::{DateTime, Utc};
use pricepredict_common::{relay::{CHANNEL, PRICE_UPDATE_EVENT}, Commodity};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use thiserror::Error;

// each tick moves one price by a factor drawn from [1 - MAX_FLUCTUATION, 1 + MAX_FLUCTUATION)
pub const MAX_FLUCTUATION: f64 = 0.01;

#[derive(Debug, Error)]
pub enum SimulatorError {
  #[error("invalid fluctuation range: {0}")]
  Range(#[from] rand::distr::uniform::Error)
}

/// The event a tick produces, addressed to the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceUpdate {
  pub channel: &'static str,
  pub event: &'static str,
  pub commodity: Commodity
}

impl PriceUpdate {
  pub fn new(commodity: Commodity) -> Self {
    Self { channel: CHANNEL, event: PRICE_UPDATE_EVENT, commodity }
  }
}

pub struct PriceSimulator<R = StdRng> {
  rng: R,
  fluctuation: Uniform<f64>
}

impl PriceSimulator<StdRng> {
  pub fn new() -> Result<Self, SimulatorError> {
    Self::with_rng(StdRng::from_os_rng())
  }

  pub fn seeded(seed: u64) -> Result<Self, SimulatorError> {
    Self::with_rng(StdRng::seed_from_u64(seed))
  }
}

impl<R: Rng> PriceSimulator<R> {
  pub fn with_rng(rng: R) -> Result<Self, SimulatorError> {
    Ok(Self {
      rng,
      fluctuation: Uniform::new(-MAX_FLUCTUATION, MAX_FLUCTUATION)?
    })
  }

  /// Applies one random multiplicative step and restamps the record.
  pub fn perturb(&mut self, commodity: &mut Commodity, now: DateTime<Utc>) {
    let step = self.fluctuation.sample(&mut self.rng);
    commodity.current_price *= 1.0 + step;
    commodity.last_updated = now;
    commodity.created_at = now;
  }

  /// Picks one commodity uniformly at random and perturbs it.
  /// Returns a copy of the mutated record, or `None` for an empty list.
  pub fn tick(&mut self, commodities: &mut [Commodity], now: DateTime<Utc>) -> Option<Commodity> {
    if commodities.is_empty() {
      return None;
    }
    let idx = self.rng.random_range(0..commodities.len());
    let commodity = &mut commodities[idx];
    self.perturb(commodity, now);
    Some(commodity.clone())
  }
}
