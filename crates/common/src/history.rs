//! Mock price history for the chart view.
//!
//! The series is pure jitter around the current price and has no relation to
//! anything the simulator actually published. It is regenerated whenever the
//! timeframe or the base price changes.

use std::fmt;
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use crate::model::PriceHistoryPoint;

// each point is base * (JITTER_FLOOR + u * JITTER_SPAN), u in [0, 1)
pub const JITTER_FLOOR: f64 = 0.85;
pub const JITTER_SPAN: f64 = 0.30;

const MIN_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timeframe {
  SevenDays,
  #[default]
  ThirtyDays,
  NinetyDays,
  OneYear
}

impl Timeframe {
  pub const ALL: [Timeframe; 4] = [Self::SevenDays, Self::ThirtyDays, Self::NinetyDays, Self::OneYear];

  pub fn days(&self) -> usize {
    match self {
      Self::SevenDays => 7,
      Self::ThirtyDays => 30,
      Self::NinetyDays => 90,
      Self::OneYear => 365,
    }
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::SevenDays => "7d",
      Self::ThirtyDays => "30d",
      Self::NinetyDays => "90d",
      Self::OneYear => "1y",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::SevenDays => "Last 7 Days",
      Self::ThirtyDays => "Last 30 Days",
      Self::NinetyDays => "Last 90 Days",
      Self::OneYear => "Last Year",
    }
  }
}

impl fmt::Display for Timeframe {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// Generates one point per day, oldest first, ending at `now`.
pub fn generate_mock_history<R: Rng + ?Sized>(
  commodity_id: &str,
  base_price: f64,
  timeframe: Timeframe,
  now: DateTime<Utc>,
  rng: &mut R
) -> Vec<PriceHistoryPoint> {
  let point_count = timeframe.days().max(MIN_POINTS);

  (0..point_count)
    .map(|i| {
      let days_back = (point_count - 1 - i) as i64;
      let factor = JITTER_FLOOR + rng.random::<f64>() * JITTER_SPAN;
      PriceHistoryPoint {
        id: format!("{}-{}", commodity_id, i),
        commodity_id: commodity_id.to_string(),
        price: base_price * factor,
        recorded_at: now - TimeDelta::days(days_back),
        created_at: now
      }
    })
    .collect()
}

/// Summary figures shown under the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryStats {
  pub min: f64,
  pub max: f64,
  pub average: f64,
  pub count: usize
}

impl HistoryStats {
  pub fn from_points(points: &[PriceHistoryPoint]) -> Self {
    if points.is_empty() {
      return Self { min: 0.0, max: 1.0, average: 0.0, count: 0 };
    }

    let (min, max, sum) = points.iter().fold(
      (f64::INFINITY, f64::NEG_INFINITY, 0.0),
      |(min, max, sum), p| (min.min(p.price), max.max(p.price), sum + p.price)
    );

    Self { min, max, average: sum / points.len() as f64, count: points.len() }
  }

  /// Vertical span used for scaling; a flat series still gets a span of 1.
  pub fn range(&self) -> f64 {
    let range = self.max - self.min;
    if range == 0.0 { 1.0 } else { range }
  }

  pub fn midpoint(&self) -> f64 {
    (self.max + self.min) / 2.0
  }
}
