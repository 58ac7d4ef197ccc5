//! Placeholder predictions.
//!
//! There is no model behind these numbers: they are fixed values keyed by
//! commodity id and are never recomputed.

use crate::model::{Prediction, Trend};

const FIXTURES: [(&str, &str, f64, f64, Trend); 7] = [
  ("p1", "1", 64200.0, 0.87, Trend::Up),
  ("p2", "2", 78000.0, 0.82, Trend::Up),
  ("p3", "3", 31800.0, 0.79, Trend::Up),
  ("p4", "4", 104.25, 0.91, Trend::Up),
  ("p5", "5", 90.5, 0.88, Trend::Up),
  ("p6", "6", 1095.0, 0.75, Trend::Down),
  ("p7", "7", 83.75, 0.85, Trend::Up),
];

pub fn static_predictions() -> Vec<Prediction> {
  FIXTURES
    .iter()
    .map(|(id, commodity_id, predicted_price, confidence, trend)| Prediction {
      id: id.to_string(),
      commodity_id: commodity_id.to_string(),
      predicted_price: *predicted_price,
      prediction_date: None,
      confidence: *confidence,
      trend: *trend,
      created_at: None
    })
    .collect()
}

pub fn prediction_for<'a>(predictions: &'a [Prediction], commodity_id: &str) -> Option<&'a Prediction> {
  predictions.iter().find(|p| p.commodity_id == commodity_id)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn one_prediction_per_commodity() {
    let predictions = static_predictions();
    assert_eq!(predictions.len(), 7);
    for id in 1..=7 {
      let p = prediction_for(&predictions, &id.to_string()).unwrap();
      assert!((0.0..=1.0).contains(&p.confidence));
    }
    assert!(prediction_for(&predictions, "8").is_none());
  }

  #[test]
  fn lpg_is_the_only_downtrend() {
    let downs = static_predictions()
      .into_iter()
      .filter(|p| p.trend == Trend::Down)
      .map(|p| p.commodity_id)
      .collect::<Vec<_>>();
    assert_eq!(downs, vec!["6".to_string()]);
  }
}
