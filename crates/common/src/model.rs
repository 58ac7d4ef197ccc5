use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommodityType {
  Gold,
  Silver,
  Platinum,
  Petrol,
  Diesel,
  Lpg,
  Cng
}

impl CommodityType {
  /// Same tag as the wire format; the dashboard also uses it as a style class.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Gold => "gold",
      Self::Silver => "silver",
      Self::Platinum => "platinum",
      Self::Petrol => "petrol",
      Self::Diesel => "diesel",
      Self::Lpg => "lpg",
      Self::Cng => "cng",
    }
  }
}

impl fmt::Display for CommodityType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A tracked commodity as served by `GET /commodities` and pushed over the relay.
///
/// `id` is the merge key on the dashboard side: an update never adds a row,
/// it only replaces the record carrying the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commodity {
  pub id: String,
  pub name: String,
  #[serde(rename = "type")]
  pub kind: CommodityType,
  pub current_price: f64,
  pub unit: String,
  pub last_updated: DateTime<Utc>,
  pub created_at: DateTime<Utc>
}

impl Commodity {
  pub fn new(id: &str, name: &str, kind: CommodityType, current_price: f64, unit: &str, now: DateTime<Utc>) -> Self {
    Self {
      id: id.to_string(),
      name: name.to_string(),
      kind,
      current_price,
      unit: unit.to_string(),
      last_updated: now,
      created_at: now
    }
  }

  /// Two-letter badge shown on the dashboard card.
  pub fn badge(&self) -> String {
    self.name.chars().take(2).collect::<String>().to_uppercase()
  }
}

/// One synthetic point of the mock price history. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
  pub id: String,
  pub commodity_id: String,
  pub price: f64,
  pub recorded_at: DateTime<Utc>,
  pub created_at: DateTime<Utc>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
  Up,
  Down,
  Stable
}

/// Static prediction fixture, see [`crate::predictions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
  pub id: String,
  pub commodity_id: String,
  pub predicted_price: f64,
  pub prediction_date: Option<DateTime<Utc>>,
  pub confidence: f64,
  pub trend: Trend,
  pub created_at: Option<DateTime<Utc>>
}

impl Prediction {
  /// Signed percentage between the predicted and the current price.
  pub fn change_pct(&self, current_price: f64) -> f64 {
    if current_price == 0.0 {
      return 0.0;
    }
    (self.predicted_price - current_price) / current_price * 100.0
  }

  pub fn confidence_pct(&self) -> f64 {
    (self.confidence * 100.0).round()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn ts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
  }

  #[test]
  fn commodity_wire_format_uses_type_key() {
    let gold = Commodity::new("1", "Gold", CommodityType::Gold, 63500.0, "₹/10g", ts());
    let value = serde_json::to_value(&gold).unwrap();

    assert_eq!(value["type"], "gold");
    assert_eq!(value["current_price"], 63500.0);
    for key in ["id", "name", "type", "current_price", "unit", "last_updated", "created_at"] {
      assert!(value.get(key).is_some(), "missing {key}");
    }
    assert!(value.get("kind").is_none());
  }

  #[test]
  fn display_matches_the_wire_tag() {
    use CommodityType::*;
    for kind in [Gold, Silver, Platinum, Petrol, Diesel, Lpg, Cng] {
      let tag = serde_json::to_value(kind).unwrap();
      assert_eq!(tag, kind.to_string());
    }
  }

  #[test]
  fn parses_relay_payload() {
    let raw = r#"{"id":"6","name":"LPG","type":"lpg","current_price":1105.0,"unit":"₹/cylinder",
      "last_updated":"2025-01-02T03:04:05Z","created_at":"2025-01-02T03:04:05Z"}"#;
    let lpg: Commodity = serde_json::from_str(raw).unwrap();

    assert_eq!(lpg.kind, CommodityType::Lpg);
    assert_eq!(lpg.last_updated, ts());
    assert_eq!(lpg.badge(), "LP");
  }

  #[test]
  fn change_pct_is_signed() {
    let p = Prediction {
      id: "p6".into(),
      commodity_id: "6".into(),
      predicted_price: 1095.0,
      prediction_date: None,
      confidence: 0.75,
      trend: Trend::Down,
      created_at: None
    };
    assert!(p.change_pct(1105.0) < 0.0);
    assert!((p.change_pct(1000.0) - 9.5).abs() < 1e-9);
    assert_eq!(p.change_pct(0.0), 0.0);
    assert_eq!(p.confidence_pct(), 75.0);
  }
}
