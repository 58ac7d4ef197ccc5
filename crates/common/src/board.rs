use crate::model::Commodity;

/// Dashboard-side view of the commodity list.
///
/// Seeded once from the listing endpoint, then patched by relay updates.
/// Updates are matched by id; an id the board has never seen is dropped
/// instead of appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommodityBoard {
  commodities: Vec<Commodity>
}

impl CommodityBoard {
  pub fn new(commodities: Vec<Commodity>) -> Self {
    Self { commodities }
  }

  pub fn replace_all(&mut self, commodities: Vec<Commodity>) {
    self.commodities = commodities;
  }

  /// Replaces the record with the same id. Returns `false` when no record matched.
  pub fn apply_update(&mut self, update: Commodity) -> bool {
    match self.commodities.iter_mut().find(|c| c.id == update.id) {
      Some(slot) => {
        *slot = update;
        true
      },
      None => false
    }
  }

  pub fn get(&self, id: &str) -> Option<&Commodity> {
    self.commodities.iter().find(|c| c.id == id)
  }

  pub fn commodities(&self) -> &[Commodity] {
    &self.commodities
  }

  pub fn len(&self) -> usize {
    self.commodities.len()
  }

  pub fn is_empty(&self) -> bool {
    self.commodities.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::CommodityType;
  use chrono::{TimeZone, Utc};

  fn board() -> CommodityBoard {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    CommodityBoard::new(vec![
      Commodity::new("1", "Gold", CommodityType::Gold, 63500.0, "₹/10g", now),
      Commodity::new("2", "Silver", CommodityType::Silver, 76500.0, "₹/kg", now),
      Commodity::new("3", "Platinum", CommodityType::Platinum, 31200.0, "₹/10g", now),
    ])
  }

  #[test]
  fn update_replaces_matching_record_only() {
    let mut board = board();
    let before = board.clone();

    let mut silver = board.get("2").cloned().unwrap();
    silver.current_price = 77000.0;
    assert!(board.apply_update(silver));

    assert_eq!(board.len(), 3);
    assert_eq!(board.get("2").unwrap().current_price, 77000.0);
    assert_eq!(board.get("1"), before.get("1"));
    assert_eq!(board.get("3"), before.get("3"));
  }

  #[test]
  fn unknown_id_is_ignored() {
    let mut board = board();
    let before = board.clone();

    let mut stranger = board.get("1").cloned().unwrap();
    stranger.id = "42".to_string();
    assert!(!board.apply_update(stranger));

    assert_eq!(board, before);
  }

  #[test]
  fn empty_board_stays_empty() {
    let mut empty = CommodityBoard::default();
    let gold = board().get("1").cloned().unwrap();
    assert!(!empty.apply_update(gold));
    assert!(empty.is_empty());
  }
}
