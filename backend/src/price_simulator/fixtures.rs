use chrono::{DateTime, Utc};
use pricepredict_common::{Commodity, CommodityType};

/// The fixed set of commodities the simulator starts with.
pub fn seed_commodities(now: DateTime<Utc>) -> Vec<Commodity> {
  vec![
    Commodity::new("1", "Gold", CommodityType::Gold, 63500.00, "₹/10g", now),
    Commodity::new("2", "Silver", CommodityType::Silver, 76500.00, "₹/kg", now),
    Commodity::new("3", "Platinum", CommodityType::Platinum, 31200.00, "₹/10g", now),
    Commodity::new("4", "Petrol", CommodityType::Petrol, 102.50, "₹/L", now),
    Commodity::new("5", "Diesel", CommodityType::Diesel, 89.75, "₹/L", now),
    Commodity::new("6", "LPG", CommodityType::Lpg, 1105.00, "₹/cylinder", now),
    Commodity::new("7", "CNG", CommodityType::Cng, 82.50, "₹/kg", now),
  ]
}
