//! Types and pure logic shared by the price simulator and the dashboard.

pub mod board;
pub mod chart;
pub mod history;
pub mod model;
pub mod predictions;
pub mod relay;
pub mod session;

pub use model::{Commodity, CommodityType, PriceHistoryPoint, Prediction, Trend};
