pub mod commodity_card;
pub mod historical_chart;
pub mod template;
