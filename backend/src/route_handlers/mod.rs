pub mod commodities;
