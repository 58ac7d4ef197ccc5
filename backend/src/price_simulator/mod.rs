pub mod fixtures;
pub mod sim;
pub mod ticker;
