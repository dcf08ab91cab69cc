pub mod chart;
pub mod errors;
pub mod events;
pub mod logging;
pub mod market_data;
pub mod portfolio;
pub mod search;
pub mod wallet;
