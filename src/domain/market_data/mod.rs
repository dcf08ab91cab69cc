//! Market data aggregate: price snapshots, the price cache and its sync rules.

pub mod entities;
pub mod repositories;
pub mod services;

pub use entities::*;
pub use repositories::*;
pub use services::*;
