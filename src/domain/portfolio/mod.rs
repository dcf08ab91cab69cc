//! Portfolio aggregate: the watchlist, its reducer and the values derived from it.

pub mod entities;
pub mod reducer;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use reducer::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
