//! Chart geometry for the allocation donut and the per-token sparklines.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
