pub mod coordinator;
pub mod dashboard;

pub use coordinator::*;
pub use dashboard::*;
