pub mod operation;
pub mod params;

pub use operation::{ChangeMe, Operation};
pub use params::LogConfig;
