pub mod decoder;
pub mod driver;
pub mod model_builder;

pub use driver::{DriverConfig, DriverStatus};
