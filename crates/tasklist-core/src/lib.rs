pub mod config;
pub mod error;
pub mod result;

pub use config::{AppConfig, SeedConfig};
pub use error::TaskError;
pub use result::TaskResult;
