pub mod config;
pub mod error;
pub mod fips;
pub mod types;

pub use config::{Config, ReportFormat};
pub use error::StormwatchError;
pub use fips::state_fips;
pub use types::*;
