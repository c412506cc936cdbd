pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{RainfallError, Result};
pub use models::{MonthlyRecord, Station, StationRegistry};
pub use readers::StationLoader;

/// Load a station relative to the working directory.
pub fn load(directory: &str, station_name: &str) -> Result<Station> {
    StationLoader::new().load(directory, station_name)
}
