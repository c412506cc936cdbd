pub mod dialect;
pub mod station_loader;

pub use dialect::{Dialect, StationSource};
pub use station_loader::StationLoader;
