pub mod record;
pub mod registry;
pub mod station;

pub use record::{make_key, MonthlyRecord, CSV_HEADER};
pub use registry::StationRegistry;
pub use station::{Station, EMPTY_RAINFALL_MAX};
