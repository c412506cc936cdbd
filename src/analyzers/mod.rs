pub mod rainfall_analyzer;

pub use rainfall_analyzer::{axis_ticks, scaled_height, MonthExtreme, RainfallAnalyzer, RainfallStatistics};
