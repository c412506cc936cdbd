/// File name suffixes
pub const ANALYSED_SUFFIX: &str = "_analysed.csv";
pub const RAW_SUFFIX: &str = ".csv";

/// Raw Bureau of Meteorology export columns (0-based)
pub const RAW_YEAR_COLUMN: usize = 2;
pub const RAW_MONTH_COLUMN: usize = 3;
pub const RAW_RAINFALL_COLUMN: usize = 5;

/// Analysed CSV columns (0-based)
pub const ANALYSED_YEAR_COLUMN: usize = 0;
pub const ANALYSED_MONTH_COLUMN: usize = 1;
pub const ANALYSED_TOTAL_COLUMN: usize = 2;
pub const ANALYSED_MIN_COLUMN: usize = 3;
pub const ANALYSED_MAX_COLUMN: usize = 4;

/// Calendar constraints
pub const MIN_VALID_YEAR: i32 = 1;
pub const MIN_VALID_MONTH: i32 = 1;
pub const MAX_VALID_MONTH: i32 = 12;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DEFAULT_PREVIEW_ROWS: usize = 12;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const SETTINGS_FILE: &str = "rainfall";
pub const ENV_PREFIX: &str = "RAINFALL";
