use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RainfallError>;

#[derive(Error, Debug)]
pub enum RainfallError {
    #[error("directory name required")]
    MissingDirectory,

    #[error("station name required")]
    MissingStation,

    #[error("file does not exist: neither {} nor {} was found", analysed.display(), raw.display())]
    FileNotFound { analysed: PathBuf, raw: PathBuf },

    #[error("nonnumerical value encountered on line {line}: '{value}'")]
    NonNumericValue { line: u64, value: String },

    #[error("invalid value for record year on line {line}: {year}")]
    InvalidYear { line: u64, year: i32 },

    #[error("invalid value for record month on line {line}: {month}")]
    InvalidMonth { line: u64, month: i32 },

    #[error("no rainfall data found")]
    NoDataFound,

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Progress template error: {0}")]
    Template(#[from] indicatif::style::TemplateError),

    #[error("{0} station(s) failed to load")]
    LoadFailures(usize),
}

impl RainfallError {
    /// True for the terminal outcomes of a station load, as opposed to
    /// ambient I/O or configuration problems.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            RainfallError::MissingDirectory
                | RainfallError::MissingStation
                | RainfallError::FileNotFound { .. }
                | RainfallError::NonNumericValue { .. }
                | RainfallError::InvalidYear { .. }
                | RainfallError::InvalidMonth { .. }
                | RainfallError::NoDataFound
        )
    }
}
