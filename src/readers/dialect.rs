use crate::utils::constants::{
    ANALYSED_MONTH_COLUMN, ANALYSED_YEAR_COLUMN, RAW_MONTH_COLUMN, RAW_YEAR_COLUMN,
};
use std::fmt;
use std::path::{Path, PathBuf};

/// Column layout of a station CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Pre-aggregated monthly rows written by this crate.
    Analysed,
    /// Daily observations as exported by the Bureau of Meteorology.
    Raw,
}

impl Dialect {
    pub fn year_column(&self) -> usize {
        match self {
            Dialect::Analysed => ANALYSED_YEAR_COLUMN,
            Dialect::Raw => RAW_YEAR_COLUMN,
        }
    }

    pub fn month_column(&self) -> usize {
        match self {
            Dialect::Analysed => ANALYSED_MONTH_COLUMN,
            Dialect::Raw => RAW_MONTH_COLUMN,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Analysed => "analysed",
            Dialect::Raw => "raw",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two candidate files for a station and the one chosen for reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSource {
    pub analysed_path: PathBuf,
    pub raw_path: PathBuf,
    pub dialect: Dialect,
}

impl StationSource {
    /// Prefer the analysed cache; fall back to the raw export. `None` when
    /// neither file exists.
    pub fn detect(analysed_path: PathBuf, raw_path: PathBuf) -> Option<Self> {
        let dialect = if analysed_path.exists() {
            Dialect::Analysed
        } else if raw_path.exists() {
            Dialect::Raw
        } else {
            return None;
        };

        Some(Self {
            analysed_path,
            raw_path,
            dialect,
        })
    }

    /// File that will be parsed.
    pub fn path(&self) -> &Path {
        match self.dialect {
            Dialect::Analysed => &self.analysed_path,
            Dialect::Raw => &self.raw_path,
        }
    }

    pub fn needs_cache(&self) -> bool {
        self.dialect == Dialect::Raw
    }
}
