use crate::error::{RainfallError, Result};
use crate::models::{make_key, MonthlyRecord, Station};
use crate::readers::dialect::{Dialect, StationSource};
use crate::utils::constants::{
    ANALYSED_MAX_COLUMN, ANALYSED_MIN_COLUMN, ANALYSED_TOTAL_COLUMN, DEFAULT_BUFFER_SIZE,
    MAX_VALID_MONTH, MIN_VALID_MONTH, MIN_VALID_YEAR, RAW_RAINFALL_COLUMN,
};
use crate::utils::filename::{analysed_file_path, raw_file_path};
use crate::writers::AnalysedWriter;
use chrono::{Datelike, Local};
use csv::{ByteRecord, ReaderBuilder, Trim};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Builds a [`Station`] from either the analysed cache or the raw daily
/// export, writing the cache when it had to aggregate the raw file.
pub struct StationLoader {
    base_dir: PathBuf,
    current_year: Option<i32>,
}

impl StationLoader {
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            current_year: None,
        }
    }

    /// Resolve station directories against `base_dir` instead of the
    /// working directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Pin the latest acceptable year instead of reading the clock.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }

    /// Check the inputs and pick the file to read.
    pub fn resolve(&self, directory: &str, station_name: &str) -> Result<StationSource> {
        if directory.is_empty() {
            return Err(RainfallError::MissingDirectory);
        }
        if station_name.is_empty() {
            return Err(RainfallError::MissingStation);
        }

        let analysed = analysed_file_path(&self.base_dir, directory, station_name);
        let raw = raw_file_path(&self.base_dir, directory, station_name);

        match StationSource::detect(analysed.clone(), raw.clone()) {
            Some(source) => Ok(source),
            None => Err(RainfallError::FileNotFound { analysed, raw }),
        }
    }

    /// Load the monthly rainfall statistics of `station_name` from
    /// `directory`.
    ///
    /// Nothing is returned and no cache is written unless every data row
    /// parses and validates.
    pub fn load(&self, directory: &str, station_name: &str) -> Result<Station> {
        let source = self.resolve(directory, station_name)?;

        info!(
            "Loading station '{}' from {} file: {}",
            station_name,
            source.dialect,
            source.path().display()
        );

        let station = self
            .read_station(&source, station_name)
            .inspect_err(|e| warn!("Rejected station '{}': {}", station_name, e))?;

        if source.needs_cache() {
            AnalysedWriter::new()
                .with_permissions_of(&source.raw_path)
                .write_station(&station, &source.analysed_path)?;
        }

        info!(
            "Loaded {} monthly records across {} years for station '{}'",
            station.len(),
            station.distinct_years().len(),
            station_name
        );

        Ok(station)
    }

    fn read_station(&self, source: &StationSource, station_name: &str) -> Result<Station> {
        let file = File::open(source.path())?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .buffer_capacity(DEFAULT_BUFFER_SIZE)
            .from_reader(file);

        let parser = RowParser::new(source.dialect, self.current_year());
        let mut station = Station::new(station_name);
        let mut row_count = 0u64;

        // Byte records so that undecodable text in unused columns is ignored.
        for result in reader.byte_records() {
            let row = result?;
            let line = row.position().map_or(0, |p| p.line());
            parser.apply(&row, line, &mut station)?;
            row_count += 1;
        }

        debug!(
            "Read {} data rows into {} months from {}",
            row_count,
            station.len(),
            source.path().display()
        );

        if station.is_empty() {
            return Err(RainfallError::NoDataFound);
        }

        Ok(station)
    }
}

impl Default for StationLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies one data row of a given dialect to a station.
struct RowParser {
    dialect: Dialect,
    current_year: i32,
}

impl RowParser {
    fn new(dialect: Dialect, current_year: i32) -> Self {
        Self {
            dialect,
            current_year,
        }
    }

    fn apply(&self, row: &ByteRecord, line: u64, station: &mut Station) -> Result<()> {
        let year = parse_integer(row, self.dialect.year_column(), line)?;
        let month = parse_integer(row, self.dialect.month_column(), line)?;

        if !(MIN_VALID_YEAR..=self.current_year).contains(&year) {
            return Err(RainfallError::InvalidYear { line, year });
        }
        if !(MIN_VALID_MONTH..=MAX_VALID_MONTH).contains(&month) {
            return Err(RainfallError::InvalidMonth { line, month });
        }

        let key = make_key(year, month);

        match self.dialect {
            Dialect::Analysed => {
                let total = parse_decimal(row, ANALYSED_TOTAL_COLUMN, line)?;
                let min = parse_decimal(row, ANALYSED_MIN_COLUMN, line)?;
                let max = parse_decimal(row, ANALYSED_MAX_COLUMN, line)?;

                if station.contains(&key) {
                    debug!(
                        "Duplicate month {}-{:02} on line {}, keeping the later row",
                        year, month, line
                    );
                }
                station.put(key, MonthlyRecord::new(year, month, total, min, max));
            }
            Dialect::Raw => {
                let rainfall = parse_rainfall(row, RAW_RAINFALL_COLUMN, line)?;

                match station.get_mut(&key) {
                    Some(existing) => existing.merge_daily(rainfall),
                    None => station.put(key, MonthlyRecord::seed(year, month, rainfall)),
                }
            }
        }

        Ok(())
    }
}

fn field(row: &ByteRecord, column: usize, line: u64) -> Result<&str> {
    let bytes = row.get(column).ok_or_else(|| RainfallError::NonNumericValue {
        line,
        value: String::new(),
    })?;
    std::str::from_utf8(bytes).map_err(|_| RainfallError::NonNumericValue {
        line,
        value: String::from_utf8_lossy(bytes).into_owned(),
    })
}

fn parse_integer(row: &ByteRecord, column: usize, line: u64) -> Result<i32> {
    let value = field(row, column, line)?;
    value.parse::<i32>().map_err(|_| RainfallError::NonNumericValue {
        line,
        value: value.to_string(),
    })
}

fn parse_decimal(row: &ByteRecord, column: usize, line: u64) -> Result<f64> {
    let value = field(row, column, line)?;
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(RainfallError::NonNumericValue {
            line,
            value: value.to_string(),
        }),
    }
}

/// An empty rainfall field means nothing was recorded that day.
fn parse_rainfall(row: &ByteRecord, column: usize, line: u64) -> Result<f64> {
    if field(row, column, line)?.is_empty() {
        return Ok(0.0);
    }
    parse_decimal(row, column, line)
}
