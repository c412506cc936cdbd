use crate::utils::constants::{ANALYSED_SUFFIX, RAW_SUFFIX};
use std::path::{Path, PathBuf};

/// Cached aggregate file: `{base}/{directory}/{station}_analysed.csv`
pub fn analysed_file_path(base: &Path, directory: &str, station: &str) -> PathBuf {
    base.join(directory)
        .join(format!("{}{}", station, ANALYSED_SUFFIX))
}

/// Raw observation file: `{base}/{directory}/{station}.csv`
pub fn raw_file_path(base: &Path, directory: &str, station: &str) -> PathBuf {
    base.join(directory).join(format!("{}{}", station, RAW_SUFFIX))
}
