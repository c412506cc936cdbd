use crate::error::Result;
use crate::models::{Station, CSV_HEADER};
use csv::{Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Writes a station's monthly records in the analysed CSV dialect.
pub struct AnalysedWriter {
    terminator: Terminator,
    permissions_from: Option<PathBuf>,
}

impl AnalysedWriter {
    pub fn new() -> Self {
        Self {
            terminator: Terminator::Any(b'\n'),
            permissions_from: None,
        }
    }

    /// Give the cache the same permissions as `reference` (normally the raw
    /// export) instead of the temp file's owner-only mode.
    pub fn with_permissions_of(mut self, reference: impl Into<PathBuf>) -> Self {
        self.permissions_from = Some(reference.into());
        self
    }

    /// Write the header and one row per record, in insertion order.
    ///
    /// Rows go to a temporary file next to `path` which is renamed over
    /// `path` once complete, so readers never observe a partial cache.
    pub fn write_station(&self, station: &Station, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp_file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = WriterBuilder::new()
                .terminator(self.terminator)
                .from_writer(temp_file.as_file());

            writer.write_record(CSV_HEADER)?;
            for record in station.values() {
                writer.write_record(record.cache_fields())?;
            }
            writer.flush()?;
        }

        if let Some(ref reference) = self.permissions_from {
            let permissions = fs::metadata(reference)?.permissions();
            temp_file.as_file().set_permissions(permissions)?;
        }

        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        info!(
            "Wrote {} monthly records for station '{}' to {}",
            station.len(),
            station.name(),
            path.display()
        );

        Ok(())
    }
}

impl Default for AnalysedWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyRecord;
    use tempfile::TempDir;

    #[test]
    fn test_write_station() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("station_analysed.csv");

        let mut station = Station::new("station");
        for record in [
            MonthlyRecord::new(2001, 3, 40.0, 0.0, 12.346),
            MonthlyRecord::new(1999, 12, 7.25, 0.2, 3.0),
        ] {
            station.put(record.key(), record);
        }

        AnalysedWriter::new().write_station(&station, &path)?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "year,month,total,min,max\n2001,3,40.00,0.00,12.35\n1999,12,7.25,0.20,3.00\n"
        );

        Ok(())
    }

    #[test]
    fn test_overwrites_existing_cache() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("station_analysed.csv");
        fs::write(&path, "stale contents that are much longer than the new cache\n")?;

        let mut station = Station::new("station");
        let record = MonthlyRecord::seed(2010, 1, 1.5);
        station.put(record.key(), record);

        AnalysedWriter::new().write_station(&station, &path)?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "year,month,total,min,max\n2010,1,1.50,1.50,1.50\n");
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_cache_copies_reference_permissions() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new()?;
        let raw = dir.path().join("station.csv");
        let path = dir.path().join("station_analysed.csv");
        fs::write(&raw, "header\n")?;
        fs::set_permissions(&raw, fs::Permissions::from_mode(0o644))?;

        let mut station = Station::new("station");
        let record = MonthlyRecord::seed(2010, 1, 1.5);
        station.put(record.key(), record);

        AnalysedWriter::new()
            .with_permissions_of(&raw)
            .write_station(&station, &path)?;

        let mode = fs::metadata(&path)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);

        Ok(())
    }
}
