use crate::error::Result;
use crate::utils::constants::{DEFAULT_LOG_LEVEL, DEFAULT_PREVIEW_ROWS, ENV_PREFIX, SETTINGS_FILE};
use config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Defaults for the command line, read from an optional `rainfall.toml`
/// and `RAINFALL_*` environment variables. Flags override these.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// Data directory used when `--directory` is not given.
    pub directory: Option<String>,

    /// Directory that station directories are resolved against.
    pub base_dir: PathBuf,

    #[validate(length(min = 1))]
    pub log_level: String,

    #[validate(range(max = 1000))]
    pub preview_rows: usize,
}

impl Settings {
    /// Read `rainfall.{toml,yaml,json,...}` from the working directory if
    /// present.
    pub fn load() -> Result<Self> {
        Self::build(File::with_name(SETTINGS_FILE).required(false))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::build(File::from(path).required(true))
    }

    fn build(file: File<FileSourceFile, FileFormat>) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("base_dir", ".")?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("preview_rows", DEFAULT_PREVIEW_ROWS as i64)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}
