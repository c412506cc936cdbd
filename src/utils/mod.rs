pub mod constants;
pub mod filename;
pub mod progress;
pub mod settings;

pub use constants::*;
pub use filename::{analysed_file_path, raw_file_path};
pub use progress::ProgressReporter;
pub use settings::Settings;
