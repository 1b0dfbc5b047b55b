//! File logging.
//!
//! The TUI owns the terminal, so log records go to a file instead of stderr.

use std::fs::{self, File};
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Initialise the global logger writing to `path`.
///
/// Logging stays disabled if the file cannot be created.
pub fn init(path: &Path, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(dir);
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
