use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

use crate::cmd::Commands;
use crate::fields::SortKey;

/// Default data file, relative to the working directory.
pub const DEFAULT_DB: &str = "data/data.json";
pub const LOG_FILE_NAME: &str = "td.log";

/// Single-user task manager with a menu-driven terminal UI.
/// Tasks are stored in ./data/data.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "td", version, about = "Terminal task manager")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, default_value = DEFAULT_DB)]
    pub db: PathBuf,

    /// Initial sort order of the task list.
    #[arg(long, global = true, value_enum, default_value_t = SortKey::Due)]
    pub sort: SortKey,

    /// Log file. Defaults to td.log next to the task file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => path.clone(),
            None => self
                .db
                .parent()
                .map_or_else(|| PathBuf::from(LOG_FILE_NAME), |dir| dir.join(LOG_FILE_NAME)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
