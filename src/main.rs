//! # td - terminal task manager
//!
//! A single-user task list kept in a local JSON file, driven from a
//! menu-based terminal UI.
//!
//! ```bash
//! # Open the interactive menu (data/data.json in the current directory)
//! td
//!
//! # Use another file and start sorted by project
//! td --db ~/tasks.json --sort project
//!
//! # Print the table without the UI
//! td list --sort status
//! ```
//!
//! Every task has a name, a project, a due date, a creation date and a
//! completed flag. The UI lists tasks in one of four orders, adds tasks field
//! by field, and edits a single task through a menu. Edits are made on a copy
//! and only reach the file when saved.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod dates;
pub mod db;
pub mod editor;
pub mod fields;
pub mod logging;
pub mod sort;
pub mod task;
#[cfg(test)]
mod test_support;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod menu;
    pub mod run;
    pub mod task_form;
    pub mod task_table;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    let command = cli.command.as_ref().unwrap_or(&Commands::Ui);
    if let Commands::Completions { shell } = command {
        cmd_completions(*shell);
        return;
    }

    logging::init(&cli.log_path(), cli.log_level.into());
    log::info!("td {} starting", env!("CARGO_PKG_VERSION"));

    match command {
        Commands::Ui => cmd_ui(&cli.db, cli.sort),
        Commands::List => cmd_list(&cli.db, cli.sort),
        Commands::Completions { .. } => unreachable!("completions handled above"),
    }
}
