//! Command implementations for the CLI interface.

use std::path::Path;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use log::{error, info};

use crate::db::{JsonFileStorage, TaskStore};
use crate::fields::SortKey;
use crate::sort::sorted;
use crate::tui::app::App;
use crate::tui::run::run_tui;
use crate::tui::task_table::plain_table;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive UI (default).
    Ui,

    /// Print the task table and exit.
    List,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Load the task file, exiting with status 1 if it cannot be parsed.
///
/// A missing file is not an error: the store starts empty and the returned
/// warning says why.
pub fn open_store(db_path: &Path) -> (TaskStore, Option<String>) {
    match TaskStore::open(Box::new(JsonFileStorage::new(db_path))) {
        Ok(opened) => opened,
        Err(e) => {
            error!("cannot start: {e}");
            eprintln!("Error: {e}");
            eprintln!("The file was left untouched. Fix or move it and try again.");
            std::process::exit(1);
        }
    }
}

/// Launch the terminal user interface.
pub fn cmd_ui(db_path: &Path, sort_key: SortKey) {
    let (store, warning) = open_store(db_path);
    info!("starting UI on {} with {} task(s)", db_path.display(), store.len());

    let mut app = App::new(store, sort_key);
    if let Some(w) = warning {
        app.set_status_message(w);
    }
    if let Err(e) = run_tui(&mut app) {
        error!("UI error: {e}");
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Print tasks in the given order.
pub fn cmd_list(db_path: &Path, sort_key: SortKey) {
    let (store, warning) = open_store(db_path);
    if let Some(w) = warning {
        eprintln!("{w}");
    }
    let view = sorted(store.tasks(), sort_key);
    println!("{}", plain_table(view.iter().map(|(_, t)| *t)));
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
