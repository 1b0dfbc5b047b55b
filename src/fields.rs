//! Enumerations and display helpers shared by the CLI and the TUI.

use clap::ValueEnum;

/// Ordering applied to the task list for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Insertion order of the collection.
    Unordered,
    /// Project name, ascending.
    Project,
    /// Due date, earliest first.
    Due,
    /// Completed tasks first, then pending.
    Status,
}

impl SortKey {
    /// Label used in the sort menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            SortKey::Unordered => "Original order",
            SortKey::Project => "Sort by project",
            SortKey::Due => "Sort by due date",
            SortKey::Status => "Sort by status",
        }
    }
}

/// Format a completion flag for display.
pub fn format_status(completed: bool) -> &'static str {
    if completed {
        "Completed"
    } else {
        "Pending"
    }
}
