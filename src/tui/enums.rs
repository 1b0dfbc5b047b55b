//! Enumerations for TUI state management.

use crate::fields::SortKey;
use crate::tui::menu::MenuItem;

/// Screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    MainMenu,
    TaskList,
    AddTask,
    SelectTask,
    EditTask,
}

/// Main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    ListTasks,
    AddTask,
    EditTask,
    SaveAndQuit,
}

impl MainAction {
    pub const ALL: [MainAction; 4] = [
        MainAction::ListTasks,
        MainAction::AddTask,
        MainAction::EditTask,
        MainAction::SaveAndQuit,
    ];
}

impl MenuItem for MainAction {
    fn label(&self) -> &str {
        match self {
            MainAction::ListTasks => "List tasks",
            MainAction::AddTask => "Add task",
            MainAction::EditTask => "Edit task",
            MainAction::SaveAndQuit => "Save & quit",
        }
    }
}

/// Options under the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Sort(SortKey),
    Back,
}

impl ListAction {
    pub const ALL: [ListAction; 5] = [
        ListAction::Sort(SortKey::Due),
        ListAction::Sort(SortKey::Project),
        ListAction::Sort(SortKey::Status),
        ListAction::Sort(SortKey::Unordered),
        ListAction::Back,
    ];
}

impl MenuItem for ListAction {
    fn label(&self) -> &str {
        match self {
            ListAction::Sort(key) => key.menu_label(),
            ListAction::Back => "Back",
        }
    }
}

/// Options in the single-task editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    ChangeName,
    ChangeProject,
    ChangeDueDate,
    ToggleStatus,
    Save,
    Discard,
}

impl EditAction {
    pub const ALL: [EditAction; 6] = [
        EditAction::ChangeName,
        EditAction::ChangeProject,
        EditAction::ChangeDueDate,
        EditAction::ToggleStatus,
        EditAction::Save,
        EditAction::Discard,
    ];
}

impl MenuItem for EditAction {
    fn label(&self) -> &str {
        match self {
            EditAction::ChangeName => "Change name",
            EditAction::ChangeProject => "Change project",
            EditAction::ChangeDueDate => "Change due date",
            EditAction::ToggleStatus => "Toggle status",
            EditAction::Save => "Save changes",
            EditAction::Discard => "Discard changes",
        }
    }
}

/// Text field of a task that the editor prompts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Project,
    DueDate,
}

impl EditField {
    pub fn label(self) -> &'static str {
        match self {
            EditField::Name => "New name:",
            EditField::Project => "New project:",
            EditField::DueDate => "New due date (YYYY-MM-DD):",
        }
    }
}
