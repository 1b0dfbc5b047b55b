//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store, routes key
//! presses to the active screen (main menu, task list, add form, task picker,
//! editor) and renders it.

use std::io;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{debug, error, info, trace};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::db::TaskStore;
use crate::editor::TaskEditor;
use crate::fields::SortKey;
use crate::sort::sorted;
use crate::tui::{
    colors::STATUS_BAR,
    enums::{AppState, EditAction, EditField, ListAction, MainAction},
    input::{classify, is_interrupt},
    menu::{render_menu, Menu, MenuOutcome},
    task_form::{AddTaskForm, Prompt, PromptEvent},
    task_table::render_task_table,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Main application state for the terminal user interface.
pub struct App {
    state: AppState,
    store: TaskStore,
    sort_key: SortKey,
    main_menu: Menu<MainAction>,
    list_menu: Menu<ListAction>,
    /// Picker over collection indices, in display order.
    task_menu: Option<Menu<usize>>,
    add_form: Option<AddTaskForm>,
    editor: Option<TaskEditor>,
    edit_menu: Menu<EditAction>,
    edit_prompt: Option<(EditField, Prompt)>,
    status_message: String,
}

impl App {
    pub fn new(store: TaskStore, sort_key: SortKey) -> Self {
        App {
            state: AppState::MainMenu,
            store,
            sort_key,
            main_menu: Menu::fixed(&MainAction::ALL),
            list_menu: Menu::fixed(&ListAction::ALL),
            task_menu: None,
            add_form: None,
            editor: None,
            edit_menu: Menu::fixed(&EditAction::ALL),
            edit_prompt: None,
            status_message: String::new(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Set a status message to display in the status bar.
    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn back_to_main(&mut self) {
        self.state = AppState::MainMenu;
        self.task_menu = None;
        self.add_form = None;
        self.editor = None;
        self.edit_prompt = None;
    }

    /// Handle one key press.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        trace!("key {:?} in {:?}", key.code, self.state);
        if is_interrupt(&key) {
            info!("interrupted, quitting without saving");
            return true;
        }
        self.status_message.clear();

        match self.state {
            AppState::MainMenu => self.handle_main_menu_input(key),
            AppState::TaskList => {
                self.handle_task_list_input(key);
                false
            }
            AppState::AddTask => {
                self.handle_add_input(key);
                false
            }
            AppState::SelectTask => {
                self.handle_select_input(key);
                false
            }
            AppState::EditTask => {
                self.handle_edit_input(key);
                false
            }
        }
    }

    fn handle_main_menu_input(&mut self, key: KeyEvent) -> bool {
        let MenuOutcome::Selected(i) = self.main_menu.handle(classify(&key)) else {
            return false;
        };
        match self.main_menu.item(i).copied() {
            Some(MainAction::ListTasks) => self.state = AppState::TaskList,
            Some(MainAction::AddTask) => {
                self.add_form = Some(AddTaskForm::new());
                self.state = AppState::AddTask;
            }
            Some(MainAction::EditTask) => self.open_task_picker(),
            Some(MainAction::SaveAndQuit) => return self.save_and_quit(),
            None => {}
        }
        false
    }

    fn save_and_quit(&mut self) -> bool {
        match self.store.save() {
            Ok(()) => {
                info!("saved on quit");
                true
            }
            Err(e) => {
                error!("save on quit failed: {e}");
                self.set_status_message(format!("Save failed: {e}"));
                false
            }
        }
    }

    fn handle_task_list_input(&mut self, key: KeyEvent) {
        match self.list_menu.handle(classify(&key)) {
            MenuOutcome::Selected(i) => match self.list_menu.item(i).copied() {
                Some(ListAction::Sort(sort_key)) => {
                    debug!("sort key {:?} -> {:?}", self.sort_key, sort_key);
                    self.sort_key = sort_key;
                }
                Some(ListAction::Back) | None => self.back_to_main(),
            },
            MenuOutcome::Cancelled => self.back_to_main(),
            MenuOutcome::Pending => {}
        }
    }

    fn handle_add_input(&mut self, key: KeyEvent) {
        let Some(form) = self.add_form.as_mut() else {
            self.back_to_main();
            return;
        };
        match form.prompt.handle_key(&key) {
            PromptEvent::Editing => {}
            PromptEvent::Cancel => {
                self.back_to_main();
                self.set_status_message("Add cancelled".to_string());
            }
            PromptEvent::Submit(input) => match form.submit(&input, today()) {
                Ok(None) => {}
                Ok(Some(task)) => {
                    self.back_to_main();
                    let name = task.name.clone();
                    let index = self.store.push(task);
                    info!("added task {index} ({name})");
                    match self.store.save() {
                        Ok(()) => self.set_status_message(format!("Added '{name}'")),
                        Err(e) => {
                            error!("save after add failed: {e}");
                            self.set_status_message(format!("Added '{name}' but saving failed: {e}"));
                        }
                    }
                }
                Err(e) => form.prompt.reject(&e),
            },
        }
    }

    /// Show the task list as a picker in the current sort order.
    fn open_task_picker(&mut self) {
        let order: Vec<usize> = sorted(self.store.tasks(), self.sort_key)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        match Menu::new(order) {
            Some(menu) => {
                self.task_menu = Some(menu);
                self.state = AppState::SelectTask;
            }
            None => self.set_status_message("No tasks to edit".to_string()),
        }
    }

    fn handle_select_input(&mut self, key: KeyEvent) {
        let Some(menu) = self.task_menu.as_mut() else {
            self.back_to_main();
            return;
        };
        match menu.handle(classify(&key)) {
            MenuOutcome::Selected(_) => {
                let index = *menu.selected_item();
                self.open_editor(index);
            }
            MenuOutcome::Cancelled => self.back_to_main(),
            MenuOutcome::Pending => {}
        }
    }

    fn open_editor(&mut self, index: usize) {
        match TaskEditor::begin(&self.store, index) {
            Some(editor) => {
                debug!("editing task {index}");
                self.editor = Some(editor);
                self.edit_menu.reset();
                self.edit_prompt = None;
                self.state = AppState::EditTask;
            }
            None => self.set_status_message(format!("Task {index} no longer exists")),
        }
    }

    fn handle_edit_input(&mut self, key: KeyEvent) {
        if let Some((field, prompt)) = self.edit_prompt.as_mut() {
            match prompt.handle_key(&key) {
                PromptEvent::Editing => {}
                PromptEvent::Cancel => self.edit_prompt = None,
                PromptEvent::Submit(input) => {
                    let Some(editor) = self.editor.as_mut() else {
                        return;
                    };
                    let result = match field {
                        EditField::Name => editor.set_name(&input),
                        EditField::Project => editor.set_project(&input),
                        EditField::DueDate => editor.set_due_date(&input, today()),
                    };
                    match result {
                        Ok(()) => self.edit_prompt = None,
                        Err(e) => prompt.reject(&e),
                    }
                }
            }
            return;
        }

        match self.edit_menu.handle(classify(&key)) {
            MenuOutcome::Selected(i) => {
                if let Some(action) = self.edit_menu.item(i).copied() {
                    self.apply_edit_action(action);
                }
            }
            MenuOutcome::Cancelled => self.discard_edit(),
            MenuOutcome::Pending => {}
        }
    }

    fn apply_edit_action(&mut self, action: EditAction) {
        let Some(editor) = self.editor.as_mut() else {
            self.back_to_main();
            return;
        };
        let draft = editor.draft();
        match action {
            EditAction::ChangeName => {
                self.edit_prompt = Some((EditField::Name, Prompt::with_value(EditField::Name.label(), &draft.name)));
            }
            EditAction::ChangeProject => {
                self.edit_prompt = Some((
                    EditField::Project,
                    Prompt::with_value(EditField::Project.label(), &draft.project),
                ));
            }
            EditAction::ChangeDueDate => {
                self.edit_prompt = Some((
                    EditField::DueDate,
                    Prompt::with_value(EditField::DueDate.label(), &draft.due_date.to_string()),
                ));
            }
            EditAction::ToggleStatus => editor.toggle_status(),
            EditAction::Save => match editor.commit(&mut self.store) {
                Ok(()) => {
                    self.back_to_main();
                    self.set_status_message("Task saved".to_string());
                }
                Err(e) => {
                    error!("commit failed: {e}");
                    self.set_status_message(format!("Save failed: {e}. Choose Save changes to retry"));
                }
            },
            EditAction::Discard => self.discard_edit(),
        }
    }

    fn discard_edit(&mut self) {
        if let Some(editor) = self.editor.take() {
            if editor.is_dirty(&self.store) {
                info!("discarded edits to task {}", editor.index());
                self.set_status_message("Changes discarded".to_string());
            }
        }
        self.back_to_main();
    }

    /// Poll for and handle one keyboard event. Blocks until one arrives.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let summary = format!(
            "{} task(s)  Order: {}",
            self.store.len(),
            self.sort_key.menu_label()
        );
        let header_text = vec![Line::from(vec![
            Span::styled("TASKS", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(summary, Style::default().add_modifier(Modifier::ITALIC)),
        ])];
        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn render_task_list(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(ListAction::ALL.len() as u16 + 2),
            ])
            .split(area);

        let view = sorted(self.store.tasks(), self.sort_key);
        let title = format!("Tasks ({})", view.len());
        render_task_table(f, chunks[0], view.iter().map(|(_, t)| *t), None, &title);
        render_menu(f, chunks[1], &self.list_menu, "Order");
    }

    fn render_add(&self, f: &mut Frame, area: Rect) {
        let Some(form) = &self.add_form else {
            return;
        };
        let lines: Vec<Line> = form
            .answered()
            .into_iter()
            .map(|(label, value)| Line::from(format!("{label}: {value}")))
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("New task")),
            area,
        );
        form.prompt.render(f, area, "Add Task");
    }

    fn render_select(&self, f: &mut Frame, area: Rect) {
        let Some(menu) = &self.task_menu else {
            return;
        };
        let rows = menu.items().iter().filter_map(|&i| self.store.get(i));
        render_task_table(f, area, rows, Some(menu.selected()), "Select a task to edit");
    }

    fn render_edit(&self, f: &mut Frame, area: Rect) {
        let Some(editor) = &self.editor else {
            return;
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(EditAction::ALL.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(area);

        let title = if editor.is_dirty(&self.store) {
            "Editing (unsaved changes)"
        } else {
            "Editing"
        };
        render_task_table(f, chunks[0], std::iter::once(editor.draft()), None, title);
        render_menu(f, chunks[1], &self.edit_menu, "Edit");

        if let Some((_, prompt)) = &self.edit_prompt {
            prompt.render(f, area, "Edit Task");
        }
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::MainMenu => "↑/↓ move | Enter select | Ctrl+C quit",
                AppState::TaskList => "↑/↓ move | Enter apply | Esc back",
                AppState::AddTask => "Enter confirm | Esc cancel",
                AppState::SelectTask => "↑/↓ move | Enter edit | Esc back",
                AppState::EditTask if self.edit_prompt.is_some() => "Enter confirm | Esc cancel",
                AppState::EditTask => "↑/↓ move | Enter select | Esc discard",
            }
            .to_string()
        };
        let status = Paragraph::new(status_text)
            .style(STATUS_BAR)
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the active screen.
    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        self.render_header(f, chunks[0]);
        match self.state {
            AppState::MainMenu => render_menu(f, chunks[1], &self.main_menu, "Main Menu"),
            AppState::TaskList => self.render_task_list(f, chunks[1]),
            AppState::AddTask => self.render_add(f, chunks[1]),
            AppState::SelectTask => self.render_select(f, chunks[1]),
            AppState::EditTask => self.render_edit(f, chunks[1]),
        }
        self.render_status_bar(f, chunks[2]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
