//! Text prompts and the add-task form.
//!
//! Adding a task asks for one field at a time: name, project, due date and
//! whether it is already done. A rejected answer keeps the form on the same
//! field with the error shown under the input.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::editor::{parse_yes_no, require_date, require_text, ValidationError};
use crate::task::Task;
use crate::tui::colors::ERROR;
use crate::tui::input::InputField;

/// What a key press did to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Editing,
    Submit(String),
    Cancel,
}

/// A labelled single-line input with an optional error message.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub label: String,
    pub field: InputField,
    pub error: Option<String>,
}

impl Prompt {
    pub fn new(label: &str) -> Self {
        Self::with_value(label, "")
    }

    /// Prompt pre-filled with the current value of the field being edited.
    pub fn with_value(label: &str, value: &str) -> Self {
        Prompt {
            label: label.to_string(),
            field: InputField::with_value(value),
            error: None,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> PromptEvent {
        match key.code {
            KeyCode::Enter => PromptEvent::Submit(self.field.value.clone()),
            KeyCode::Esc => PromptEvent::Cancel,
            _ => {
                self.field.handle_key(key);
                PromptEvent::Editing
            }
        }
    }

    pub fn reject(&mut self, err: &ValidationError) {
        self.error = Some(err.to_string());
    }

    /// Draw the prompt as a popup over `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, title: &str) {
        let popup = popup_rect(area, 60, 6);
        f.render_widget(Clear, popup);

        let mut lines = vec![
            Line::from(self.label.clone()),
            Line::from(format!("> {}", self.field.value)),
        ];
        if let Some(err) = &self.error {
            lines.push(Line::from(Span::styled(err.clone(), ERROR)));
        }
        let block = Block::default().borders(Borders::ALL).title(title.to_string());
        f.render_widget(Paragraph::new(lines).block(block), popup);

        // Inside the border, after "> ".
        let col = u16::try_from(self.field.cursor).unwrap_or(u16::MAX);
        let x = popup.x.saturating_add(3).saturating_add(col);
        let y = popup.y + 2;
        f.set_cursor_position(Position::new(x.min(popup.right().saturating_sub(2)), y));
    }
}

/// A rectangle of at most `width` x `height` centred in `area`.
pub fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// The field the add-task form is currently asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStep {
    Name,
    Project,
    DueDate,
    Completed,
}

impl AddStep {
    pub fn label(self) -> &'static str {
        match self {
            AddStep::Name => "Enter task name:",
            AddStep::Project => "Enter project name:",
            AddStep::DueDate => "Enter due date (YYYY-MM-DD, today, tomorrow, in 3d):",
            AddStep::Completed => "Is the task completed? (yes/no, default no)",
        }
    }
}

/// State of an in-progress task addition.
#[derive(Debug, Clone)]
pub struct AddTaskForm {
    step: AddStep,
    name: String,
    project: String,
    due_date: Option<NaiveDate>,
    pub prompt: Prompt,
}

impl AddTaskForm {
    pub fn new() -> Self {
        AddTaskForm {
            step: AddStep::Name,
            name: String::new(),
            project: String::new(),
            due_date: None,
            prompt: Prompt::new(AddStep::Name.label()),
        }
    }

    pub fn step(&self) -> AddStep {
        self.step
    }

    fn advance(&mut self, next: AddStep) {
        self.step = next;
        self.prompt = Prompt::new(next.label());
    }

    /// Accept the answer for the current step.
    ///
    /// Returns the finished task after the last step. `today` is both the
    /// reference for relative due dates and the creation date.
    pub fn submit(&mut self, input: &str, today: NaiveDate) -> Result<Option<Task>, ValidationError> {
        match self.step {
            AddStep::Name => {
                self.name = require_text("Name", input)?;
                self.advance(AddStep::Project);
            }
            AddStep::Project => {
                self.project = require_text("Project", input)?;
                self.advance(AddStep::DueDate);
            }
            AddStep::DueDate => {
                self.due_date = Some(require_date(input, today)?);
                self.advance(AddStep::Completed);
            }
            AddStep::Completed => {
                let due_date = self.due_date.unwrap_or(today);
                let task = Task::new(&self.name, &self.project, today, due_date, parse_yes_no(input));
                return Ok(Some(task));
            }
        }
        Ok(None)
    }

    /// Answers given so far, for display above the prompt.
    pub fn answered(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if self.step != AddStep::Name {
            out.push(("Name", self.name.clone()));
        }
        if matches!(self.step, AddStep::DueDate | AddStep::Completed) {
            out.push(("Project", self.project.clone()));
        }
        if let Some(d) = self.due_date {
            out.push(("Due date", d.to_string()));
        }
        out
    }
}

impl Default for AddTaskForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::date;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_full_sequence() {
        let today = date(2025, 2, 14);
        let mut form = AddTaskForm::new();

        assert_eq!(form.submit("Write report", today), Ok(None));
        assert_eq!(form.step(), AddStep::Project);
        assert_eq!(form.submit("Q3", today), Ok(None));
        assert_eq!(form.submit("2025-03-01", today), Ok(None));
        assert_eq!(form.step(), AddStep::Completed);

        let task = form.submit("", today).unwrap().unwrap();
        assert_eq!(task, Task::new("Write report", "Q3", today, date(2025, 3, 1), false));
    }

    #[test]
    fn test_rejection_stays_on_step() {
        let today = date(2025, 2, 14);
        let mut form = AddTaskForm::new();

        assert_eq!(form.submit("   ", today), Err(ValidationError::EmptyField("Name")));
        assert_eq!(form.step(), AddStep::Name);

        form.submit("Plan", today).unwrap();
        form.submit("Ops", today).unwrap();
        assert!(matches!(form.submit("soon", today), Err(ValidationError::InvalidDate(_))));
        assert_eq!(form.step(), AddStep::DueDate);
        assert_eq!(
            form.answered(),
            vec![("Name", "Plan".to_string()), ("Project", "Ops".to_string())]
        );
    }

    #[test]
    fn test_prompt_keys() {
        let mut prompt = Prompt::with_value("Name", "ab");
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(prompt.handle_key(&press(KeyCode::Char('c'))), PromptEvent::Editing);
        assert_eq!(prompt.handle_key(&press(KeyCode::Enter)), PromptEvent::Submit("abc".to_string()));
        assert_eq!(prompt.handle_key(&press(KeyCode::Esc)), PromptEvent::Cancel);
    }

    #[test]
    fn test_cursor_stays_inside_popup_for_long_input() {
        let prompt = Prompt::with_value("Name", &"x".repeat(70_000));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                prompt.render(f, area, "Edit Task");
            })
            .unwrap();

        let popup = popup_rect(Rect::new(0, 0, 80, 24), 60, 6);
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor, Position::new(popup.right() - 2, popup.y + 2));
    }

    #[test]
    fn test_popup_rect_fits_small_area() {
        let area = Rect::new(0, 0, 40, 4);
        assert_eq!(popup_rect(area, 60, 6), area);
        assert_eq!(popup_rect(Rect::new(0, 0, 80, 24), 60, 6), Rect::new(10, 9, 60, 6));
    }
}
