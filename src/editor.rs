//! Field validation and the single-task editor.
//!
//! The editor works on a copy of the task. Nothing reaches the collection
//! until `commit`, so discarding an edit leaves the stored task as it was.

use chrono::NaiveDate;
use log::info;

use crate::dates::parse_due_input;
use crate::db::{StoreError, TaskStore};
use crate::task::Task;

/// Rejected user input. The caller re-prompts the same field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("'{0}' is not a valid date, use YYYY-MM-DD")]
    InvalidDate(String),
}

/// Trim `input` and reject it if nothing is left.
pub fn require_text(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value.to_string())
}

pub fn require_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    parse_due_input(input, today).ok_or_else(|| ValidationError::InvalidDate(input.trim().to_string()))
}

/// "yes"/"y" in any case is true; everything else, including blank, is false.
pub fn parse_yes_no(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Pending edits to the task at one index of the store.
#[derive(Debug, Clone)]
pub struct TaskEditor {
    index: usize,
    draft: Task,
}

impl TaskEditor {
    /// Start editing a copy of the task at `index`.
    pub fn begin(store: &TaskStore, index: usize) -> Option<Self> {
        let draft = store.get(index)?.clone();
        Some(TaskEditor { index, draft })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn draft(&self) -> &Task {
        &self.draft
    }

    pub fn set_name(&mut self, input: &str) -> Result<(), ValidationError> {
        self.draft.name = require_text("Name", input)?;
        Ok(())
    }

    pub fn set_project(&mut self, input: &str) -> Result<(), ValidationError> {
        self.draft.project = require_text("Project", input)?;
        Ok(())
    }

    pub fn set_due_date(&mut self, input: &str, today: NaiveDate) -> Result<(), ValidationError> {
        self.draft.due_date = require_date(input, today)?;
        Ok(())
    }

    pub fn toggle_status(&mut self) {
        self.draft.completed = !self.draft.completed;
    }

    /// Whether the draft differs from the stored task.
    pub fn is_dirty(&self, store: &TaskStore) -> bool {
        store.get(self.index) != Some(&self.draft)
    }

    /// Copy the draft into its slot and persist the collection.
    ///
    /// On a write error the slot keeps the draft, so committing again retries
    /// the save.
    pub fn commit(&self, store: &mut TaskStore) -> Result<(), StoreError> {
        store.replace(self.index, self.draft.clone());
        store.save()?;
        info!("committed edit of task {} ({})", self.index, self.draft.name);
        Ok(())
    }
}
