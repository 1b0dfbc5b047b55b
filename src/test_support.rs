//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::db::{Storage, StoreError};
use crate::task::Task;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three tasks in insertion order, chosen so every sort key reorders them.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("Write report", "Q3", date(2025, 2, 1), date(2025, 3, 1), false),
        Task::new("Book flights", "Travel", date(2025, 2, 2), date(2025, 2, 20), true),
        Task::new("Fix bike", "Home", date(2025, 2, 3), date(2025, 4, 10), false),
    ]
}

#[derive(Default)]
struct Inner {
    saved: Vec<Task>,
    saves: usize,
    fail_writes: bool,
}

/// In-memory storage whose clones share state, so a test can keep a handle
/// after boxing one into a `TaskStore`.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStorage {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let storage = MemoryStorage::default();
        storage.inner.borrow_mut().saved = tasks;
        storage
    }

    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Contents of the last successful save (or the initial tasks).
    pub fn saved(&self) -> Vec<Task> {
        self.inner.borrow().saved.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.inner.borrow().saves
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.inner.borrow().saved.clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StoreError::Write {
                path: "memory".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        inner.saved = tasks.to_vec();
        inner.saves += 1;
        Ok(())
    }
}
