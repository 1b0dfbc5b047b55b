//! Task storage.
//!
//! This module provides the `Storage` contract over the durable task file, the
//! JSON file implementation of it, and the `TaskStore` that owns the in-memory
//! collection for the lifetime of the process.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::task::Task;

/// Error type for loading and saving the task collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("could not encode tasks: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    /// Whether startup can continue with an empty collection after this error.
    pub fn is_recoverable_on_load(&self) -> bool {
        matches!(self, StoreError::NotFound { .. } | StoreError::Read { .. })
    }
}

/// Durable load/save of the whole task collection.
pub trait Storage {
    fn load(&self) -> Result<Vec<Task>, StoreError>;
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}

/// Stores tasks as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: &Path) -> Self {
        JsonFileStorage {
            path: path.to_path_buf(),
        }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        // Raw bytes, so invalid UTF-8 surfaces as a parse error.
        let buf = match fs::read(&self.path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    path: self.path.clone(),
                })
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&buf).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Whole-file overwrite via temp file + rename.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(tasks).map_err(StoreError::Encode)?;
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp).map_err(write_err)?;
        f.write_all(data.as_bytes()).map_err(write_err)?;
        f.flush().map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}

/// Owner of the in-memory task collection.
///
/// Tasks are addressed by their index in the collection.
pub struct TaskStore {
    storage: Box<dyn Storage>,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the collection from storage.
    ///
    /// A missing or unreadable file yields an empty collection and a warning
    /// message for the user. A file that cannot be parsed is an error; nothing
    /// is written back in that case.
    pub fn open(storage: Box<dyn Storage>) -> Result<(Self, Option<String>), StoreError> {
        match storage.load() {
            Ok(tasks) => {
                info!("loaded {} task(s)", tasks.len());
                Ok((TaskStore { storage, tasks }, None))
            }
            Err(e) if e.is_recoverable_on_load() => {
                warn!("{e}; starting with an empty task list");
                let store = TaskStore {
                    storage,
                    tasks: Vec::new(),
                };
                Ok((store, Some(format!("{e}. Starting with no tasks."))))
            }
            Err(e) => Err(e),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task and return its index. Does not persist.
    pub fn push(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Overwrite the task at `index`. Does not persist.
    pub fn replace(&mut self, index: usize, task: Task) -> bool {
        match self.tasks.get_mut(index) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Persist the whole collection.
    pub fn save(&self) -> Result<(), StoreError> {
        self.storage.save(&self.tasks)?;
        info!("saved {} task(s)", self.tasks.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, sample_tasks, MemoryStorage};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_starts_empty_with_warning() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data").join("data.json");
        let (store, warning) = TaskStore::open(Box::new(JsonFileStorage::new(&path))).unwrap();

        assert!(store.is_empty());
        assert!(warning.unwrap().contains("not found"));
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_fatal_and_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.json");
        fs::write(&path, "[{\"name\": \"oops\",").unwrap();

        let result = TaskStore::open(Box::new(JsonFileStorage::new(&path)));

        assert!(matches!(result, Err(StoreError::Parse { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[{\"name\": \"oops\",");
    }

    #[test]
    fn test_non_utf8_file_is_fatal_and_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.json");
        let bytes = b"[{\"name\": \"caf\xe9\", \"project\": \"x\"";
        fs::write(&path, bytes).unwrap();

        let result = TaskStore::open(Box::new(JsonFileStorage::new(&path)));

        match result {
            Err(err) => {
                assert!(matches!(err, StoreError::Parse { .. }));
                assert!(!err.is_recoverable_on_load());
            }
            Ok(_) => panic!("non-UTF-8 file must not open as an empty store"),
        }
        assert_eq!(fs::read(&path).unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_empty_or_null_file_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        for content in ["", "null", "{}"] {
            let path = tmp.path().join("data.json");
            fs::write(&path, content).unwrap();
            let err = JsonFileStorage::new(&path).load().unwrap_err();
            assert!(matches!(err, StoreError::Parse { .. }), "content {content:?}");
            assert!(!err.is_recoverable_on_load());
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("data.json");
        let storage = JsonFileStorage::new(&path);

        storage.save(&sample_tasks()).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, sample_tasks());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_writes_json_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.json");
        JsonFileStorage::new(&path).save(&sample_tasks()[..1]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["name"], "Write report");
        assert_eq!(first["dueDate"], "2025-03-01");
        assert_eq!(first["status"], false);
    }

    #[test]
    fn test_write_failure_keeps_memory() {
        let storage = MemoryStorage::with_tasks(sample_tasks());
        let (mut store, _) = TaskStore::open(Box::new(storage.clone())).unwrap();
        storage.fail_writes(true);

        let mut task = store.get(0).unwrap().clone();
        task.name = "Renamed".to_string();
        assert!(store.replace(0, task));

        assert!(matches!(store.save(), Err(StoreError::Write { .. })));
        assert_eq!(store.get(0).unwrap().name, "Renamed");
        assert_eq!(storage.saved()[0].name, "Write report");
    }

    #[test]
    fn test_push_and_replace_by_index() {
        let (mut store, _) = TaskStore::open(Box::new(MemoryStorage::default())).unwrap();
        let task = Task::new("a", "b", date(2025, 1, 1), date(2025, 1, 2), false);

        assert_eq!(store.push(task.clone()), 0);
        assert!(!store.replace(3, task));
        assert_eq!(store.len(), 1);
    }
}
