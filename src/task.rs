//! Task data structure.
//!
//! A task has no id of its own; it is identified by its position in the
//! collection held by the task store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item as persisted in the data file.
///
/// Field names are camelCase on disk. The PascalCase aliases let files written
/// by the earlier schema load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Project")]
    pub project: String,
    #[serde(default, alias = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
    #[serde(alias = "DueDate")]
    pub due_date: NaiveDate,
    #[serde(rename = "status", alias = "Status", alias = "completed")]
    pub completed: bool,
}

impl Task {
    pub fn new(name: &str, project: &str, creation_date: NaiveDate, due_date: NaiveDate, completed: bool) -> Self {
        Task {
            name: name.to_string(),
            project: project.to_string(),
            creation_date: Some(creation_date),
            due_date,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_serialized_field_names() {
        let task = Task::new("Write report", "Q3", date(2025, 2, 10), date(2025, 3, 1), false);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Write report",
                "project": "Q3",
                "creationDate": "2025-02-10",
                "dueDate": "2025-03-01",
                "status": false
            })
        );
    }

    #[test]
    fn test_reads_pascal_case_schema() {
        let raw = r#"{
            "Name": "Buy milk",
            "Project": "Home",
            "DueDate": "2024-11-05",
            "CreationDate": "2024-11-01",
            "Status": true
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task, Task::new("Buy milk", "Home", date(2024, 11, 1), date(2024, 11, 5), true));
    }

    #[test]
    fn test_creation_date_is_optional() {
        let raw = r#"{"name": "a", "project": "b", "dueDate": "2024-01-02", "completed": false}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.creation_date, None);
        assert!(!serde_json::to_string(&task).unwrap().contains("creationDate"));
    }
}
