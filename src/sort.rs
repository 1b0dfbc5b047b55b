//! Sorted views over the task collection.

use std::cmp::Ordering;

use crate::fields::SortKey;
use crate::task::Task;

/// Order `tasks` by `key` without touching the collection.
///
/// Each entry pairs the task with its index in `tasks`, so a row picked from
/// the sorted view still addresses the right slot. The sort is stable.
pub fn sorted(tasks: &[Task], key: SortKey) -> Vec<(usize, &Task)> {
    let mut view: Vec<(usize, &Task)> = tasks.iter().enumerate().collect();
    if key != SortKey::Unordered {
        view.sort_by(|(_, a), (_, b)| compare(a, b, key));
    }
    view
}

fn compare(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::Unordered => Ordering::Equal,
        SortKey::Project => a.project.cmp(&b.project),
        SortKey::Due => a.due_date.cmp(&b.due_date),
        // Completed first.
        SortKey::Status => b.completed.cmp(&a.completed),
    }
}
