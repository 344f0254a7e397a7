//! Pure in-memory operations over a loaded task collection. No I/O and no
//! clock access; mutation time comes in as an already-formatted string.

use crate::model::{Status, Task};

/// Next free id: 1 for an empty collection, otherwise max + 1. Gaps left by
/// deletions are never refilled.
pub fn generate_id(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .map(|task| task.id)
        .max()
        .map_or(1, |max| max + 1)
}

pub fn find_by_id(tasks: &[Task], id: u64) -> Option<&Task> {
    tasks.iter().find(|task| task.id == id)
}

/// Append a task. The caller guarantees the id was generated against this
/// collection and is unique.
pub fn insert(tasks: &mut Vec<Task>, task: Task) {
    tasks.push(task);
}

pub fn update_description(
    tasks: &mut [Task],
    id: u64,
    description: &str,
    now: &str,
) -> Option<Task> {
    let task = tasks.iter_mut().find(|task| task.id == id)?;
    task.description = description.to_string();
    task.updated_at = now.to_string();
    Some(task.clone())
}

pub fn update_status(tasks: &mut [Task], id: u64, status: Status, now: &str) -> Option<Task> {
    let task = tasks.iter_mut().find(|task| task.id == id)?;
    task.status = status;
    task.updated_at = now.to_string();
    Some(task.clone())
}

/// Remove the task with the given id. Returns whether anything was removed;
/// the collection is untouched when the id is absent.
pub fn remove(tasks: &mut Vec<Task>, id: u64) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Stable sub-sequence of tasks carrying the given status.
pub fn filter_by_status(tasks: &[Task], status: Status) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect()
}
