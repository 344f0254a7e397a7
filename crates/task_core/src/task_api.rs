use crate::error::TaskError;
use crate::model::{Status, Task};
use crate::repository;
use crate::storage::{json_store, timestamp};
use std::path::Path;

/// Create a task with a fresh id and persist the grown collection.
pub fn add_task(description: &str) -> Result<Task, TaskError> {
    let path = json_store::store_path()?;
    add_task_with_path(&path, description)
}

/// Replace a task's description and persist. Unknown ids are reported
/// without touching the backing file.
pub fn update_task(id: u64, description: &str) -> Result<Task, TaskError> {
    let path = json_store::store_path()?;
    update_task_with_path(&path, id, description)
}

/// Remove a task. Saves only when something was actually removed; returns
/// whether a deletion occurred.
pub fn delete_task(id: u64) -> Result<bool, TaskError> {
    let path = json_store::store_path()?;
    delete_task_with_path(&path, id)
}

/// Read the collection, optionally narrowed to one status. Never saves.
pub fn list_tasks(status: Option<Status>) -> Result<Vec<Task>, TaskError> {
    let path = json_store::store_path()?;
    list_tasks_with_path(&path, status)
}

/// Set a task's status label and persist. Same not-found/no-save policy as
/// `update_task`.
pub fn mark_status(id: u64, status: Status) -> Result<Task, TaskError> {
    let path = json_store::store_path()?;
    mark_status_with_path(&path, id, status)
}

fn add_task_with_path(path: &Path, description: &str) -> Result<Task, TaskError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TaskError::validation("description is required"));
    }

    let mut tasks = json_store::load_tasks(path)?;
    let now = timestamp::now()?;
    let task = Task {
        id: repository::generate_id(&tasks),
        description: trimmed.to_string(),
        status: Status::Todo,
        created_at: now.clone(),
        updated_at: now,
    };

    repository::insert(&mut tasks, task.clone());
    json_store::save_tasks(path, &tasks)?;

    Ok(task)
}

fn update_task_with_path(path: &Path, id: u64, description: &str) -> Result<Task, TaskError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TaskError::validation("description is required"));
    }

    let mut tasks = json_store::load_tasks(path)?;
    let now = timestamp::now()?;
    let updated = repository::update_description(&mut tasks, id, trimmed, &now)
        .ok_or_else(|| TaskError::not_found(format!("no task with id {id}")))?;
    json_store::save_tasks(path, &tasks)?;

    Ok(updated)
}

fn delete_task_with_path(path: &Path, id: u64) -> Result<bool, TaskError> {
    let mut tasks = json_store::load_tasks(path)?;
    if !repository::remove(&mut tasks, id) {
        return Ok(false);
    }
    json_store::save_tasks(path, &tasks)?;

    Ok(true)
}

fn list_tasks_with_path(path: &Path, status: Option<Status>) -> Result<Vec<Task>, TaskError> {
    let tasks = json_store::load_tasks(path)?;
    Ok(match status {
        Some(status) => repository::filter_by_status(&tasks, status),
        None => tasks,
    })
}

fn mark_status_with_path(path: &Path, id: u64, status: Status) -> Result<Task, TaskError> {
    let mut tasks = json_store::load_tasks(path)?;
    let now = timestamp::now()?;
    let updated = repository::update_status(&mut tasks, id, status, &now)
        .ok_or_else(|| TaskError::not_found(format!("no task with id {id}")))?;
    json_store::save_tasks(path, &tasks)?;

    Ok(updated)
}
